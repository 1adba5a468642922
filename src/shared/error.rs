use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow wrapping scripts and schedulers to distinguish
/// argument mistakes from runtime failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - a report was produced, healthy or not
    Success = 0,
    /// Fatal runtime error (missing diagnostic tool, missing mapping file, I/O failure)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Fatal error kinds of the health-check pipeline.
///
/// Every variant aborts the current run after one diagnostic line; there
/// is no recoverable category. Unrecognized individual lines inside tool
/// output are skipped and never surface here.
#[derive(Debug, Error)]
pub enum FabricError {
    #[error("Diagnostic command not found: {command}\n\n💡 Hint: Run this on a fabric management node with infiniband-diags installed")]
    CollaboratorNotFound { command: String },

    #[error("Diagnostic command failed: {command} ({status})\n{stderr}")]
    CollaboratorFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Mapping file not found: {path}\n\n💡 Hint: Run `ib-health generate-mapping` first, then point --db at the snapshot")]
    MappingFileNotFound { path: PathBuf },

    #[error("Mapping file is malformed: {path}\nDetails: {details}\n\n💡 Hint: The snapshot must carry the Switch_Name, vPort, pPort, Target_Name, Target_Port and Device_Type columns")]
    MappingFileMalformed { path: PathBuf, details: String },

    #[error("Failed to write mapping file: {path}\nDetails: {details}\n\n💡 Hint: Check that the directory exists and you have write permissions")]
    ReportWriteFailed { path: PathBuf, details: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
    }

    #[test]
    fn test_collaborator_not_found_display() {
        let error = FabricError::CollaboratorNotFound {
            command: "ibnetdiscover".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("not found"));
        assert!(display.contains("ibnetdiscover"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_collaborator_failed_display() {
        let error = FabricError::CollaboratorFailed {
            command: "iblinkinfo".to_string(),
            status: "exit status: 1".to_string(),
            stderr: "ibpanic: discovery failed".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("failed"));
        assert!(display.contains("iblinkinfo"));
        assert!(display.contains("exit status: 1"));
        assert!(display.contains("ibpanic: discovery failed"));
    }

    #[test]
    fn test_mapping_file_not_found_display() {
        let error = FabricError::MappingFileNotFound {
            path: PathBuf::from("/var/lib/full_port_mapping.csv"),
        };
        let display = format!("{}", error);
        assert!(display.contains("Mapping file not found"));
        assert!(display.contains("/var/lib/full_port_mapping.csv"));
        assert!(display.contains("generate-mapping"));
    }

    #[test]
    fn test_mapping_file_malformed_display() {
        let error = FabricError::MappingFileMalformed {
            path: PathBuf::from("broken.csv"),
            details: "missing field `vPort`".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("malformed"));
        assert!(display.contains("broken.csv"));
        assert!(display.contains("missing field `vPort`"));
    }

    #[test]
    fn test_report_write_failed_display() {
        let error = FabricError::ReportWriteFailed {
            path: PathBuf::from("/readonly/out.csv"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write"));
        assert!(display.contains("Permission denied"));
    }
}
