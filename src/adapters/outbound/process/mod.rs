//! Process adapters running the external InfiniBand diagnostic tools.

mod discovery;
mod link_status;

pub use discovery::IbNetDiscoverSource;
pub use link_status::IbLinkInfoSource;

use crate::shared::error::FabricError;
use crate::shared::Result;
use std::io;
use std::process::Command;

/// Runs one diagnostic tool to completion and returns its stdout.
///
/// The call blocks until the tool exits and its output is collected in
/// full before any parsing starts; there is no streaming, timeout or
/// retry. A missing binary and a nonzero exit are both fatal. Stderr is
/// captured for the error message only, never parsed.
pub(crate) fn run_diagnostic(command: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(command)
        .args(args)
        .output()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => FabricError::CollaboratorNotFound {
                command: command.to_string(),
            },
            _ => FabricError::CollaboratorFailed {
                command: command.to_string(),
                status: e.to_string(),
                stderr: String::new(),
            },
        })?;

    if !output.status.success() {
        return Err(FabricError::CollaboratorFailed {
            command: command.to_string(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into());
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_diagnostic_captures_stdout() {
        let output = run_diagnostic("echo", &["hello"]).unwrap();
        assert_eq!(output.trim(), "hello");
    }

    #[test]
    fn test_run_diagnostic_missing_binary() {
        let result = run_diagnostic("definitely-not-a-real-binary-xyz", &[]);
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("not found"));
        assert!(err.contains("definitely-not-a-real-binary-xyz"));
    }

    #[test]
    fn test_run_diagnostic_nonzero_exit() {
        let result = run_diagnostic("false", &[]);
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("failed"));
    }
}
