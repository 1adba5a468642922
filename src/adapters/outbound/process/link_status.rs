use super::run_diagnostic;
use crate::ports::outbound::LinkStatusSource;
use crate::shared::Result;

/// Live link-status binary.
const IBLINKINFO: &str = "iblinkinfo";

/// Flag requesting long-form one-line-per-port output.
const LONG_FORM_FLAG: &str = "-l";

/// IbLinkInfoSource adapter running the live link-status tool
///
/// This adapter implements the LinkStatusSource port by invoking
/// `iblinkinfo -l` and returning its stdout, one line per port endpoint.
pub struct IbLinkInfoSource {
    command: String,
}

impl IbLinkInfoSource {
    pub fn new() -> Self {
        Self {
            command: IBLINKINFO.to_string(),
        }
    }

    /// Overrides the binary to invoke. Intended for tests.
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Default for IbLinkInfoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkStatusSource for IbLinkInfoSource {
    fn fetch_link_status(&self) -> Result<String> {
        run_diagnostic(&self.command, &[LONG_FORM_FLAG])
    }
}
