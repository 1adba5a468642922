use crate::shared::Result;

/// LinkStatusSource port for obtaining a live per-port link-status dump
///
/// Implementations invoke the external link-status tool in its long-form
/// per-port mode (or substitute canned output in tests).
pub trait LinkStatusSource {
    /// Fetches the complete link-status output as one string.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The status tool is not installed
    /// - The status tool exits with a nonzero status
    fn fetch_link_status(&self) -> Result<String>;
}
