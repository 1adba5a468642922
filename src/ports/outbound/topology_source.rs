use crate::shared::Result;

/// TopologySource port for obtaining a raw fabric-discovery dump
///
/// Implementations invoke the external discovery tool (or substitute
/// canned output in tests). The dump is returned whole; splitting into
/// lines and parsing happen in the domain layer.
pub trait TopologySource {
    /// Fetches the complete discovery output as one string.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The discovery tool is not installed
    /// - The discovery tool exits with a nonzero status
    fn fetch_topology(&self) -> Result<String>;
}
