use crate::fabric_health::domain::HealthReport;
use std::path::PathBuf;

/// CheckFabricRequest - input for the health-check use case
#[derive(Debug, Clone)]
pub struct CheckFabricRequest {
    /// Mapping snapshot to read (the fixed, undated file)
    pub mapping_path: PathBuf,
}

impl CheckFabricRequest {
    pub fn new(mapping_path: PathBuf) -> Self {
        Self { mapping_path }
    }
}

/// CheckFabricResponse - outcome of one health check
#[derive(Debug, Clone)]
pub struct CheckFabricResponse {
    /// Number of links in the loaded mapping table
    pub mapped_links: usize,
    /// Deduplicated, classified report
    pub report: HealthReport,
}
