use std::path::PathBuf;

/// GenerateMappingRequest - input for the mapping-generation use case
#[derive(Debug, Clone)]
pub struct GenerateMappingRequest {
    /// Destination for the dated mapping snapshot
    pub output_path: PathBuf,
}

impl GenerateMappingRequest {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }
}

/// GenerateMappingResponse - outcome of one mapping generation
#[derive(Debug, Clone)]
pub struct GenerateMappingResponse {
    /// Number of link records written
    pub records_written: usize,
    /// Path of the written snapshot; `None` when discovery yielded no links
    pub output_path: Option<PathBuf>,
}
