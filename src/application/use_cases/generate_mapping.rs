use crate::application::dto::{GenerateMappingRequest, GenerateMappingResponse};
use crate::fabric_health::services::TopologyParser;
use crate::ports::outbound::{MappingStore, ProgressReporter, TopologySource};
use crate::shared::Result;

/// GenerateMappingUseCase - builds and persists the port-mapping snapshot
///
/// This use case orchestrates the discovery tool, the topology parser
/// and the mapping store through injected ports.
///
/// # Type Parameters
/// * `TS` - TopologySource implementation
/// * `MS` - MappingStore implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateMappingUseCase<TS, MS, PR> {
    topology_source: TS,
    mapping_store: MS,
    progress_reporter: PR,
}

impl<TS, MS, PR> GenerateMappingUseCase<TS, MS, PR>
where
    TS: TopologySource,
    MS: MappingStore,
    PR: ProgressReporter,
{
    /// Creates a new GenerateMappingUseCase with injected dependencies
    pub fn new(topology_source: TS, mapping_store: MS, progress_reporter: PR) -> Self {
        Self {
            topology_source,
            mapping_store,
            progress_reporter,
        }
    }

    /// Executes the mapping generation.
    ///
    /// Discovery output is collected in full, parsed into mapping records
    /// and written as a sorted snapshot. When discovery yields no link
    /// records at all, nothing is written and the response carries no
    /// output path.
    pub fn execute(&self, request: GenerateMappingRequest) -> Result<GenerateMappingResponse> {
        self.progress_reporter
            .begin_step("Scanning fabric topology...");
        let dump = match self.topology_source.fetch_topology() {
            Ok(dump) => dump,
            Err(e) => {
                self.progress_reporter.report_error("Topology scan failed.");
                return Err(e);
            }
        };
        self.progress_reporter.finish_step("Topology scan complete.");

        self.progress_reporter.report("Parsing topology data...");
        let records = TopologyParser::parse(dump.lines());

        if records.is_empty() {
            self.progress_reporter.report_error(
                "⚠️  Warning: no link records found. Check that the discovery output is sane.",
            );
            return Ok(GenerateMappingResponse {
                records_written: 0,
                output_path: None,
            });
        }

        self.mapping_store.save(&records, &request.output_path)?;

        self.progress_reporter.report_completion(&format!(
            "✅ Success! Mapping table written: {}",
            request.output_path.display()
        ));
        self.progress_reporter
            .report(&format!("Processed {} link(s).", records.len()));

        Ok(GenerateMappingResponse {
            records_written: records.len(),
            output_path: Some(request.output_path),
        })
    }
}
