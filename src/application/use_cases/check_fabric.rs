use crate::application::dto::{CheckFabricRequest, CheckFabricResponse};
use crate::fabric_health::services::{FabricScanner, HealthCorrelator};
use crate::ports::outbound::{LinkStatusSource, MappingStore, ProgressReporter};
use crate::shared::Result;

/// CheckFabricUseCase - correlates live link state with the mapping table
///
/// The mapping snapshot is loaded before the live scan runs, so a missing
/// or malformed snapshot fails fast without touching the fabric.
///
/// # Type Parameters
/// * `LS` - LinkStatusSource implementation
/// * `MS` - MappingStore implementation
/// * `PR` - ProgressReporter implementation
pub struct CheckFabricUseCase<LS, MS, PR> {
    link_status_source: LS,
    mapping_store: MS,
    progress_reporter: PR,
}

impl<LS, MS, PR> CheckFabricUseCase<LS, MS, PR>
where
    LS: LinkStatusSource,
    MS: MappingStore,
    PR: ProgressReporter,
{
    /// Creates a new CheckFabricUseCase with injected dependencies
    pub fn new(link_status_source: LS, mapping_store: MS, progress_reporter: PR) -> Self {
        Self {
            link_status_source,
            mapping_store,
            progress_reporter,
        }
    }

    /// Executes one health check and returns the correlated report.
    pub fn execute(&self, request: CheckFabricRequest) -> Result<CheckFabricResponse> {
        self.progress_reporter.report("Loading database...");
        let table = self.mapping_store.load(&request.mapping_path)?;
        self.progress_reporter
            .report(&format!("Done ({} links).", table.len()));

        self.progress_reporter.begin_step("Scanning fabric...");
        let dump = match self.link_status_source.fetch_link_status() {
            Ok(dump) => dump,
            Err(e) => {
                self.progress_reporter.report_error("Fabric scan failed.");
                return Err(e);
            }
        };
        self.progress_reporter.finish_step("Scanning fabric... Done.");

        let down_links = FabricScanner::scan(dump.lines());
        let report = HealthCorrelator::correlate(&table, &down_links);

        Ok(CheckFabricResponse {
            mapped_links: table.len(),
            report,
        })
    }
}
