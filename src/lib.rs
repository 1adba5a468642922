//! ib-health - InfiniBand fabric port-mapping and health-check tooling
//!
//! This library derives a physical/virtual port topology map for an
//! InfiniBand fabric and cross-references live link state against it to
//! produce a paired, deduplicated health report.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`fabric_health`): topology parsing, port arithmetic
//!   and down-link correlation
//! - **Application Layer** (`application`): use cases and DTOs
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): process, filesystem and console implementations
//! - **Shared** (`shared`): common error and result types
//!
//! # Example
//!
//! ```no_run
//! use ib_health::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let link_status_source = IbLinkInfoSource::new();
//! let mapping_store = CsvMappingStore::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case with injected dependencies
//! let use_case = CheckFabricUseCase::new(link_status_source, mapping_store, progress_reporter);
//!
//! // Execute
//! let request = CheckFabricRequest::new(PathBuf::from("full_port_mapping.csv"));
//! let response = use_case.execute(request)?;
//!
//! // Render the report
//! let renderer = ReportRenderer::new(true);
//! println!("{}", renderer.render(&response.report));
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod fabric_health;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{
        ReportRenderer, StderrProgressReporter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::filesystem::{dated_snapshot_name, CsvMappingStore};
    pub use crate::adapters::outbound::process::{IbLinkInfoSource, IbNetDiscoverSource};
    pub use crate::application::dto::{
        CheckFabricRequest, CheckFabricResponse, GenerateMappingRequest, GenerateMappingResponse,
    };
    pub use crate::application::use_cases::{CheckFabricUseCase, GenerateMappingUseCase};
    pub use crate::fabric_health::domain::{
        DeviceType, HealthIssue, HealthReport, LinkDirection, LinkKey, MappingRecord, MappingRow,
        MappingTable, Severity,
    };
    pub use crate::fabric_health::services::{FabricScanner, HealthCorrelator, TopologyParser};
    pub use crate::ports::outbound::{
        LinkStatusSource, MappingStore, ProgressReporter, ReportPresenter, TopologySource,
    };
    pub use crate::shared::Result;
}
