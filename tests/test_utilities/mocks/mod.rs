/// Mock implementations for testing
mod mock_link_status_source;
mod mock_progress_reporter;
mod mock_topology_source;

pub use mock_link_status_source::MockLinkStatusSource;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_topology_source::MockTopologySource;
