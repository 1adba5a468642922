pub mod fabric_scanner;
mod fields;
pub mod health_correlator;
pub mod port_map;
pub mod topology_parser;

pub use fabric_scanner::{DownLinkMap, FabricScanner};
pub use health_correlator::HealthCorrelator;
pub use topology_parser::TopologyParser;
