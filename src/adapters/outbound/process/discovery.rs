use super::run_diagnostic;
use crate::ports::outbound::TopologySource;
use crate::shared::Result;

/// Fabric-discovery binary, invoked with no arguments.
const IBNETDISCOVER: &str = "ibnetdiscover";

/// IbNetDiscoverSource adapter running the fabric-discovery tool
///
/// This adapter implements the TopologySource port by invoking
/// `ibnetdiscover` and returning its stdout as the raw topology dump.
pub struct IbNetDiscoverSource {
    command: String,
}

impl IbNetDiscoverSource {
    pub fn new() -> Self {
        Self {
            command: IBNETDISCOVER.to_string(),
        }
    }

    /// Overrides the binary to invoke. Intended for tests.
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Default for IbNetDiscoverSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TopologySource for IbNetDiscoverSource {
    fn fetch_topology(&self) -> Result<String> {
        run_diagnostic(&self.command, &[])
    }
}
