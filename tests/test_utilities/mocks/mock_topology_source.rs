use ib_health::prelude::*;

/// Mock TopologySource for testing
pub struct MockTopologySource {
    pub content: String,
    pub should_fail: bool,
}

impl MockTopologySource {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl TopologySource for MockTopologySource {
    fn fetch_topology(&self) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock discovery failure");
        }
        Ok(self.content.clone())
    }
}
