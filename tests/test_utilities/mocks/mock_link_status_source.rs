use ib_health::prelude::*;

/// Mock LinkStatusSource for testing
pub struct MockLinkStatusSource {
    pub content: String,
    pub should_fail: bool,
}

impl MockLinkStatusSource {
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

impl LinkStatusSource for MockLinkStatusSource {
    fn fetch_link_status(&self) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock link-status failure");
        }
        Ok(self.content.clone())
    }
}
