use maven_dependency_explorer::prelude::*;
use std::path::Path;

/// Mock GraphDescriptionReader returning fixed content for any path
pub struct MockGraphDescriptionReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockGraphDescriptionReader {
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

impl GraphDescriptionReader for MockGraphDescriptionReader {
    fn read_description(&self, _path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock graph description read failure");
        }
        Ok(self.content.clone())
    }
}
