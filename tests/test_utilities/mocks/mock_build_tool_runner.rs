use maven_dependency_explorer::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock BuildToolRunner that writes a canned DOT description
#[derive(Clone)]
pub struct MockBuildToolRunner {
    pub content: String,
    pub should_fail: bool,
    pub invocations: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockBuildToolRunner {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            should_fail: false,
            invocations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new("")
        }
    }

    pub fn invocation_count(&self) -> usize {
        self.invocations.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl BuildToolRunner for MockBuildToolRunner {
    async fn write_dependency_graph(&self, project_path: &Path, output_file: &Path) -> Result<()> {
        self.invocations
            .lock()
            .unwrap()
            .push(project_path.to_path_buf());
        if self.should_fail {
            anyhow::bail!("Mock build tool failure");
        }
        std::fs::write(output_file, &self.content)?;
        Ok(())
    }

    fn tool_name(&self) -> String {
        "MockMaven".to_string()
    }
}
