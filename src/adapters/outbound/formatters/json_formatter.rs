use crate::application::read_models::DependencyView;
use crate::ports::outbound::TreeFormatter;
use crate::shared::Result;

/// JsonFormatter adapter rendering the folded tree as a nested JSON object
///
/// Every node becomes a key whose value is the object of its resolved
/// children; leaves are `{}`. Key order follows the tree.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeFormatter for JsonFormatter {
    fn format(&self, view: &DependencyView) -> Result<String> {
        let mut json = serde_json::to_string_pretty(&view.tree)
            .map_err(|e| anyhow::anyhow!("Failed to serialize dependency tree: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}
