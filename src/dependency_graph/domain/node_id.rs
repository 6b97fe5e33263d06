use crate::shared::Result;
use serde::Serialize;
use std::borrow::Borrow;

/// Maximum length for node identifiers (security limit)
const MAX_NODE_ID_LENGTH: usize = 1024;

/// NewType wrapper for a dependency node identifier
///
/// Maven writes coordinates such as `org.slf4j:slf4j-api:jar:2.0.9:compile`,
/// but any non-empty string is accepted: the graph only needs identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();

        if id.is_empty() {
            anyhow::bail!("Node identifier cannot be empty");
        }

        // Security: Length limit to prevent DoS
        if id.len() > MAX_NODE_ID_LENGTH {
            anyhow::bail!(
                "Node identifier is too long ({} bytes). Maximum allowed: {} bytes",
                id.len(),
                MAX_NODE_ID_LENGTH
            );
        }

        if id.chars().any(|c| c.is_control()) {
            anyhow::bail!("Node identifier contains control characters");
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
