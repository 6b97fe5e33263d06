/// Restrictions applied to a view before it is rendered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Keep only branches containing a node that matches this term
    pub search: Option<String>,
    /// Maximum number of levels shown below each top-level entry
    pub max_depth: Option<usize>,
    /// Show only the entries no other entry depends on
    pub roots_only: bool,
}

impl DisplayOptions {
    /// Normalized search term: trimmed, lowercased, `None` when blank
    pub fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
    }
}
