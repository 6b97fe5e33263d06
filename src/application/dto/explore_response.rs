use crate::application::read_models::DependencyView;

/// ExploreResponse - Internal response DTO for the explore use case
#[derive(Debug, Clone)]
pub struct ExploreResponse {
    /// Folded tree with its summary counts
    pub view: DependencyView,
}

impl ExploreResponse {
    pub fn new(view: DependencyView) -> Self {
        Self { view }
    }
}
