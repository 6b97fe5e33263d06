use crate::application::read_models::DependencyView;
use crate::shared::Result;
use std::future::Future;

/// Holds at most one explored dependency view
///
/// Asking for a view while one is open reuses it instead of resolving the
/// project again. `dispose` drops it so the next request starts fresh.
#[derive(Debug, Default)]
pub struct ExplorerSession {
    current: Option<DependencyView>,
}

impl ExplorerSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the open view, building it with `create` if there is none
    ///
    /// When `create` fails the session stays empty.
    pub async fn get_or_create<F, Fut>(&mut self, create: F) -> Result<&DependencyView>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<DependencyView>>,
    {
        let view = match self.current.take() {
            Some(view) => view,
            None => create().await?,
        };
        Ok(self.current.insert(view))
    }

    /// Closes the open view, if any
    pub fn dispose(&mut self) {
        self.current = None;
    }
}
