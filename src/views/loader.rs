//! Memoizing view loader.
//!
//! Resolving a route yields a `ViewName`; turning that into a renderable
//! module may require an asynchronous code fetch. The loader runs that
//! fetch at most once per view and hands every caller the same `Arc`.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use thiserror::Error;
use tokio::sync::OnceCell;

use crate::views::{ViewModule, ViewName};

/// Errors from the fetch collaborator.
#[derive(Debug, Error)]
pub enum ViewLoadError {
    /// The code fetch failed (network, missing chunk).
    #[error("view fetch failed for {view:?}: {reason}")]
    Fetch { view: ViewName, reason: String },
}

/// Asynchronous code-fetch collaborator.
///
/// Safe to call multiple times for the same view; the loader guarantees
/// it will not.
#[async_trait]
pub trait ViewFetch: Send + Sync {
    async fn fetch(&self, view: ViewName) -> Result<ViewModule, ViewLoadError>;
}

#[async_trait]
impl<T: ViewFetch + ?Sized> ViewFetch for Arc<T> {
    async fn fetch(&self, view: ViewName) -> Result<ViewModule, ViewLoadError> {
        (**self).fetch(view).await
    }
}

/// Load-once-memoize indirection from view name to loaded module.
pub struct ViewLoader<F> {
    fetch: F,
    cache: DashMap<ViewName, Arc<OnceCell<Arc<ViewModule>>>>,
}

impl<F: ViewFetch> ViewLoader<F> {
    pub fn new(fetch: F) -> Self {
        Self {
            fetch,
            cache: DashMap::new(),
        }
    }

    /// Resolve a view, fetching its module on first use.
    ///
    /// Idempotent: repeated and concurrent calls for the same view return
    /// the same `Arc` and execute the fetch side effect at most once. A
    /// failed fetch leaves the cell empty, so a later navigation retries.
    pub async fn load(&self, view: ViewName) -> Result<Arc<ViewModule>, ViewLoadError> {
        let cell = self
            .cache
            .entry(view)
            .or_insert_with(|| Arc::new(OnceCell::new()))
            .clone();

        let module = cell
            .get_or_try_init(|| async {
                let module = self.fetch.fetch(view).await?;
                tracing::debug!(view = ?view, chunk = ?module.chunk, "view module loaded");
                Ok::<_, ViewLoadError>(Arc::new(module))
            })
            .await?;

        Ok(module.clone())
    }

    /// Whether a view's module is already resident.
    pub fn is_loaded(&self, view: ViewName) -> bool {
        self.cache
            .get(&view)
            .map(|cell| cell.initialized())
            .unwrap_or(false)
    }
}
