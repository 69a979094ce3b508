//! Session state seam consumed by the guard.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the auth-check collaborator.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The auth backend could not be reached.
    #[error("auth check request failed: {0}")]
    Request(String),

    /// The auth check did not settle in time.
    #[error("auth check timed out after {0} seconds")]
    Timeout(u64),
}

/// The authentication store as seen by the guard.
///
/// Injected explicitly per guard invocation; the guard reads derived
/// state, never mutates it. Any retry policy belongs to the
/// implementation of `refresh`, not to the guard.
#[async_trait]
pub trait SessionState: Send + Sync {
    /// Re-validate the session. May perform network I/O. On success the
    /// `is_authenticated` getter reflects current session validity.
    async fn refresh(&self) -> Result<(), SessionError>;

    /// Current session validity, as of the last successful refresh.
    fn is_authenticated(&self) -> bool;
}

#[async_trait]
impl<T: SessionState + ?Sized> SessionState for std::sync::Arc<T> {
    async fn refresh(&self) -> Result<(), SessionError> {
        (**self).refresh().await
    }

    fn is_authenticated(&self) -> bool {
        (**self).is_authenticated()
    }
}
