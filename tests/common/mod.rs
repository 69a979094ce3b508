//! Shared mock collaborators for integration tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use fitnav::guard::{SessionError, SessionState};
use fitnav::views::loader::{ViewFetch, ViewLoadError};
use fitnav::views::{ViewModule, ViewName};

/// A session backend with scriptable auth state and failure mode.
#[derive(Default)]
pub struct MockSession {
    authenticated: AtomicBool,
    fail_refresh: AtomicBool,
    pub refresh_calls: AtomicUsize,
}

impl MockSession {
    pub fn new(authenticated: bool) -> Self {
        let session = Self::default();
        session.authenticated.store(authenticated, Ordering::SeqCst);
        session
    }

    #[allow(dead_code)]
    pub fn set_authenticated(&self, value: bool) {
        self.authenticated.store(value, Ordering::SeqCst);
    }

    #[allow(dead_code)]
    pub fn set_failing(&self, value: bool) {
        self.fail_refresh.store(value, Ordering::SeqCst);
    }
}

#[async_trait]
impl SessionState for MockSession {
    async fn refresh(&self) -> Result<(), SessionError> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_refresh.load(Ordering::SeqCst) {
            Err(SessionError::Request(
                "auth backend unreachable".to_string(),
            ))
        } else {
            Ok(())
        }
    }

    fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }
}

/// A fetch collaborator that counts code fetches.
#[derive(Default)]
pub struct MockFetch {
    pub fetches: AtomicUsize,
}

#[async_trait]
impl ViewFetch for MockFetch {
    async fn fetch(&self, view: ViewName) -> Result<ViewModule, ViewLoadError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(ViewModule::new(view))
    }
}
