//! Navigation guard.
//!
//! # Data Flow
//! ```text
//! Navigation request (to, from)
//!     → session.refresh() (async auth check, the only suspension point)
//!     → decision table over (is_authenticated, is_allowlisted(to.path))
//!     → GuardDecision: Proceed | Redirect
//!
//! refresh() failure
//!     → logged once
//!     → failure policy: open (proceed) or closed (treat as unauthenticated)
//! ```
//!
//! # Design Decisions
//! - Session state is injected per invocation, no ambient singleton
//! - Decisions are transient values, computed fresh per navigation
//! - Overlapping navigations are independent invocations, no dedup
//! - The fail-open default mirrors observed behavior; fail-closed is
//!   available through configuration

pub mod allowlist;
pub mod session;

pub use allowlist::{is_allowlisted, PATHS_WITHOUT_AUTHENTICATION};
pub use session::{SessionError, SessionState};

use crate::config::{FailurePolicy, GuardConfig};

/// The path a navigation is headed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    /// Path component, as matched against routes and the allowlist.
    pub path: String,

    /// Full path including query string, preserved on login redirects.
    pub full_path: String,
}

impl NavigationTarget {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            full_path: path.to_string(),
        }
    }

    pub fn with_full_path(path: &str, full_path: &str) -> Self {
        Self {
            path: path.to_string(),
            full_path: full_path.to_string(),
        }
    }
}

/// Where a rejected navigation is sent instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    pub path: String,

    /// Origin preserved as a `from` query parameter, when present.
    pub from_query: Option<String>,
}

impl RedirectTarget {
    fn to(path: &str) -> Self {
        Self {
            path: path.to_string(),
            from_query: None,
        }
    }

    fn to_with_from(path: &str, from: &str) -> Self {
        Self {
            path: path.to_string(),
            from_query: Some(from.to_string()),
        }
    }
}

/// Outcome of one guard invocation. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(RedirectTarget),
}

const HOME_PATH: &str = "/";
const LOGIN_PATH: &str = "/login";

/// Pre-navigation authentication gate.
pub struct Guard {
    on_auth_check_failure: FailurePolicy,
}

impl Guard {
    pub fn new(config: &GuardConfig) -> Self {
        Self {
            on_auth_check_failure: config.on_auth_check_failure,
        }
    }

    /// Gate one navigation attempt.
    ///
    /// Awaits the session refresh, then applies the decision table.
    /// Always resolves to exactly one decision; a failed refresh is
    /// logged once and resolved per the configured failure policy.
    pub async fn check<S: SessionState>(
        &self,
        session: &S,
        to: &NavigationTarget,
        from: &str,
    ) -> GuardDecision {
        let authenticated = match session.refresh().await {
            Ok(()) => session.is_authenticated(),
            Err(err) => match self.on_auth_check_failure {
                FailurePolicy::Open => {
                    tracing::error!(error = %err, to = %to.path, "auth check failed, proceeding");
                    return GuardDecision::Proceed;
                }
                FailurePolicy::Closed => {
                    tracing::error!(error = %err, to = %to.path, "auth check failed, treating as unauthenticated");
                    false
                }
            },
        };

        let decision = decide(authenticated, to);
        tracing::debug!(to = %to.path, from = %from, authenticated, decision = ?decision, "navigation gated");
        decision
    }
}

/// The decision table over (is_authenticated, is_allowlisted(to.path)).
fn decide(authenticated: bool, to: &NavigationTarget) -> GuardDecision {
    let allowlisted = is_allowlisted(&to.path);

    if authenticated && allowlisted {
        GuardDecision::Redirect(RedirectTarget::to(HOME_PATH))
    } else if !authenticated && !allowlisted {
        if to.path == HOME_PATH {
            GuardDecision::Redirect(RedirectTarget::to(LOGIN_PATH))
        } else {
            GuardDecision::Redirect(RedirectTarget::to_with_from(LOGIN_PATH, &to.full_path))
        }
    } else {
        GuardDecision::Proceed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use tracing_subscriber::layer::SubscriberExt;

    /// Counts ERROR events emitted while installed.
    struct ErrorCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for ErrorCounter {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            if *event.metadata().level() == tracing::Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    struct FakeSession {
        authenticated: bool,
        fail_refresh: bool,
        refresh_calls: AtomicUsize,
    }

    impl FakeSession {
        fn authenticated() -> Self {
            Self {
                authenticated: true,
                fail_refresh: false,
                refresh_calls: AtomicUsize::new(0),
            }
        }

        fn anonymous() -> Self {
            Self {
                authenticated: false,
                fail_refresh: false,
                refresh_calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                authenticated: false,
                fail_refresh: true,
                refresh_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl SessionState for FakeSession {
        async fn refresh(&self) -> Result<(), SessionError> {
            self.refresh_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_refresh {
                Err(SessionError::Request("connection refused".to_string()))
            } else {
                Ok(())
            }
        }

        fn is_authenticated(&self) -> bool {
            self.authenticated
        }
    }

    fn guard(policy: FailurePolicy) -> Guard {
        Guard::new(&GuardConfig {
            on_auth_check_failure: policy,
        })
    }

    #[tokio::test]
    async fn test_authenticated_on_allowlisted_path_redirects_home() {
        let session = FakeSession::authenticated();
        let decision = guard(FailurePolicy::Open)
            .check(&session, &NavigationTarget::new("/login"), "/")
            .await;
        assert_eq!(decision, GuardDecision::Redirect(RedirectTarget::to("/")));
    }

    #[tokio::test]
    async fn test_anonymous_on_protected_path_redirects_to_login_with_from() {
        let session = FakeSession::anonymous();
        let decision = guard(FailurePolicy::Open)
            .check(&session, &NavigationTarget::new("/workouts"), "/")
            .await;
        assert_eq!(
            decision,
            GuardDecision::Redirect(RedirectTarget::to_with_from("/login", "/workouts"))
        );
    }

    #[tokio::test]
    async fn test_anonymous_on_root_redirects_without_query() {
        let session = FakeSession::anonymous();
        let decision = guard(FailurePolicy::Open)
            .check(&session, &NavigationTarget::new("/"), "/")
            .await;
        assert_eq!(
            decision,
            GuardDecision::Redirect(RedirectTarget::to("/login"))
        );
    }

    #[tokio::test]
    async fn test_authenticated_on_protected_path_proceeds() {
        let session = FakeSession::authenticated();
        let decision = guard(FailurePolicy::Open)
            .check(&session, &NavigationTarget::new("/workouts"), "/")
            .await;
        assert_eq!(decision, GuardDecision::Proceed);
    }

    #[tokio::test]
    async fn test_anonymous_on_allowlisted_path_proceeds() {
        let session = FakeSession::anonymous();
        let decision = guard(FailurePolicy::Open)
            .check(&session, &NavigationTarget::new("/register"), "/")
            .await;
        assert_eq!(decision, GuardDecision::Proceed);
    }

    #[tokio::test]
    async fn test_full_path_preserved_in_from_query() {
        let session = FakeSession::anonymous();
        let to = NavigationTarget::with_full_path("/workouts", "/workouts?page=2");
        let decision = guard(FailurePolicy::Open).check(&session, &to, "/").await;
        assert_eq!(
            decision,
            GuardDecision::Redirect(RedirectTarget::to_with_from("/login", "/workouts?page=2"))
        );
    }

    #[tokio::test]
    async fn test_failed_auth_check_fails_open() {
        let session = FakeSession::failing();
        let decision = guard(FailurePolicy::Open)
            .check(&session, &NavigationTarget::new("/workouts"), "/")
            .await;
        assert_eq!(decision, GuardDecision::Proceed);
        // One check, one (logged) rejection per navigation attempt.
        assert_eq!(session.refresh_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_auth_check_logs_exactly_one_error() {
        let errors = Arc::new(AtomicUsize::new(0));
        let subscriber =
            tracing_subscriber::registry().with(ErrorCounter(errors.clone()));
        let _default = tracing::subscriber::set_default(subscriber);

        let session = FakeSession::failing();
        let decision = guard(FailurePolicy::Open)
            .check(&session, &NavigationTarget::new("/workouts"), "/")
            .await;

        assert_eq!(decision, GuardDecision::Proceed);
        // The rejection reaches the logging channel once per attempt.
        assert_eq!(errors.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fail_closed_also_logs_exactly_one_error() {
        let errors = Arc::new(AtomicUsize::new(0));
        let subscriber =
            tracing_subscriber::registry().with(ErrorCounter(errors.clone()));
        let _default = tracing::subscriber::set_default(subscriber);

        let session = FakeSession::failing();
        let decision = guard(FailurePolicy::Closed)
            .check(&session, &NavigationTarget::new("/workouts"), "/")
            .await;

        assert!(matches!(decision, GuardDecision::Redirect(_)));
        assert_eq!(errors.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_successful_check_logs_no_error() {
        let errors = Arc::new(AtomicUsize::new(0));
        let subscriber =
            tracing_subscriber::registry().with(ErrorCounter(errors.clone()));
        let _default = tracing::subscriber::set_default(subscriber);

        let session = FakeSession::authenticated();
        guard(FailurePolicy::Open)
            .check(&session, &NavigationTarget::new("/workouts"), "/")
            .await;

        assert_eq!(errors.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failed_auth_check_fail_closed_redirects() {
        let session = FakeSession::failing();
        let decision = guard(FailurePolicy::Closed)
            .check(&session, &NavigationTarget::new("/workouts"), "/")
            .await;
        assert_eq!(
            decision,
            GuardDecision::Redirect(RedirectTarget::to_with_from("/login", "/workouts"))
        );
    }

    #[tokio::test]
    async fn test_fail_closed_still_allows_allowlisted_paths() {
        let session = FakeSession::failing();
        let decision = guard(FailurePolicy::Closed)
            .check(&session, &NavigationTarget::new("/login"), "/")
            .await;
        assert_eq!(decision, GuardDecision::Proceed);
    }
}
