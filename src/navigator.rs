//! Navigation orchestration.
//!
//! Ties the guard, the route table, and the view loader into the full
//! per-navigation flow: gate, match, load, hand back a renderable
//! resolution or a redirect target.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::guard::{Guard, GuardDecision, NavigationTarget, RedirectTarget, SessionState};
use crate::routing::{PropValue, RouteTable};
use crate::views::loader::{ViewFetch, ViewLoadError, ViewLoader};
use crate::views::ViewModule;

/// A navigation that reached the route table: the matched route name,
/// the loaded view modules along the chain (outermost first), captured
/// params, and merged props.
#[derive(Debug)]
pub struct ResolvedNavigation {
    pub route_name: String,
    pub views: Vec<Arc<ViewModule>>,
    pub params: BTreeMap<String, String>,
    pub props: BTreeMap<String, PropValue>,
}

/// Outcome of one navigation request.
#[derive(Debug)]
pub enum NavigationOutcome {
    Resolved(ResolvedNavigation),
    Redirected(RedirectTarget),
}

/// The navigation layer entry point.
pub struct Navigator<S, F> {
    table: RouteTable,
    guard: Guard,
    loader: ViewLoader<F>,
    session: S,
}

impl<S: SessionState, F: ViewFetch> Navigator<S, F> {
    pub fn new(table: RouteTable, guard: Guard, loader: ViewLoader<F>, session: S) -> Self {
        Self {
            table,
            guard,
            loader,
            session,
        }
    }

    /// Process one navigation request.
    ///
    /// The guard runs first and may substitute a redirect; only a
    /// proceeding navigation touches the route table and the loader.
    /// Invocations are independent; nothing here serializes overlapping
    /// navigations.
    pub async fn navigate(
        &self,
        to: &NavigationTarget,
        from: &str,
    ) -> Result<NavigationOutcome, ViewLoadError> {
        match self.guard.check(&self.session, to, from).await {
            GuardDecision::Redirect(target) => {
                tracing::info!(to = %to.path, redirect = %target.path, "navigation redirected");
                Ok(NavigationOutcome::Redirected(target))
            }
            GuardDecision::Proceed => {
                let matched = self.table.resolve(&to.path);

                let mut views = Vec::with_capacity(matched.chain.len());
                for node in &matched.chain {
                    views.push(self.loader.load(node.view).await?);
                }

                tracing::info!(to = %to.path, route = matched.name(), "navigation resolved");
                Ok(NavigationOutcome::Resolved(ResolvedNavigation {
                    route_name: matched.name().to_string(),
                    views,
                    params: matched.params,
                    props: matched.props,
                }))
            }
        }
    }
}
