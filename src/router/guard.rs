//! Route guard for authenticated-only routes.

use std::sync::Arc;

use super::location::Location;

/// Decides whether the visitor may see guarded routes.
///
/// Evaluated once per navigation into a guarded subtree, so an implementation
/// backed by a real session check can change its answer between navigations.
pub trait AuthPredicate: Send + Sync {
    fn is_authenticated(&self) -> bool;
}

/// Predicate with a fixed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantAuth(pub bool);

impl AuthPredicate for ConstantAuth {
    fn is_authenticated(&self) -> bool {
        self.0
    }
}

impl<F> AuthPredicate for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn is_authenticated(&self) -> bool {
        self()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the nested guarded routes.
    Render,
    /// Send the visitor elsewhere.
    Redirect(Location),
}

/// Per-navigation guard state. Re-enters `Unevaluated` on every navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardState {
    #[default]
    Unevaluated,
    Rendered,
    Redirected,
}

#[derive(Clone)]
pub struct RouteGuard {
    predicate: Arc<dyn AuthPredicate>,
    fallback: Location,
}

impl RouteGuard {
    pub fn new(predicate: Arc<dyn AuthPredicate>, fallback: Location) -> Self {
        Self {
            predicate,
            fallback,
        }
    }

    pub fn evaluate(&self) -> GuardOutcome {
        if self.predicate.is_authenticated() {
            GuardOutcome::Render
        } else {
            GuardOutcome::Redirect(self.fallback.clone())
        }
    }
}

impl std::fmt::Debug for RouteGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteGuard")
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}
