//! Client-side routing: route tables, the auth guard, history and the
//! pieces of the shell that wrap routed pages.

mod guard;
mod location;
mod modules;
mod scroll;
mod table;

pub use guard::{AuthPredicate, ConstantAuth, GuardOutcome, GuardState, RouteGuard};
pub use location::Location;
pub use modules::{resolve_page, PageModules, Suspense};
pub use scroll::ScrollReset;
pub use table::RouteTable;

use std::sync::Arc;

use crate::pages::PageId;

/// Public routes of the shell.
pub const PUBLIC_ROUTES: [(&str, PageId); 2] = [("/", PageId::Home), ("/about", PageId::About)];

/// Routes that sit behind the auth guard.
pub const GUARDED_ROUTES: [(&str, PageId); 1] = [("/auth", PageId::Auth)];

pub const GUARDED_PATHS: [&str; 1] = ["/auth"];

/// Result of one navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Matched {
        location: Location,
        page: PageId,
    },
    /// The guard turned the visitor away; `location` is the fallback.
    Redirected {
        from: Location,
        location: Location,
        page: Option<PageId>,
    },
    /// No route matched; nothing is rendered.
    Unmatched { location: Location },
}

impl Resolution {
    pub fn location(&self) -> &Location {
        match self {
            Resolution::Matched { location, .. }
            | Resolution::Redirected { location, .. }
            | Resolution::Unmatched { location } => location,
        }
    }

    pub fn page(&self) -> Option<PageId> {
        match self {
            Resolution::Matched { page, .. } => Some(*page),
            Resolution::Redirected { page, .. } => *page,
            Resolution::Unmatched { .. } => None,
        }
    }
}

#[derive(Debug)]
pub struct Router {
    public: RouteTable,
    guarded: RouteTable,
    guard: RouteGuard,
    guard_state: GuardState,
    current: Location,
    history: Vec<Location>,
}

impl Router {
    pub fn new(public: RouteTable, guarded: RouteTable, guard: RouteGuard) -> Self {
        Self {
            public,
            guarded,
            guard,
            guard_state: GuardState::Unevaluated,
            current: Location::root(),
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Location {
        &self.current
    }

    pub fn guard_state(&self) -> GuardState {
        self.guard_state
    }

    /// Navigates to `path`, pushing the previous location onto the history.
    pub fn navigate(&mut self, path: &str) -> Resolution {
        let previous = self.current.clone();
        let resolution = self.resolve(Location::parse(path));
        if resolution.location() != &previous {
            self.history.push(previous);
        }
        self.current = resolution.location().clone();
        resolution
    }

    /// Returns to the previous location. The guard is evaluated again.
    pub fn back(&mut self) -> Option<Resolution> {
        let previous = self.history.pop()?;
        let resolution = self.resolve(previous);
        self.current = resolution.location().clone();
        Some(resolution)
    }

    fn resolve(&mut self, location: Location) -> Resolution {
        self.guard_state = GuardState::Unevaluated;

        if let Some(page) = self.public.match_location(&location) {
            return Resolution::Matched { location, page };
        }

        if let Some(page) = self.guarded.match_location(&location) {
            return match self.guard.evaluate() {
                GuardOutcome::Render => {
                    self.guard_state = GuardState::Rendered;
                    Resolution::Matched { location, page }
                }
                GuardOutcome::Redirect(fallback) => {
                    self.guard_state = GuardState::Redirected;
                    tracing::info!(from = %location, to = %fallback, "guard redirect");
                    // One hop only: the fallback is resolved against public routes.
                    let page = self.public.match_location(&fallback);
                    Resolution::Redirected {
                        from: location,
                        location: fallback,
                        page,
                    }
                }
            };
        }

        tracing::debug!(path = %location, "no route matched");
        Resolution::Unmatched { location }
    }
}

/// Builds the shell's router: public routes plus the guarded `/auth`.
pub fn shell_router(predicate: Arc<dyn AuthPredicate>, fallback: Location) -> Router {
    Router::new(
        RouteTable::new(PUBLIC_ROUTES),
        RouteTable::new(GUARDED_ROUTES),
        RouteGuard::new(predicate, fallback),
    )
}
