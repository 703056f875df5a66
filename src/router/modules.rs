//! On-demand page modules behind a suspense boundary.

use std::collections::HashSet;
use std::time::Duration;

use crate::pages::PageId;

/// What the body shows for the current route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Suspense {
    /// Nothing routed (unmatched path).
    #[default]
    Empty,
    /// The page module is still resolving; the fallback is shown.
    Pending(PageId),
    /// The page is mounted.
    Ready(PageId),
}

impl Suspense {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }
}

/// Tracks which pages have been resolved. Resolution happens once per page;
/// later visits render immediately.
#[derive(Debug, Clone, Default)]
pub struct PageModules {
    resolved: HashSet<PageId>,
}

impl PageModules {
    /// Nothing resolved yet; every page goes through the fallback once.
    pub fn new() -> Self {
        Self::default()
    }

    /// All pages resolved up front, for callers that do not want a fallback.
    pub fn eager() -> Self {
        Self {
            resolved: PageId::ALL.into_iter().collect(),
        }
    }

    pub fn is_resolved(&self, page: PageId) -> bool {
        self.resolved.contains(&page)
    }

    pub fn mark_resolved(&mut self, page: PageId) {
        self.resolved.insert(page);
    }
}

/// Suspension point of a page module load.
pub async fn resolve_page(page: PageId, delay: Duration) -> PageId {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    tracing::debug!(page = page.name(), "page module resolved");
    page
}
