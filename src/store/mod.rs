//! Injectable application store.
//!
//! The store owns one state value per slice and applies every action through
//! that slice's reducer under a single write lock, so a reader never sees half
//! of a transition. There is no global instance: the runtime builds one and
//! hands clones to whoever needs it, and tests build their own.

pub mod loading;
pub mod posts;

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;

use crate::mvi::Reducer;
use loading::{LoadingIntent, LoadingReducer, LoadingState};
use posts::{PostsIntent, PostsReducer, PostsState};

pub use posts::fetch_posts;

/// Snapshot of every slice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub posts: PostsState,
    pub loading: LoadingState,
}

/// An intent addressed to one slice.
#[derive(Debug, Clone)]
pub enum Action {
    Posts(PostsIntent),
    Loading(LoadingIntent),
}

impl From<PostsIntent> for Action {
    fn from(intent: PostsIntent) -> Self {
        Action::Posts(intent)
    }
}

impl From<LoadingIntent> for Action {
    fn from(intent: LoadingIntent) -> Self {
        Action::Loading(intent)
    }
}

/// Generic MVI dispatch: takes the slice out, runs the reducer, puts the result back.
macro_rules! dispatch_mvi {
    ($state:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $state.$field = <$reducer>::reduce(std::mem::take(&mut $state.$field), $intent);
    };
}

#[derive(Clone)]
pub struct Store {
    inner: Arc<RwLock<AppState>>,
    revision: Arc<watch::Sender<u64>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            inner: Arc::new(RwLock::new(initial)),
            revision: Arc::new(revision),
        }
    }

    pub fn dispatch(&self, action: impl Into<Action>) {
        let action = action.into();
        tracing::trace!(?action, "dispatch");
        {
            let mut state = self.inner.write();
            match action {
                Action::Posts(intent) => {
                    dispatch_mvi!(state, posts, PostsReducer, intent);
                }
                Action::Loading(intent) => {
                    dispatch_mvi!(state, loading, LoadingReducer, intent);
                }
            }
        }
        self.revision.send_modify(|rev| *rev = rev.wrapping_add(1));
    }

    pub fn snapshot(&self) -> AppState {
        self.inner.read().clone()
    }

    pub fn posts(&self) -> PostsState {
        self.inner.read().posts.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.read().loading.active
    }

    /// Receiver that wakes after every dispatch. The value counts the actions
    /// applied so far.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }
}
