use crate::api::PostSource;
use crate::store::{Action, Store};

use super::intent::PostsIntent;

/// Runs one fetch attempt and drives the posts slice through its lifecycle.
///
/// There is no retry, timeout or cancellation. If the caller stops caring
/// (e.g. the user left the page) the result still lands in the store.
pub async fn fetch_posts(store: &Store, source: &dyn PostSource) {
    store.dispatch(Action::Posts(PostsIntent::Pending));
    tracing::debug!("posts fetch pending");

    match source.fetch_posts().await {
        Ok(posts) => {
            tracing::info!(count = posts.len(), "posts fetch fulfilled");
            store.dispatch(Action::Posts(PostsIntent::Fulfilled { posts }));
        }
        Err(err) => {
            let message = err.to_string();
            tracing::warn!(error = %message, "posts fetch rejected");
            store.dispatch(Action::Posts(PostsIntent::Rejected { message }));
        }
    }
}
