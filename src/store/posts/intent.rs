//! Lifecycle events of the posts fetch.

use crate::api::Post;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PostsIntent {
    /// A fetch has started.
    Pending,

    /// The fetch succeeded with this collection.
    Fulfilled { posts: Vec<Post> },

    /// The fetch failed.
    Rejected { message: String },
}

impl Intent for PostsIntent {}
