//! Remote data source for the posts collection.

mod error;
mod source;

pub use error::FetchError;
pub use source::{HttpPostSource, PostSource};

use serde::{Deserialize, Serialize};

/// A single post record as returned by the remote source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}
