//! State of the posts slice.

use crate::api::Post;
use crate::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostsState {
    /// Last successfully fetched collection, empty until the first success.
    pub data: Vec<Post>,
    pub loading: bool,
    /// Message of the most recent failed attempt, cleared when a new one starts.
    pub error: Option<String>,
}

impl UiState for PostsState {}

impl PostsState {
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
