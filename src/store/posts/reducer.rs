//! Reducer for the posts slice.

use crate::mvi::Reducer;

use super::intent::PostsIntent;
use super::state::PostsState;

pub struct PostsReducer;

impl Reducer for PostsReducer {
    type State = PostsState;
    type Intent = PostsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PostsIntent::Pending => PostsState {
                loading: true,
                error: None,
                ..state
            },

            PostsIntent::Fulfilled { posts } => PostsState {
                data: posts,
                loading: false,
                ..state
            },

            // Stale data stays visible to anything that reads it.
            PostsIntent::Rejected { message } => PostsState {
                loading: false,
                error: Some(message),
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Post;

    fn post(id: i64) -> Post {
        Post {
            id,
            title: format!("title {id}"),
            body: format!("body {id}"),
            user_id: None,
        }
    }

    #[test]
    fn pending_sets_loading_and_clears_error() {
        let state = PostsState {
            error: Some("old".into()),
            ..PostsState::default()
        };
        let state = PostsReducer::reduce(state, PostsIntent::Pending);
        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn pending_keeps_previous_data() {
        let state = PostsState {
            data: vec![post(1)],
            ..PostsState::default()
        };
        let state = PostsReducer::reduce(state, PostsIntent::Pending);
        assert_eq!(state.data, vec![post(1)]);
    }

    #[test]
    fn fulfilled_replaces_collection() {
        let state = PostsState {
            data: vec![post(1), post(2)],
            loading: true,
            error: None,
        };
        let state = PostsReducer::reduce(
            state,
            PostsIntent::Fulfilled {
                posts: vec![post(9)],
            },
        );
        assert_eq!(state.data, vec![post(9)]);
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn rejected_records_message_and_keeps_data() {
        let state = PostsState {
            data: vec![post(1)],
            loading: true,
            error: None,
        };
        let state = PostsReducer::reduce(
            state,
            PostsIntent::Rejected {
                message: "Network Error".into(),
            },
        );
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Network Error"));
        assert_eq!(state.data, vec![post(1)]);
    }
}
