mod fetch;
mod intent;
mod reducer;
mod state;

pub use fetch::fetch_posts;
pub use intent::PostsIntent;
pub use reducer::PostsReducer;
pub use state::PostsState;
