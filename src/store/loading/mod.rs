mod intent;
mod reducer;
mod state;

pub use intent::LoadingIntent;
pub use reducer::LoadingReducer;
pub use state::LoadingState;
