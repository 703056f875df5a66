//! Configuration types and loading.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AuthConfig, Config, HomeConfig, PostsConfig, UiConfig};
