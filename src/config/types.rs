use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub posts: PostsConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub home: HomeConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Remote posts endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostsConfig {
    /// JSON endpoint returning an array of posts.
    #[serde(default = "default_posts_url")]
    pub url: String,
    /// Optional connection timeout in seconds. Unset means the fetch waits
    /// as long as the connection takes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout_seconds: Option<u64>,
}

/// Route guard settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Constant answer of the authentication predicate.
    #[serde(default)]
    pub authenticated: bool,
    /// Where unauthenticated visitors of guarded routes are sent.
    #[serde(default = "default_fallback")]
    pub fallback: String,
}

/// Home page splash behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeConfig {
    /// Image locators preloaded when Home mounts (paths or http(s) URLs).
    #[serde(default)]
    pub images: Vec<String>,
    /// Base directory for relative image paths.
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
    /// The overlay hides after this long even if images are still loading.
    #[serde(default = "default_splash_timeout_ms")]
    pub splash_timeout_ms: u64,
}

/// Terminal UI timings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Simulated time to resolve a page module the first time it is shown.
    #[serde(default = "default_page_load_delay_ms")]
    pub page_load_delay_ms: u64,
}

fn default_posts_url() -> String {
    "https://jsonplaceholder.typicode.com/posts".to_string()
}

fn default_fallback() -> String {
    "/".to_string()
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets")
}

fn default_splash_timeout_ms() -> u64 {
    1500
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_page_load_delay_ms() -> u64 {
    150
}

impl Default for PostsConfig {
    fn default() -> Self {
        Self {
            url: default_posts_url(),
            connect_timeout_seconds: None,
        }
    }
}

impl PostsConfig {
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_seconds.map(Duration::from_secs)
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            authenticated: false,
            fallback: default_fallback(),
        }
    }
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            assets_dir: default_assets_dir(),
            splash_timeout_ms: default_splash_timeout_ms(),
        }
    }
}

impl HomeConfig {
    pub fn splash_timeout(&self) -> Duration {
        Duration::from_millis(self.splash_timeout_ms)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            page_load_delay_ms: default_page_load_delay_ms(),
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    pub fn page_load_delay(&self) -> Duration {
        Duration::from_millis(self.page_load_delay_ms)
    }
}
