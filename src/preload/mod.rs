//! Image preloading for the Home splash.
//!
//! [`preload_images`] waits until every locator has either loaded or failed.
//! A failure is a settled outcome, never an error of the whole batch, so one
//! broken image cannot hold the splash hostage. There is no timeout: a load
//! that never settles keeps the batch pending; callers that need a bound race
//! it against a timer.

mod error;
mod loader;

pub use error::PreloadError;
pub use loader::AssetLoader;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinSet;

/// Dimensions of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
}

#[async_trait]
pub trait ImageLoader: Send + Sync {
    async fn load(&self, locator: &str) -> Result<ImageInfo, PreloadError>;
}

/// How a batch settled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreloadReport {
    pub loaded: usize,
    pub failed: usize,
}

impl PreloadReport {
    pub fn settled(&self) -> usize {
        self.loaded + self.failed
    }
}

pub async fn preload_images(loader: Arc<dyn ImageLoader>, locators: &[String]) -> PreloadReport {
    let mut report = PreloadReport::default();
    if locators.is_empty() {
        return report;
    }

    let mut tasks = JoinSet::new();
    for locator in locators {
        let loader = Arc::clone(&loader);
        let locator = locator.clone();
        tasks.spawn(async move {
            let result = loader.load(&locator).await;
            (locator, result)
        });
    }

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((locator, Ok(info))) => {
                tracing::debug!(%locator, width = info.width, height = info.height, "image loaded");
                report.loaded += 1;
            }
            Ok((locator, Err(err))) => {
                tracing::debug!(%locator, error = %err, "image failed to load");
                report.failed += 1;
            }
            Err(err) => {
                tracing::debug!(error = %err, "image load task aborted");
                report.failed += 1;
            }
        }
    }

    tracing::info!(loaded = report.loaded, failed = report.failed, "images preloaded");
    report
}
