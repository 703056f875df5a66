use std::path::{Path, PathBuf};

use async_trait::async_trait;
use reqwest::Client;

use super::error::PreloadError;
use super::{ImageInfo, ImageLoader};

/// Loads images from disk or over HTTP and decodes them.
///
/// Locators starting with `http://` or `https://` are fetched; anything else
/// is a path, relative paths resolving against `base_dir`.
pub struct AssetLoader {
    client: Client,
    base_dir: PathBuf,
}

impl AssetLoader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            client: Client::new(),
            base_dir: base_dir.into(),
        }
    }

    fn resolve_path(&self, locator: &str) -> PathBuf {
        let path = Path::new(locator);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, PreloadError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| PreloadError::Fetch {
                url: url.to_string(),
                source,
            })?;
        if !response.status().is_success() {
            return Err(PreloadError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        let bytes = response.bytes().await.map_err(|source| PreloadError::Fetch {
            url: url.to_string(),
            source,
        })?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl ImageLoader for AssetLoader {
    async fn load(&self, locator: &str) -> Result<ImageInfo, PreloadError> {
        let bytes = if is_remote(locator) {
            self.fetch(locator).await?
        } else {
            let path = self.resolve_path(locator);
            match tokio::fs::read(&path).await {
                Ok(bytes) => bytes,
                Err(source) => return Err(PreloadError::Read { path, source }),
            }
        };

        let image = image::load_from_memory(&bytes).map_err(|source| PreloadError::Decode {
            locator: locator.to_string(),
            source,
        })?;
        Ok(ImageInfo {
            width: image.width(),
            height: image.height(),
        })
    }
}

fn is_remote(locator: &str) -> bool {
    locator.starts_with("http://") || locator.starts_with("https://")
}
