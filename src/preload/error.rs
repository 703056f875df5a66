use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreloadError {
    #[error("Failed to read image '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch image '{url}': {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Image '{url}' returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to decode image '{locator}': {source}")]
    Decode {
        locator: String,
        #[source]
        source: image::ImageError,
    },
}
