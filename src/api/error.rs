use thiserror::Error;

/// Failure of a single posts fetch.
///
/// The `Display` text is what the About page shows after `Error: `.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid posts URL '{url}'")]
    InvalidUrl { url: String },

    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request failed with status code {status}")]
    Status { status: u16 },

    #[error("Failed to decode posts: {0}")]
    Decode(String),
}
