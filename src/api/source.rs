use async_trait::async_trait;
use reqwest::{Client, Url};

use super::error::FetchError;
use super::Post;
use crate::config::PostsConfig;

/// Anything that can produce the posts collection.
///
/// The store's fetch operation only depends on this trait, so tests and the
/// UI can swap the HTTP source for a canned one.
#[async_trait]
pub trait PostSource: Send + Sync {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError>;
}

/// Unauthenticated, read-only `GET` against a JSON endpoint.
pub struct HttpPostSource {
    client: Client,
    url: Url,
}

impl HttpPostSource {
    pub fn new(config: &PostsConfig) -> Result<Self, FetchError> {
        let url = Url::parse(&config.url).map_err(|_| FetchError::InvalidUrl {
            url: config.url.clone(),
        })?;
        let mut builder = Client::builder();
        if let Some(timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|source| FetchError::Request {
                url: config.url.clone(),
                source,
            })?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl PostSource for HttpPostSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: self.url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|source| FetchError::Request {
            url: self.url.to_string(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unparseable_url() {
        let config = PostsConfig {
            url: "not a url".to_string(),
            ..PostsConfig::default()
        };
        let err = HttpPostSource::new(&config).err().unwrap();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }

    #[test]
    fn builds_with_optional_connect_timeout() {
        let config = PostsConfig {
            connect_timeout_seconds: Some(3),
            ..PostsConfig::default()
        };
        assert!(HttpPostSource::new(&config).is_ok());
        assert!(PostsConfig::default().connect_timeout().is_none());
    }

    #[test]
    fn keeps_configured_url() {
        let source = HttpPostSource::new(&PostsConfig::default()).unwrap();
        assert_eq!(
            source.url().as_str(),
            "https://jsonplaceholder.typicode.com/posts"
        );
    }
}
