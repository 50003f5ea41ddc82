//! Dictionary resource fetching

use crate::dictionary::Dictionary;
use async_trait::async_trait;
use lexis_common::Result;

/// Fetches and decodes dictionary resources by URL
///
/// The engine only needs `fetch(url) -> dictionary-or-failure`; transport,
/// timeouts, and retries belong to the implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    /// Fetch the dictionary resource at `url`
    async fn fetch(&self, url: &str) -> Result<Dictionary>;
}

/// HTTP-backed fetcher over a pooled reqwest client
#[derive(Debug, Clone)]
pub struct HttpResourceFetcher {
    client: reqwest::Client,
}

impl HttpResourceFetcher {
    /// Create a fetcher with a default client
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a fetcher with a preconfigured client (timeouts, proxies, headers)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpResourceFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResourceFetcher for HttpResourceFetcher {
    async fn fetch(&self, url: &str) -> Result<Dictionary> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let dictionary = response.json::<Dictionary>().await?;
        Ok(dictionary)
    }
}
