//! The transport seam underneath [`crate::api::ApiClient`].

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// Issues single GET requests and parses the body as JSON.
///
/// One call means one request: implementations do not retry, cache,
/// or enforce a timeout. Tests substitute an instrumented stub.
#[async_trait]
pub trait FetchJson: Send + Sync {
    async fn fetch_json(&self, url: &str) -> Result<Value>;
}

/// Default transport over a shared `reqwest` client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FetchJson for HttpFetcher {
    async fn fetch_json(&self, url: &str) -> Result<Value> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}
