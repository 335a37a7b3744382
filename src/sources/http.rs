use crate::errors::SourceFetchError;
use crate::sources::traits::SourceFetcher;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// HTTP-backed source fetcher resolving resource names against a base URL.
pub struct HttpSourceFetcher {
    client: Client,
    base_url: String,
}

impl HttpSourceFetcher {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("place-scout/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn url_for(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), resource)
    }
}

#[async_trait]
impl SourceFetcher for HttpSourceFetcher {
    async fn fetch(&self, resource: &str) -> Result<serde_json::Value, SourceFetchError> {
        let url = self.url_for(resource);
        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| SourceFetchError::Http {
                resource: resource.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceFetchError::Status {
                resource: resource.to_string(),
                status,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| SourceFetchError::Http {
                resource: resource.to_string(),
                source,
            })?;

        debug!("Downloaded {} bytes from {}", body.len(), url);

        serde_json::from_str(&body).map_err(|source| SourceFetchError::Decode {
            resource: resource.to_string(),
            source,
        })
    }

    fn source_name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_base_url_and_resource() {
        let fetcher = HttpSourceFetcher::new("https://example.test/assets/data/").unwrap();
        assert_eq!(
            fetcher.url_for("hoteles_espana.json"),
            "https://example.test/assets/data/hoteles_espana.json"
        );
    }
}
