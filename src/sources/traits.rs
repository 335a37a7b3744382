use crate::errors::SourceFetchError;
use async_trait::async_trait;

/// Common trait for source-document fetchers.
/// The core depends only on "fetch a named resource, get a parsed document";
/// transport details (HTTP, disk, fixtures in tests) live behind this seam.
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    /// Fetch a named resource and return it as a parsed JSON document.
    async fn fetch(&self, resource: &str) -> Result<serde_json::Value, SourceFetchError>;

    /// Get the name of the fetcher backend.
    fn source_name(&self) -> &'static str;
}
