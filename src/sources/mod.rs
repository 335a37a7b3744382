pub mod http;
pub mod loader;
pub mod normalize;
pub mod traits;
pub mod types;

pub use http::HttpSourceFetcher;
pub use loader::{ingest, IngestReport, HOTELS_RESOURCE, RESTAURANTS_RESOURCE};
pub use normalize::{normalize_sources, NormalizedSources};
pub use traits::SourceFetcher;
