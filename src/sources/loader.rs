//! Ingestion: fetch both source documents concurrently, normalize, and move
//! the store through its load transition. All-or-nothing: if either fetch or
//! decode fails the store ends empty and the error goes back to the caller.
//! No retry; a reload by the hosting application is the only recovery path.

use crate::errors::SourceFetchError;
use crate::models::PlaceKind;
use crate::sources::normalize::normalize_sources;
use crate::sources::traits::SourceFetcher;
use crate::sources::types::{HotelDocument, RestaurantDocument};
use crate::store::PlaceStore;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

/// Resource name of the hotels document.
pub const HOTELS_RESOURCE: &str = "hoteles_espana.json";
/// Resource name of the starred-restaurants document.
pub const RESTAURANTS_RESOURCE: &str = "michelin_espana.json";

/// Summary of a successful ingestion.
#[derive(Debug, Clone, Serialize)]
pub struct IngestReport {
    pub hotels: usize,
    pub restaurants: usize,
    /// Malformed records dropped by the normalizer.
    pub dropped: usize,
    pub loaded_at: DateTime<Utc>,
}

fn decode<T: DeserializeOwned>(
    resource: &str,
    value: serde_json::Value,
) -> Result<T, SourceFetchError> {
    serde_json::from_value(value).map_err(|source| SourceFetchError::Decode {
        resource: resource.to_string(),
        source,
    })
}

/// Run one full ingestion against `store` using `fetcher`.
pub async fn ingest<F>(fetcher: &F, store: &PlaceStore) -> Result<IngestReport, SourceFetchError>
where
    F: SourceFetcher + ?Sized,
{
    store.begin_load();
    info!(
        "Loading source documents via {} fetcher",
        fetcher.source_name()
    );

    let fetched = tokio::try_join!(
        fetcher.fetch(HOTELS_RESOURCE),
        fetcher.fetch(RESTAURANTS_RESOURCE),
    );
    let (hotels_raw, restaurants_raw) = match fetched {
        Ok(documents) => documents,
        Err(err) => {
            store.fail_load();
            return Err(err);
        }
    };

    let decoded: Result<(HotelDocument, RestaurantDocument), SourceFetchError> = (|| {
        let hotels = decode(HOTELS_RESOURCE, hotels_raw)?;
        let restaurants = decode(RESTAURANTS_RESOURCE, restaurants_raw)?;
        Ok((hotels, restaurants))
    })();
    let (hotels, restaurants) = match decoded {
        Ok(documents) => documents,
        Err(err) => {
            store.fail_load();
            return Err(err);
        }
    };

    let normalized = normalize_sources(&hotels.hoteles, &restaurants.restaurantes);
    let hotel_count = normalized
        .places
        .iter()
        .filter(|p| p.kind == PlaceKind::Hotel)
        .count();
    let restaurant_count = normalized.places.len() - hotel_count;

    info!(
        "Ingested {} hotels and {} restaurants ({} dropped)",
        hotel_count, restaurant_count, normalized.dropped
    );

    store.complete_load(normalized.places);

    Ok(IngestReport {
        hotels: hotel_count,
        restaurants: restaurant_count,
        dropped: normalized.dropped,
        loaded_at: Utc::now(),
    })
}
