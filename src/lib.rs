//! place-scout — reactive core for a searchable map of lodging and dining
//! establishments.
//!
//! Two disjoint source datasets (hotels, starred restaurants) are fetched
//! concurrently, normalized into one uniform [`models::Place`] collection,
//! and held in an observable [`store::PlaceStore`]. The
//! [`query::QueryEngine`] derives the filtered subset from the collection
//! plus the live search term, type filter, and display language; the
//! [`map::MapSynchronizer`] keeps an external marker surface consistent with
//! that subset and relays marker clicks back as selections.
//!
//! The crate is a library: the basemap toolkit, layout, and HTTP transport
//! are collaborators behind the [`map::MarkerSurface`] and
//! [`sources::SourceFetcher`] traits.

pub mod errors;
pub mod i18n;
pub mod map;
pub mod models;
pub mod query;
pub mod reactive;
pub mod sources;
pub mod store;

pub use errors::{MalformedSourceError, SourceFetchError};
pub use map::{MapSynchronizer, Marker, MarkerStyle, MarkerSurface, Viewport};
pub use models::{Language, LocalizedName, Place, PlaceId, PlaceKind};
pub use query::{filter_places, FilteredView, QueryEngine, TypeFilter};
pub use reactive::{Scheduler, Signal, SubscriptionId};
pub use sources::{ingest, HttpSourceFetcher, IngestReport, SourceFetcher};
pub use store::PlaceStore;
