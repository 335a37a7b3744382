//! Converts the two raw source shapes into the unified [`Place`] model.
//!
//! Hotels are numbered first starting at 1; restaurants continue from the
//! count of hotels actually kept, so ids never collide whatever the dataset
//! sizes. Records missing a required field fail with
//! [`MalformedSourceError`]; the collection-level pass drops them with a
//! warning and keeps going.

use crate::errors::MalformedSourceError;
use crate::models::{LocalizedName, Place, PlaceId, PlaceKind};
use crate::sources::types::{HotelRecord, RestaurantRecord};
use tracing::warn;

const HOTEL_IMAGE_IDS: [&str; 6] = [
    "1566073771259-6a8506099945",
    "1542314831-068cd1dbfeeb",
    "1571896349842-33c89424de2d",
    "1445019980597-93fa8acb246c",
    "1551882547-ff40c63fe5fa",
    "1584132967334-10e028bd1f0e",
];

const RESTAURANT_IMAGE_IDS: [&str; 6] = [
    "1517248135467-4c7edcad34c4",
    "1414235077428-338989a2e8c0",
    "1559339352-11d035aa65de",
    "1551218808-94e220e084d2",
    "1550966871-3ed3cdb5ed0c",
    "1559925393-8be0ec4767c8",
];

/// Cosmetic image reference, cycling through 6 fixed photos per kind by raw
/// input position.
fn image_for(kind: PlaceKind, index: usize) -> String {
    let ids = match kind {
        PlaceKind::Hotel => &HOTEL_IMAGE_IDS,
        PlaceKind::Restaurant => &RESTAURANT_IMAGE_IDS,
    };
    format!(
        "https://images.unsplash.com/photo-{}?w=400&h=250&fit=crop",
        ids[index % 6]
    )
}

fn require<T>(
    value: Option<T>,
    kind: PlaceKind,
    index: usize,
    field: &'static str,
) -> Result<T, MalformedSourceError> {
    value.ok_or(MalformedSourceError::MissingField { kind, index, field })
}

/// Normalize one hotel record. `index` is the record's position in the raw
/// input, `id` the identifier to assign.
pub fn normalize_hotel(
    record: &HotelRecord,
    index: usize,
    id: PlaceId,
) -> Result<Place, MalformedSourceError> {
    let kind = PlaceKind::Hotel;
    let nombre = require(record.nombre.as_deref(), kind, index, "nombre")?;
    let longitud = require(record.longitud, kind, index, "longitud")?;
    let latitud = require(record.latitud, kind, index, "latitud")?;

    Ok(Place {
        id,
        kind,
        name: LocalizedName::uniform(nombre),
        address: record.direccion.clone(),
        postal_code: record.cp.clone(),
        municipality: record.ciudad.clone(),
        province: record.provincia.clone(),
        phone: record.telefono.clone(),
        email: String::new(),
        website: record.web.clone(),
        rating: record.estrellas,
        coordinates: (longitud, latitud),
        image: image_for(kind, index),
    })
}

/// Normalize one restaurant record.
pub fn normalize_restaurant(
    record: &RestaurantRecord,
    index: usize,
    id: PlaceId,
) -> Result<Place, MalformedSourceError> {
    let kind = PlaceKind::Restaurant;
    let nombre = require(record.nombre.as_deref(), kind, index, "nombre")?;
    let longitud = require(record.longitud, kind, index, "longitud")?;
    let latitud = require(record.latitud, kind, index, "latitud")?;

    Ok(Place {
        id,
        kind,
        name: LocalizedName::uniform(nombre),
        address: record.direccion.clone(),
        postal_code: record.cp.clone(),
        municipality: record.ciudad.clone(),
        province: record.provincia.clone(),
        phone: record.telefono.clone(),
        email: String::new(),
        website: record.web.clone(),
        rating: record.estrellas,
        coordinates: (longitud, latitud),
        image: image_for(kind, index),
    })
}

/// Result of the collection-level pass.
#[derive(Debug, Clone)]
pub struct NormalizedSources {
    /// Hotels first in source order, then restaurants in source order.
    pub places: Vec<Place>,
    /// Records dropped for missing required fields.
    pub dropped: usize,
}

/// Normalize both raw collections with the drop-and-log policy.
pub fn normalize_sources(
    hotels: &[HotelRecord],
    restaurants: &[RestaurantRecord],
) -> NormalizedSources {
    let mut places = Vec::with_capacity(hotels.len() + restaurants.len());
    let mut dropped = 0;
    let mut next_id: PlaceId = 1;

    for (index, record) in hotels.iter().enumerate() {
        match normalize_hotel(record, index, next_id) {
            Ok(place) => {
                places.push(place);
                next_id += 1;
            }
            Err(err) => {
                warn!("Dropping malformed source record: {}", err);
                dropped += 1;
            }
        }
    }

    for (index, record) in restaurants.iter().enumerate() {
        match normalize_restaurant(record, index, next_id) {
            Ok(place) => {
                places.push(place);
                next_id += 1;
            }
            Err(err) => {
                warn!("Dropping malformed source record: {}", err);
                dropped += 1;
            }
        }
    }

    NormalizedSources { places, dropped }
}
