use serde::{Deserialize, Serialize};

/// Raw hotel record as carried by the hotels source document.
///
/// Only the name and the coordinates are required; every other field may be
/// absent and normalizes to an empty value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelRecord {
    pub nombre: Option<String>,
    #[serde(default)]
    pub estrellas: u32,
    #[serde(default)]
    pub ciudad: String,
    #[serde(default)]
    pub provincia: String,
    #[serde(default)]
    pub comunidad_autonoma: String,
    pub latitud: Option<f64>,
    pub longitud: Option<f64>,
    #[serde(default)]
    pub web: String,
    #[serde(default)]
    pub direccion: String,
    #[serde(default)]
    pub cp: String,
    #[serde(default)]
    pub telefono: String,
}

/// Raw starred-restaurant record as carried by the restaurants source
/// document. Field-for-field the same concepts as [`HotelRecord`], kept as
/// its own type because the two documents evolve independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantRecord {
    pub nombre: Option<String>,
    #[serde(default)]
    pub estrellas: u32,
    #[serde(default)]
    pub ciudad: String,
    #[serde(default)]
    pub provincia: String,
    #[serde(default)]
    pub comunidad_autonoma: String,
    pub latitud: Option<f64>,
    pub longitud: Option<f64>,
    #[serde(default)]
    pub web: String,
    #[serde(default)]
    pub direccion: String,
    #[serde(default)]
    pub cp: String,
    #[serde(default)]
    pub telefono: String,
}

/// Envelope of the hotels source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelDocument {
    #[serde(default)]
    pub guia: String,
    #[serde(default)]
    pub registros: u32,
    pub hoteles: Vec<HotelRecord>,
}

/// Envelope of the restaurants source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantDocument {
    #[serde(default)]
    pub guia: String,
    #[serde(default)]
    pub total_restaurantes_con_estrella: u32,
    pub restaurantes: Vec<RestaurantRecord>,
}
