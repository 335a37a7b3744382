use crate::models::{PlaceId, PlaceKind};
use serde::Serialize;

/// Visual style hint for a marker: two populations, one per kind.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MarkerStyle {
    pub color: &'static str,
    pub glyph: char,
}

impl MarkerStyle {
    pub fn for_kind(kind: PlaceKind) -> Self {
        match kind {
            PlaceKind::Hotel => Self {
                color: "#8B4513",
                glyph: 'H',
            },
            PlaceKind::Restaurant => Self {
                color: "#DC143C",
                glyph: 'R',
            },
        }
    }
}

/// One map marker, keyed by place id.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Marker {
    pub id: PlaceId,
    pub kind: PlaceKind,
    /// (longitude, latitude) in degrees.
    pub coordinates: (f64, f64),
    pub style: MarkerStyle,
}

/// Initial camera for the render surface.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Viewport {
    pub center: (f64, f64),
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        // National-scale view over Spain.
        Self {
            center: (-3.7038, 40.4168),
            zoom: 6.0,
        }
    }
}
