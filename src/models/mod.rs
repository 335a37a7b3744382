use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a normalized place. Unique across both kinds for the
/// lifetime of the loaded collection.
pub type PlaceId = u32;

/// Kind of establishment a place represents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlaceKind {
    Hotel,
    Restaurant,
}

impl fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hotel => write!(f, "hotel"),
            Self::Restaurant => write!(f, "restaurant"),
        }
    }
}

/// Supported display languages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Es,
    Eu,
    En,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Es, Language::Eu, Language::En];

    /// Parse a two-letter language code. Unknown codes resolve to `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "es" => Some(Self::Es),
            "eu" => Some(Self::Eu),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::Eu => "eu",
            Self::En => "en",
        }
    }
}

/// Display name of a place in every supported language.
///
/// The source datasets carry a single name per record, so all three entries
/// are typically the same string. The structure still guarantees an entry per
/// language, which the query engine relies on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocalizedName {
    pub es: String,
    pub eu: String,
    pub en: String,
}

impl LocalizedName {
    /// Build a name with the same value in every language.
    pub fn uniform(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            es: name.clone(),
            eu: name.clone(),
            en: name,
        }
    }

    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::Es => &self.es,
            Language::Eu => &self.eu,
            Language::En => &self.en,
        }
    }
}

/// Core unified place model, produced by the source normalizer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Place {
    pub id: PlaceId,
    pub kind: PlaceKind,
    pub name: LocalizedName,
    pub address: String,
    pub postal_code: String,
    pub municipality: String,
    pub province: String,
    pub phone: String,
    /// Always empty after normalization; the source data has no email field.
    pub email: String,
    pub website: String,
    /// Star count as given by the source.
    pub rating: u32,
    /// (longitude, latitude) in degrees, WGS84.
    pub coordinates: (f64, f64),
    /// Cosmetic image reference, cycled deterministically per kind.
    pub image: String,
}
