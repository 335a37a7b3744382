//! Static UI string tables for the three supported languages.
//!
//! Lookups never fail: an unknown key comes back verbatim and an unknown
//! language code degrades to an unresolved lookup.

use crate::models::Language;

type Table = &'static [(&'static str, &'static str)];

const ES: Table = &[
    ("title", "Buscador de Establecimientos de Lujo"),
    ("hotels", "Hoteles"),
    ("restaurants", "Restaurantes"),
    ("all", "Todos"),
    ("search", "Buscar..."),
    ("address", "Dirección"),
    ("postalCode", "Código Postal"),
    ("municipality", "Municipio"),
    ("province", "Provincia"),
    ("phone", "Teléfono"),
    ("email", "Email"),
    ("website", "Sitio Web"),
    ("rating", "Valoración"),
    ("close", "Cerrar"),
];

const EU: Table = &[
    ("title", "Luxuzko Establezimenduak Bilatzailea"),
    ("hotels", "Hotelak"),
    ("restaurants", "Jatetxeak"),
    ("all", "Guztiak"),
    ("search", "Bilatu..."),
    ("address", "Helbidea"),
    ("postalCode", "Posta Kodea"),
    ("municipality", "Udalerria"),
    ("province", "Probintzia"),
    ("phone", "Telefonoa"),
    ("email", "Emaila"),
    ("website", "Webgunea"),
    ("rating", "Balorazioa"),
    ("close", "Itxi"),
];

const EN: Table = &[
    ("title", "Luxury Establishments Finder"),
    ("hotels", "Hotels"),
    ("restaurants", "Restaurants"),
    ("all", "All"),
    ("search", "Search..."),
    ("address", "Address"),
    ("postalCode", "Postal Code"),
    ("municipality", "Municipality"),
    ("province", "Province"),
    ("phone", "Phone"),
    ("email", "Email"),
    ("website", "Website"),
    ("rating", "Rating"),
    ("close", "Close"),
];

fn table(lang: Language) -> Table {
    match lang {
        Language::Es => ES,
        Language::Eu => EU,
        Language::En => EN,
    }
}

/// Look up a UI string. An unknown key is returned verbatim.
pub fn resolve(lang: Language, key: &str) -> &str {
    match table(lang).iter().find(|(k, _)| *k == key) {
        Some((_, v)) => v,
        None => key,
    }
}

/// Look up a UI string by raw language code. Unknown codes resolve nothing,
/// so the key itself comes back.
pub fn resolve_code<'a>(code: &str, key: &'a str) -> &'a str {
    match Language::from_code(code) {
        Some(lang) => {
            // Table strings are 'static, which outlives 'a.
            match table(lang).iter().find(|(k, _)| *k == key) {
                Some((_, v)) => v,
                None => key,
            }
        }
        None => key,
    }
}
