//! Location DTOs
//!
//! Paged location-area listings and single location-area details.

use serde::Deserialize;

/// A name plus the URL of the full resource
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of `GET /location-area`
///
/// # Fields
/// - `next`: URL of the following page, absent on the last page
/// - `previous`: URL of the preceding page, absent on the first page
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Body of `GET /location-area/{name}`
#[derive(Debug, Clone, Deserialize)]
pub struct LocationArea {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<Encounter>,
}

/// A Pokemon that can be found in a location area
#[derive(Debug, Clone, Deserialize)]
pub struct Encounter {
    pub pokemon: NamedResource,
}
