//! Location Models
//!
//! Models for the paginated location-area listing and single-area lookups.

use serde::Deserialize;

// == Named Resource ==
/// A name plus the URL where the full resource lives.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

// == Location Area Page ==
/// One page of the location-area listing.
///
/// `next` and `previous` are the pagination cursors: absent on the last and
/// first page respectively.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

// == Location Area ==
/// A single location area with its Pokemon encounters.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationArea {
    pub pokemon_encounters: Vec<Encounter>,
}

/// One possible encounter within a location area.
#[derive(Debug, Clone, Deserialize)]
pub struct Encounter {
    pub pokemon: NamedResource,
}
