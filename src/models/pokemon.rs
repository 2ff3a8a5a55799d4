//! Pokemon Model
//!
//! The subset of the PokeAPI pokemon resource used by catch and inspect.

use serde::Deserialize;

use crate::models::NamedResource;

// == Pokemon ==
/// A Pokemon as returned by `/pokemon/{name}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Missing for a handful of species; treated as zero
    #[serde(default)]
    pub base_experience: u32,
    pub height: u32,
    pub weight: u32,
    pub stats: Vec<PokemonStat>,
    pub types: Vec<PokemonType>,
}

/// One base-stat entry.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// One type slot.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonType {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}
