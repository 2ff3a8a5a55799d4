//! Data Models Module
//!
//! Serde models for the slices of the PokeAPI responses the CLI consumes.
//! Unknown fields are ignored; the API returns far more than we decode.

mod location;
mod pokemon;

pub use location::{Encounter, LocationArea, LocationAreaPage, NamedResource};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
