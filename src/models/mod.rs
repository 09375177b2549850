//! PokeAPI response models
//!
//! This module defines the DTOs deserialized from PokeAPI JSON bodies.
//! Fields the Pokedex does not use are ignored.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{Encounter, LocationArea, LocationAreaPage, NamedResource};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
