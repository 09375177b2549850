//! Pokedex Module
//!
//! Catch odds and the user's caught-Pokemon inventory.

mod catch;
mod inventory;

pub use catch::{catch_chance, try_catch, BASE_CATCH_RATE, MAX_BASE_EXPERIENCE, MIN_CATCH_RATE};
pub use inventory::{CaughtPokemon, Inventory};
