//! Pokedex - An interactive Pokedex backed by PokeAPI
//!
//! Every API response is kept in a time-expiring, thread-safe cache so
//! repeated lookups skip the network.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod pokedex;
pub mod repl;
mod tasks;

pub use api::PokeApiClient;
pub use cache::{CacheState, TimedCache};
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Session;
