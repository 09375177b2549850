//! Error types for the Pokedex
//!
//! Provides unified error handling using thiserror.

use reqwest::StatusCode;
use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the fetch layer and the command loop.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Network or transport failure
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Request to {url} returned {status}")]
    Status { url: String, status: StatusCode },

    /// Response body was not the expected JSON
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Input did not name a known command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Command was given without its required argument
    #[error("Usage: {command} <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// Paging past the first or last location page
    #[error("{0}")]
    NoPage(&'static str),

    /// Pokemon is not in the user's inventory
    #[error("You have not caught {0}")]
    NotCaught(String),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;
