//! API Module
//!
//! Cache-backed HTTP access to PokeAPI.
//!
//! # Resources
//! - `GET /location-area` - Paged location-area listing
//! - `GET /location-area/{name}` - Pokemon encounters in one area
//! - `GET /pokemon/{name}` - Pokemon details

pub mod client;

pub use client::PokeApiClient;
