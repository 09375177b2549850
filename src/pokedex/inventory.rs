//! Inventory Module
//!
//! In-memory record of the Pokemon the user has caught this session.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use crate::models::Pokemon;

/// A caught Pokemon and when it was caught.
#[derive(Debug, Clone)]
pub struct CaughtPokemon {
    pub pokemon: Pokemon,
    pub caught_at: DateTime<Utc>,
}

/// Caught Pokemon keyed by name.
#[derive(Debug, Default)]
pub struct Inventory {
    caught: HashMap<String, CaughtPokemon>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a catch. Catching the same name again replaces the record.
    pub fn add(&mut self, pokemon: Pokemon) -> &CaughtPokemon {
        let name = pokemon.name.clone();
        let record = CaughtPokemon {
            pokemon,
            caught_at: Utc::now(),
        };
        self.caught.insert(name.clone(), record);
        &self.caught[&name]
    }

    /// Returns the record for `name`, if caught.
    pub fn get(&self, name: &str) -> Option<&CaughtPokemon> {
        self.caught.get(name)
    }

    /// Returns true if `name` has been caught.
    pub fn contains(&self, name: &str) -> bool {
        self.caught.contains_key(name)
    }

    /// Names of every caught Pokemon, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.caught.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of distinct Pokemon caught.
    pub fn len(&self) -> usize {
        self.caught.len()
    }

    /// Returns true if nothing has been caught yet.
    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}
