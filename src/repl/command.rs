//! Command parsing
//!
//! Maps tokenized input onto the commands the Pokedex understands.

use crate::error::{PokedexError, Result};

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore(String),
    Catch(String),
    Inspect(String),
    Pokedex,
}

/// Name and description of every command, in help order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("help", "Displays a help message"),
    ("map", "Display the next 20 location areas of the Pokemon world"),
    ("mapb", "Display the previous 20 location areas"),
    ("explore <area>", "List the Pokemon found in a location area"),
    ("catch <pokemon>", "Throw a Pokeball at a Pokemon"),
    ("inspect <pokemon>", "Show details of a Pokemon you have caught"),
    ("pokedex", "List every Pokemon you have caught"),
    ("exit", "Exit the Pokedex"),
];

impl Command {
    /// Parses cleaned input words. Returns `Ok(None)` for empty input.
    ///
    /// Extra words after a command's argument are ignored.
    pub fn parse(words: &[String]) -> Result<Option<Self>> {
        let Some(name) = words.first() else {
            return Ok(None);
        };
        let arg = words.get(1).cloned();

        let command = match name.as_str() {
            "help" => Command::Help,
            "exit" => Command::Exit,
            "map" => Command::Map,
            "mapb" => Command::MapBack,
            "explore" => Command::Explore(required(arg, "explore", "area")?),
            "catch" => Command::Catch(required(arg, "catch", "pokemon")?),
            "inspect" => Command::Inspect(required(arg, "inspect", "pokemon")?),
            "pokedex" => Command::Pokedex,
            other => return Err(PokedexError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn required(arg: Option<String>, command: &'static str, argument: &'static str) -> Result<String> {
    arg.ok_or(PokedexError::MissingArgument { command, argument })
}
