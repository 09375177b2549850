//! REPL session state and command execution.

use std::fmt::Write;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::api::PokeApiClient;
use crate::error::{PokedexError, Result};
use crate::models::LocationAreaPage;
use crate::pokedex::{try_catch, Inventory};
use crate::repl::command::{Command, COMMANDS};

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and read the next command
    Continue(String),
    /// Print the text and leave the loop
    Exit(String),
}

/// State carried between commands: API access, paging cursor, and catches.
#[derive(Debug)]
pub struct Session {
    client: PokeApiClient,
    inventory: Inventory,
    next_page: Option<String>,
    previous_page: Option<String>,
    rng: StdRng,
}

impl Session {
    /// Creates a session positioned before the first location page.
    pub fn new(client: PokeApiClient) -> Self {
        Self::with_rng(client, StdRng::from_entropy())
    }

    /// Creates a session with a caller-supplied RNG for catch rolls.
    pub fn with_rng(client: PokeApiClient, rng: StdRng) -> Self {
        let next_page = Some(client.first_location_page_url());
        Self {
            client,
            inventory: Inventory::new(),
            next_page,
            previous_page: None,
            rng,
        }
    }

    /// Pokemon caught so far this session.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// The cache-backed API client.
    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    /// Runs one command and returns the text to show the user.
    pub async fn execute(&mut self, command: Command) -> Result<Outcome> {
        debug!(?command, "executing command");

        let text = match command {
            Command::Help => help_text(),
            Command::Exit => return Ok(Outcome::Exit("Closing the Pokedex... Goodbye!".into())),
            Command::Map => {
                let url = self
                    .next_page
                    .clone()
                    .ok_or(PokedexError::NoPage("You're on the last page"))?;
                self.turn_page(&url).await?
            }
            Command::MapBack => {
                let url = self
                    .previous_page
                    .clone()
                    .ok_or(PokedexError::NoPage("You're on the first page"))?;
                self.turn_page(&url).await?
            }
            Command::Explore(area) => self.explore(&area).await?,
            Command::Catch(name) => self.catch(&name).await?,
            Command::Inspect(name) => self.inspect(&name)?,
            Command::Pokedex => self.list_caught(),
        };

        Ok(Outcome::Continue(text))
    }

    async fn turn_page(&mut self, url: &str) -> Result<String> {
        let LocationAreaPage {
            next,
            previous,
            results,
            ..
        } = self.client.location_areas(Some(url)).await?;

        self.next_page = next;
        self.previous_page = previous;

        Ok(results
            .iter()
            .map(|area| area.name.as_str())
            .collect::<Vec<_>>()
            .join("\n"))
    }

    async fn explore(&self, area: &str) -> Result<String> {
        let location = self.client.location_area(area).await?;

        let mut text = format!("Exploring {}...\nFound Pokemon:", area);
        for encounter in &location.pokemon_encounters {
            let _ = write!(text, "\n - {}", encounter.pokemon.name);
        }
        Ok(text)
    }

    async fn catch(&mut self, name: &str) -> Result<String> {
        let pokemon = self.client.pokemon(name).await?;
        let mut text = format!("Throwing a Pokeball at {}...\n", pokemon.name);

        if try_catch(&pokemon, &mut self.rng) {
            let _ = write!(
                text,
                "{} was caught!\nYou may now inspect it with the inspect command.",
                pokemon.name
            );
            self.inventory.add(pokemon);
        } else {
            let _ = write!(text, "{} escaped!", pokemon.name);
        }
        Ok(text)
    }

    fn inspect(&self, name: &str) -> Result<String> {
        let record = self
            .inventory
            .get(name)
            .ok_or_else(|| PokedexError::NotCaught(name.to_string()))?;
        let pokemon = &record.pokemon;

        let mut text = format!(
            "Name: {}\nHeight: {}\nWeight: {}\nCaught: {}\nStats:",
            pokemon.name,
            pokemon.height,
            pokemon.weight,
            record.caught_at.format("%Y-%m-%d %H:%M:%S UTC"),
        );
        for stat in &pokemon.stats {
            let _ = write!(text, "\n  -{}: {}", stat.stat.name, stat.base_stat);
        }
        text.push_str("\nTypes:");
        for kind in &pokemon.types {
            let _ = write!(text, "\n  - {}", kind.kind.name);
        }
        Ok(text)
    }

    fn list_caught(&self) -> String {
        if self.inventory.is_empty() {
            return "Your Pokedex is empty.".to_string();
        }

        let mut text = String::from("Your Pokedex:");
        for name in self.inventory.names() {
            let _ = write!(text, "\n - {}", name);
        }
        text
    }
}

fn help_text() -> String {
    let mut text = String::from("Welcome to the Pokedex!\nUsage:\n");
    for (name, description) in COMMANDS {
        let _ = write!(text, "\n{}: {}", name, description);
    }
    text
}
