//! REPL Session
//!
//! Holds the interactive state (pagination cursors, caught Pokemon) and
//! dispatches parsed commands against the PokeAPI client.

use std::collections::HashMap;

use rand::Rng;

use crate::client::PokeClient;
use crate::error::{PokedexError, Result};
use crate::models::Pokemon;
use crate::repl::commands::COMMANDS;

/// Whether the read loop should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

// == Session ==
/// State carried across commands within one interactive run.
pub struct Session {
    client: PokeClient,
    next_url: Option<String>,
    previous_url: Option<String>,
    caught: HashMap<String, Pokemon>,
}

impl Session {
    // == Constructor ==
    pub fn new(client: PokeClient) -> Self {
        Self {
            client,
            next_url: None,
            previous_url: None,
            caught: HashMap::new(),
        }
    }

    // == Dispatch ==
    /// Runs one parsed command. Unknown commands print a notice and continue;
    /// argument mistakes surface as [`PokedexError::InvalidArgs`].
    pub async fn dispatch(&mut self, name: &str, args: &[String]) -> Result<Outcome> {
        match name {
            "help" => self.command_help(),
            "exit" => {
                println!("Closing the Pokedex... Goodbye!");
                return Ok(Outcome::Exit);
            }
            "map" => self.command_map(false).await?,
            "mapb" => self.command_map(true).await?,
            "explore" => self.command_explore(args).await?,
            "catch" => self.command_catch(args).await?,
            "inspect" => self.command_inspect(args)?,
            "pokedex" => self.command_pokedex(args)?,
            "cache" => self.command_cache().await,
            _ => println!("Unknown command"),
        }
        Ok(Outcome::Continue)
    }

    // == Help ==
    fn command_help(&self) {
        println!("Welcome to the Pokedex!");
        println!("Usage:");
        println!();
        for spec in COMMANDS {
            println!("{}: {}", spec.name, spec.description);
        }
    }

    // == Map / Mapb ==
    /// Pages through the location-area listing. `backwards` follows the
    /// previous-page cursor instead of the next one.
    async fn command_map(&mut self, backwards: bool) -> Result<()> {
        let cursor = if backwards {
            match &self.previous_url {
                Some(url) => Some(url.clone()),
                None => {
                    println!("You're on the first page!");
                    return Ok(());
                }
            }
        } else {
            self.next_url.clone()
        };

        let page = self.client.list_location_areas(cursor.as_deref()).await?;

        self.next_url = page.next;
        self.previous_url = page.previous;

        for area in &page.results {
            println!("{}", area.name);
        }
        Ok(())
    }

    // == Explore ==
    async fn command_explore(&mut self, args: &[String]) -> Result<()> {
        let name = single_arg(args, "you must provide a location area name")?;

        let area = self.client.get_location_area(name).await?;

        println!("Exploring {}...", name);
        println!("Found Pokemon:");
        for encounter in &area.pokemon_encounters {
            println!("- {}", encounter.pokemon.name);
        }
        Ok(())
    }

    // == Catch ==
    async fn command_catch(&mut self, args: &[String]) -> Result<()> {
        let name = single_arg(args, "you must provide a pokemon name")?;

        println!("Throwing a Pokeball at {}...", name);

        let pokemon = self.client.get_pokemon(name).await?;

        let roll: f64 = rand::thread_rng().gen();
        if roll > catch_rate(pokemon.base_experience) {
            println!("{} escaped!", name);
            return Ok(());
        }

        println!("{} was caught!", name);
        self.caught.insert(name.to_string(), pokemon);
        Ok(())
    }

    // == Inspect ==
    fn command_inspect(&self, args: &[String]) -> Result<()> {
        let name = single_arg(args, "you must provide a pokemon name")?;

        let Some(pokemon) = self.caught.get(name) else {
            println!("you have not caught that pokemon");
            return Ok(());
        };

        println!("Name: {}", pokemon.name);
        println!("Height: {}", pokemon.height);
        println!("Weight: {}", pokemon.weight);
        println!("Stats:");
        for stat in &pokemon.stats {
            println!("  -{}: {}", stat.stat.name, stat.base_stat);
        }
        println!("Types:");
        for slot in &pokemon.types {
            println!("  - {}", slot.kind.name);
        }
        Ok(())
    }

    // == Pokedex ==
    fn command_pokedex(&self, args: &[String]) -> Result<()> {
        if !args.is_empty() {
            return Err(PokedexError::InvalidArgs(
                "pokedex command takes no arguments".to_string(),
            ));
        }

        println!("Your Pokedex:");
        if self.caught.is_empty() {
            println!("Empty!");
            return Ok(());
        }
        for pokemon in self.caught.values() {
            println!("  - {}", pokemon.name);
        }
        Ok(())
    }

    // == Cache ==
    async fn command_cache(&self) {
        let stats = self.client.cache_stats().await;
        println!("Cache entries: {}", stats.total_entries);
        println!("Hits: {}", stats.hits);
        println!("Misses: {}", stats.misses);
        println!("Reaped: {}", stats.reaped);
        println!("Hit rate: {:.1}%", stats.hit_rate() * 100.0);
    }
}

/// Extracts the single expected argument or fails with `message`.
fn single_arg<'a>(args: &'a [String], message: &str) -> Result<&'a str> {
    match args {
        [arg] => Ok(arg.as_str()),
        _ => Err(PokedexError::InvalidArgs(message.to_string())),
    }
}

/// Catch probability from base experience: stronger Pokemon are harder to
/// catch, floored at 10%.
fn catch_rate(base_experience: u32) -> f64 {
    (0.7 - base_experience as f64 / 1000.0).max(0.1)
}
