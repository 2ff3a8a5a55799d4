//! Pokedex - an interactive PokeAPI explorer
//!
//! Paginates location listings, looks up encounters, and simulates catching
//! Pokemon, with every response cached in a TTL-bounded in-memory byte cache.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use cache::Cache;
pub use client::PokeClient;
pub use config::Config;
