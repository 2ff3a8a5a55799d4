//! Error types for the Pokedex CLI
//!
//! Provides unified error handling using thiserror.
//!
//! Cache misses are not errors: the cache reports absence through `Option`,
//! and only the network and decoding paths here are fallible.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex CLI.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Transport-level HTTP failure
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the API
    #[error("unexpected status {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Response body failed to decode
    #[error("failed to decode response: {0}")]
    Json(#[from] serde_json::Error),

    /// Command invoked with the wrong arguments
    #[error("{0}")]
    InvalidArgs(String),

    /// Terminal I/O failure in the read loop
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex CLI.
pub type Result<T> = std::result::Result<T, PokedexError>;
