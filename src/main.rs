//! Pokedex - an interactive PokeAPI explorer
//!
//! # Startup Sequence
//! 1. Initialize tracing subscriber for logging
//! 2. Load configuration from environment variables
//! 3. Create the response cache, which starts its background reap loop
//! 4. Build the PokeAPI client over the cache
//! 5. Run the interactive read loop until exit or Ctrl+C

use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{repl, Cache, Config, PokeClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "configuration loaded: cache_ttl={}s, base_url={}",
        config.cache_ttl_secs, config.base_url
    );

    // The cache spawns its reap loop here; it runs until the process exits
    let cache = Cache::new(config.cache_ttl());
    let client = PokeClient::new(cache.clone(), &config.base_url);
    info!("response cache initialized");

    tokio::select! {
        result = repl::run(client) => {
            result?;
        }
        _ = shutdown_signal() => {
            println!();
            warn!("interrupted, shutting down");
        }
    }

    cache.stop();
    info!("goodbye");
    Ok(())
}

/// Waits for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
