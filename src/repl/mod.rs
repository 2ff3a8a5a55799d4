//! REPL Module
//!
//! The interactive read loop: prompt, tokenize, dispatch, repeat.

mod commands;
mod input;
mod session;

pub use commands::{lookup, CommandSpec, COMMANDS};
pub use input::clean_input;
pub use session::{Outcome, Session};

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::client::PokeClient;
use crate::error::Result;

/// Runs the interactive loop until `exit` or end of input.
///
/// Command failures are printed and the loop continues; only I/O errors on
/// stdin terminate the run.
pub async fn run(client: PokeClient) -> Result<()> {
    let mut session = Session::new(client);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("Pokedex > ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            // stdin closed
            break;
        };

        let words = clean_input(&line);
        let Some((name, args)) = words.split_first() else {
            continue;
        };

        if lookup(name).is_none() {
            println!("Unknown command");
            continue;
        }

        debug!("dispatching command {:?}", name);
        match session.dispatch(name, args).await {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Exit) => break,
            Err(err) => println!("Error executing command: {}", err),
        }
    }

    Ok(())
}
