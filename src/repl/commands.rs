//! Command Registry
//!
//! Names and descriptions for every REPL command, used by `help` and for
//! distinguishing unknown input from known commands.

// == Command Spec ==
/// A REPL command name with its help text.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
}

/// Every command the REPL understands.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        description: "Displays a help message",
    },
    CommandSpec {
        name: "exit",
        description: "Exit the Pokedex",
    },
    CommandSpec {
        name: "map",
        description: "Lists the next 20 location areas in the Pokemon world",
    },
    CommandSpec {
        name: "mapb",
        description: "Lists the previous 20 location areas in the Pokemon world",
    },
    CommandSpec {
        name: "explore",
        description: "Lists all Pokemon in a location area",
    },
    CommandSpec {
        name: "catch",
        description: "Attempt to catch a pokemon",
    },
    CommandSpec {
        name: "inspect",
        description: "View information about a caught pokemon",
    },
    CommandSpec {
        name: "pokedex",
        description: "List all the Pokemon you have caught",
    },
    CommandSpec {
        name: "cache",
        description: "Show response cache statistics",
    },
];

/// Looks up a command by name.
pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}
