//! CLI - Command-line argument parsing
//!
//! Keeps argument parsing separate from execution logic.

use clap::{Parser, Subcommand};

use crate::client::DEFAULT_SERVER;

/// Pokedex CLI
#[derive(Parser, Debug)]
#[command(name = "pokedexctl")]
#[command(about = "Pokedex - look up Pokémon through pokedexd", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Daemon base URL
    #[arg(long, global = true, env = "POKEDEX_SERVER", default_value = DEFAULT_SERVER)]
    pub server: String,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up one Pokémon and render its card
    Lookup {
        /// Name to search for
        name: String,

        /// Print the page as an HTML document
        #[arg(long, conflicts_with = "json")]
        html: bool,

        /// Print the Lookup Result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read one query per line from stdin and render each result
    Interactive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lookup() {
        let cli = Cli::try_parse_from(["pokedexctl", "--server", "http://dex:9000", "lookup", "eevee", "--json"])
            .unwrap();
        assert_eq!(cli.server, "http://dex:9000");
        match cli.command {
            Commands::Lookup { name, html, json } => {
                assert_eq!(name, "eevee");
                assert!(json);
                assert!(!html);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_html_conflicts_with_json() {
        assert!(Cli::try_parse_from(["pokedexctl", "lookup", "eevee", "--json", "--html"]).is_err());
    }

    #[test]
    fn test_interactive() {
        let cli = Cli::try_parse_from(["pokedexctl", "interactive", "--no-color"]).unwrap();
        assert!(matches!(cli.command, Commands::Interactive));
        assert!(cli.no_color);
    }
}
