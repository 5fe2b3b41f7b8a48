//! Pokédex CLI
//!
//! A terminal front end for looking up creatures on the PokéAPI.

mod commands;
mod render;

use std::time::Duration;

use clap::{Parser, Subcommand};
use pokedex_ops::pokedex_core::DEFAULT_ENDPOINT;
use pokedex_ops::{Pokedex, PokedexConfig};
use tracing_subscriber::{EnvFilter, fmt};

/// Pokédex — look up a creature, its sprite and its description.
#[derive(Parser, Debug)]
#[command(name = "pokedex", version, about)]
struct Cli {
    /// PokéAPI root URL.
    #[arg(
        long,
        env = "POKEDEX_ENDPOINT",
        default_value = DEFAULT_ENDPOINT,
        global = true
    )]
    endpoint: String,

    /// Request timeout in seconds (no timeout when unset).
    #[arg(long, env = "POKEDEX_TIMEOUT_SECS", global = true)]
    timeout_secs: Option<u64>,

    /// Output format.
    #[arg(long, default_value = "text", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up a single creature.
    Lookup(commands::lookup::LookupArgs),
    /// Start an interactive search prompt.
    Interactive,
}

impl Cli {
    fn config(&self) -> PokedexConfig {
        let config = PokedexConfig::new(&self.endpoint);
        match self.timeout_secs {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let pokedex = Pokedex::from_config(&cli.config())?;

    match cli.command {
        Command::Lookup(args) => commands::lookup::run(&pokedex, &args, &cli.format).await,
        Command::Interactive => commands::interactive::run(&pokedex, &cli.format).await,
    }
}
