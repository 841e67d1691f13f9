//! Verdure CLI - plant photo identification and care-guide relay.
//!
//! Verdure identifies the plant in an uploaded photo and returns a JSON care
//! guide for it, generated by a language model.
//!
//! # Usage
//!
//! ```bash
//! # Run the HTTP relay (POST /identify)
//! verdure serve --port 8080
//!
//! # Identify a local photo once
//! verdure identify ./monstera.jpg
//!
//! # View configuration
//! verdure config show
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;
mod logging;

/// Verdure - plant photo identification and care-guide relay.
#[derive(Parser, Debug)]
#[command(name = "verdure")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "VERDURE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the identification relay HTTP server
    Serve(cli::serve::ServeArgs),

    /// Identify a local plant photo and print its care guide
    Identify(cli::identify::IdentifyArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // PLANT_API_KEY / OPEN_AI_KEY are commonly kept in a local .env file.
    let dotenv_path = dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config_path = cli::config::resolve_path(cli.config.as_deref());

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match cli::config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `verdure config path`."
            );
            verdure_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Verdure v{}", verdure_core::VERSION);
    if let Some(path) = dotenv_path {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    // Dispatch to the appropriate command handler
    match cli.command {
        Commands::Serve(args) => cli::serve::execute(args, config).await,
        Commands::Identify(args) => cli::identify::execute(args, config).await,
        Commands::Config(args) => cli::config::execute(args, &config_path).await,
    }
}
