//! Tagweave CLI - wildcard template library generator for tagged image corpora.
//!
//! Tagweave reads a directory of per-image label files (from an external
//! vision tagger) and writes a sectioned wildcard template library.
//!
//! # Usage
//!
//! ```bash
//! # Generate a wildcard library from a tag directory
//! tagweave generate ./tags/
//!
//! # Tune synthesis
//! tagweave generate ./tags/ --threshold 0.5 --min-set-size 2 --max-set-size 8
//!
//! # View configuration
//! tagweave config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Tagweave - wildcard template library generator for tagged image corpora.
#[derive(Parser, Debug)]
#[command(name = "tagweave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a wildcard template library from a directory of label files
    Generate(cli::generate::GenerateArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging from config, with CLI overrides.
    // Logging isn't up yet, so config warnings go through eprintln.
    let config = match tagweave_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `tagweave config path`."
            );
            tagweave_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Tagweave v{}", tagweave_core::VERSION);

    match cli.command {
        Commands::Generate(args) => cli::generate::execute(args),
        Commands::Config(args) => cli::config::execute(args),
    }
}
