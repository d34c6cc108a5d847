//! Command-line interface for fingerprint-db
//!
//! Provides `locations`, `info` and `show` subcommands over a loaded database.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod info;
mod locations;
mod show;
mod utils;

/// Load directories of YAML vulnerability fingerprints and query them
#[derive(Parser)]
#[command(name = "fingerprint-db")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    source: SourceArgs,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Where the definitions come from; shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Config file (TOML or YAML); auto-discovered in the current directory if omitted
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the .yml definition files
    #[arg(short, long, global = true, value_name = "DIR", env = "FINGERPRINT_DB_DIR")]
    pub dir: Option<PathBuf>,

    /// Load only these definition files, by base name (comma-separated)
    #[arg(short, long, global = true, value_name = "NAMES")]
    pub include: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the locations checked for an application's issues
    Locations(locations::LocationsArgs),

    /// Summarize the loaded applications
    Info,

    /// Print an application's issue definitions
    Show(show::ShowArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
        EnvFilter::new(level.as_str())
    });
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Locations(args) => locations::run(&cli.source, args),
        Commands::Info => info::run(&cli.source),
        Commands::Show(args) => show::run(&cli.source, args),
    }
}
