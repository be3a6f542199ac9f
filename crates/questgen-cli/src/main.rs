//! questgen CLI
//!
//! Fetches and warms the pretrained models behind question generation.
//!
//! # Commands
//!
//! - `download`: Fetch every model and the Stanza package, skip building the
//!   distractor composite
//! - `load`: Full startup load, then print what was loaded
//! - `list`: Print the model catalog (no network)
//!
//! # Exit Codes
//! - 0: Success
//! - 1: A model or resource failed to load
//! - 2: Invalid configuration

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod error;

pub use error::CliExitCode;

/// questgen - pretrained model bootstrap
#[derive(Parser)]
#[command(name = "questgen")]
#[command(version)]
#[command(about = "Download and warm the question generation language models")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    source: commands::SourceArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pre-download every model (the distractor composite is not built)
    Download(commands::DownloadArgs),
    /// Load every model as the service does at startup
    Load(commands::LoadArgs),
    /// List the model catalog
    List(commands::ListArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match cli.command {
        Commands::Download(args) => commands::download_command(&cli.source, args).await,
        Commands::Load(args) => commands::load_command(&cli.source, args).await,
        Commands::List(args) => commands::list_command(args),
    };

    std::process::exit(exit_code);
}
