//! GDrive CLI - Command-line interface for gdrive
//!
//! Provides two verbs:
//! - `pull` (alias `download`): materialize a remote unit at a local path
//! - `push` (alias `upload`): mirror a local path into a remote folder
//!
//! Authentication uses a service-account key file; the store handle it
//! yields is built here and passed into the engines.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gdrive_core::config::Config;

mod commands;
mod output;
mod reporter;

use commands::{pull::PullCommand, push::PushCommand, Globals};
use output::{get_formatter, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "gdrive", version, about = "Google Drive mirror for local trees")]
pub struct Cli {
    /// Service-account credentials file (overrides the config value)
    #[arg(short, long, global = true, value_name = "FILE")]
    auth: Option<PathBuf>,

    /// Suppress per-file transfer output; errors still print
    #[arg(short, long, global = true)]
    silent: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use alternate config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Pull a remote file or folder, recursively, into a local path
    #[command(alias = "download")]
    Pull(PullCommand),
    /// Push a local file or directory, recursively, into a remote folder
    #[command(alias = "upload")]
    Push(PushCommand),
}

/// Filter directive for a given `-v` count
///
/// `RUST_LOG` takes precedence over this; without `-v` the configured
/// level applies.
fn verbosity_filter(verbose: u8, config_level: &str) -> String {
    match verbose {
        0 => config_level.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };
    let formatter = get_formatter(format);

    // Config is loaded before tracing so its level can seed the filter
    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let config = match commands::load_config(&config_path) {
        Ok(config) => config,
        Err(err) => {
            formatter.error(&format!("{err:#}"));
            std::process::exit(1);
        }
    };

    let filter = verbosity_filter(cli.verbose, &config.logging.level);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    info!(config_path = %config_path.display(), "Loaded configuration");

    let globals = Globals {
        format,
        silent: cli.silent,
        auth: cli.auth,
        config,
    };

    let result = match cli.command {
        Commands::Pull(cmd) => cmd.execute(&globals).await,
        Commands::Push(cmd) => cmd.execute(&globals).await,
    };

    if let Err(err) = result {
        formatter.error(&format!("{err:#}"));
        std::process::exit(1);
    }
}
