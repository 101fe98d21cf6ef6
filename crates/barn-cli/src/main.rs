//! # barn CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use barn_cli::dashboard::{run_dashboard, DashboardArgs};
use barn_cli::strings::{run_strings, StringsArgs};

/// Barn Buddy: harvest tracking for smallholder farms.
#[derive(Parser, Debug)]
#[command(name = "barn", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML dashboard config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory of `{code}.yaml` string tables overriding the built-in ones.
    #[arg(long, global = true)]
    locale_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sign in and drive the harvest tracker from the terminal.
    Dashboard(DashboardArgs),

    /// Look up localized strings or list untranslated keys.
    Strings(StringsArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("barn CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = match &cli.command {
        Commands::Dashboard(args) => {
            run_dashboard(args, cli.config.as_deref(), cli.locale_dir.as_deref()).await
        }
        Commands::Strings(args) => run_strings(args, cli.locale_dir.as_deref()),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
