//! Runfiles CLI
//!
//! Resolves runfiles for build-system packaged programs and launches
//! runfile executables with an environment that lets them find their own.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use error::Result;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let runfiles = runfiles::Runfiles::new(cli.options())?;
    tracing::debug!(source = ?runfiles.source(), "Runfiles discovered");

    match cli.command {
        Commands::Path { logical, json } => {
            commands::run_path(&runfiles, &logical, json)?;
            Ok(0)
        }
        Commands::Env { json } => {
            commands::run_env(&runfiles, json)?;
            Ok(0)
        }
        Commands::Info { json } => {
            commands::run_info(&runfiles, json)?;
            Ok(0)
        }
        Commands::Run { logical, args } => commands::run_program(&runfiles, &logical, &args),
    }
}

/// Log to stderr so command output on stdout stays machine-readable.
fn init_tracing(verbose: bool) {
    let result = if verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    };

    if result.is_err() {
        eprintln!("{}: failed to set tracing subscriber", "warning".yellow().bold());
    }
    tracing::debug!("Verbose mode enabled");
}
