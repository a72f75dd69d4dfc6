//! svexpand CLI - tag-rewriting preprocessor for Svelte markdown.
//!
//! Provides commands for:
//! - `process`: Rewrite custom tags and aggregate script blocks
//! - `check`: Dry-run the pipeline and report tag diagnostics

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ProcessArgs};
use output::Output;

/// svexpand - expand custom component tags in Svelte markdown.
#[derive(Parser)]
#[command(name = "svexpand", version, about)]
struct Cli {
    /// Path to svexpand.toml (discovered in parent directories when omitted).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite tags and aggregate script blocks in markdown files.
    Process(ProcessArgs),
    /// Dry-run the pipeline and report tag diagnostics.
    Check(CheckArgs),
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let output = Output::new();

    let result = match cli.command {
        Commands::Process(args) => args.execute(cli.config.as_deref(), &output),
        Commands::Check(args) => args.execute(cli.config.as_deref(), &output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
