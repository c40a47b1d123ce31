//! # ctfz CLI entry point
//!
//! Parses command-line arguments, installs logging and dispatches to the
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ctfz_cli::config::FileConfig;
use ctfz_cli::generate::{run_generate, GenerateArgs};
use ctfz_cli::render::{run_render, RenderArgs};

/// Generate zod schemas and TypeScript types from a content model.
#[derive(Parser, Debug)]
#[command(name = "ctfz", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch content types from the delivery API and generate schemas.
    Generate(GenerateArgs),

    /// Generate schemas from an exported content-type collection.
    Render(RenderArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn,ctfz_cli=info,ctfz_codegen=info"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = FileConfig::load_optional(cli.config.as_deref()).and_then(|file| {
        match &cli.command {
            Commands::Generate(args) => run_generate(args, &file),
            Commands::Render(args) => run_render(args, &file),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
