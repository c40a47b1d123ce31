//! # `ctfz render`
//!
//! Generates the schema module from an exported collection file, without
//! contacting the delivery API. The file may hold the API's collection
//! envelope or a bare array of content types; `-` reads standard input.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use ctfz_core::ContentTypeCollection;

use crate::config::{FileConfig, OutputArgs};
use crate::pipeline::run_pipeline;

/// Arguments of `ctfz render`.
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Exported content-type collection (JSON), or `-` for standard input.
    pub input: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Load, generate and persist. Returns the process exit code.
pub fn run_render(args: &RenderArgs, file: &FileConfig) -> Result<u8> {
    let text = read_input(&args.input)?;
    let collection = ContentTypeCollection::from_json(&text)
        .with_context(|| format!("invalid content-type collection in {}", args.input.display()))?;
    tracing::debug!(count = collection.items.len(), "loaded content types");

    let pipeline_config = args.output.pipeline_config(file);
    let report = run_pipeline(&collection.items, &pipeline_config)?;
    crate::print_report(&report, &pipeline_config.output);
    Ok(0)
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read standard input")?;
        return Ok(text);
    }
    std::fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))
}
