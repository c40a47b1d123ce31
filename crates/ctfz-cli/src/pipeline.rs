//! # Generation Orchestrator
//!
//! Runs the generator over a fetched or loaded collection and persists the
//! module when an output directory is configured.

use std::path::PathBuf;

use anyhow::{Context, Result};

use ctfz_codegen::{generate_module, Dialect, GeneratedModule, Zod};
use ctfz_core::ContentType;

use crate::config::PipelineConfig;

/// Outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    /// The generated module. Empty when nothing was selected.
    pub text: String,
    /// Number of content models in the module.
    pub records: usize,
    /// Path written to, if the module was persisted.
    pub written: Option<PathBuf>,
}

/// Generate the module for `collection` and persist it per `config.output`.
pub fn run_pipeline(collection: &[ContentType], config: &PipelineConfig) -> Result<PipelineReport> {
    let dialect = Zod;
    let GeneratedModule { text, records } =
        generate_module(&dialect, collection, &config.generation)
            .context("failed to generate content models")?;

    if records == 0 {
        tracing::info!("No content types found");
        return Ok(PipelineReport {
            text,
            records,
            written: None,
        });
    }

    let written = match &config.output.directory {
        Some(directory) => {
            std::fs::create_dir_all(directory).with_context(|| {
                format!("failed to create output directory {}", directory.display())
            })?;
            let path = directory.join(format!(
                "{}.{}",
                config.output.file_name,
                dialect.file_extension()
            ));
            std::fs::write(&path, &text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Generated {records} content models to {}", path.display());
            Some(path)
        }
        None => None,
    };

    Ok(PipelineReport {
        text,
        records,
        written,
    })
}
