//! # ctfz-cli: Schema Generation Command
//!
//! Provides the `ctfz` command-line interface around the generator.
//!
//! ## Subcommands
//!
//! - `ctfz generate`: fetch the content model from the delivery API.
//! - `ctfz render`: read an exported content model from a file or stdin.
//!
//! Both hand the collection to [`pipeline::run_pipeline`], which writes
//! `<out-dir>/<file-name>.ts` when an output directory is configured.
//!
//! ```bash
//! ctfz generate --space-id abc123 --access-token $TOKEN --out-dir src/generated
//! ctfz render content-types.json --stdout
//! ```

pub mod config;
pub mod generate;
pub mod pipeline;
pub mod render;

use std::io::Write;

use config::OutputConfig;
use pipeline::PipelineReport;

/// Print the module when asked to, or when it was not written anywhere.
pub fn print_report(report: &PipelineReport, output: &OutputConfig) {
    if report.text.is_empty() {
        return;
    }
    if output.stdout || report.written.is_none() {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = stdout.write_all(report.text.as_bytes()) {
            tracing::warn!("failed to write to stdout: {e}");
        }
    }
}
