//! # `ctfz generate`
//!
//! Fetches the content model of a live space environment and generates the
//! schema module from it.
//!
//! ```bash
//! CONTENTFUL_ACCESS_TOKEN=... ctfz generate --space-id abc123 --out-dir src/generated
//! ctfz --config ctfz.yaml generate --content-type blogPost --content-type person
//! ```

use anyhow::{Context, Result};
use clap::Args;

use ctfz_client::ContentfulClient;

use crate::config::{ConnectionArgs, FileConfig, OutputArgs};
use crate::pipeline::run_pipeline;

/// Arguments of `ctfz generate`.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Fetch, generate and persist. Returns the process exit code.
pub fn run_generate(args: &GenerateArgs, file: &FileConfig) -> Result<u8> {
    let client_config = args.connection.client_config(file)?;
    let pipeline_config = args.output.pipeline_config(file);

    let client = ContentfulClient::new(&client_config).context("invalid delivery API settings")?;
    tracing::debug!(endpoint = %client.endpoint(), "fetching content types");

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let collection = runtime
        .block_on(client.content_types())
        .with_context(|| {
            format!(
                "failed to fetch content types of space '{}'",
                client_config.space_id
            )
        })?;

    let report = run_pipeline(&collection, &pipeline_config)?;
    crate::print_report(&report, &pipeline_config.output);
    Ok(0)
}
