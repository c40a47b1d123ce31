//! # Run Configuration
//!
//! Settings come from four layers, highest precedence first: command-line
//! flags, environment variables (resolved by clap), the YAML file given with
//! `--config`, then built-in defaults.
//!
//! ```yaml
//! space_id: abc123
//! access_token: <delivery token>
//! environment: master
//! output:
//!   directory: src/generated
//!   file_name: ctf-schemas
//! content_types: [blogPost, person]
//! type_prefix: CF
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;

use ctfz_client::ContentfulConfig;
use ctfz_codegen::{GenerationConfig, DEFAULT_TYPE_PREFIX};

/// Base name of the generated file when none is configured.
pub const DEFAULT_FILE_NAME: &str = "ctf-schemas";

/// Contents of the `--config` YAML file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub space_id: Option<String>,
    pub access_token: Option<String>,
    pub environment: Option<String>,
    pub base_url: Option<String>,
    pub output: FileOutput,
    pub content_types: Vec<String>,
    pub type_prefix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileOutput {
    pub directory: Option<PathBuf>,
    pub file_name: Option<String>,
}

impl FileConfig {
    /// Read and parse a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Load `path` if given, else the empty configuration.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as a map.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }
}

/// Where the generated module goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Directory to write into. `None` means do not persist.
    pub directory: Option<PathBuf>,
    pub file_name: String,
    /// Also print the module to standard output.
    pub stdout: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_name: DEFAULT_FILE_NAME.to_string(),
            stdout: false,
        }
    }
}

/// Everything the orchestrator needs for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    pub generation: GenerationConfig,
    pub output: OutputConfig,
}

/// Output and generation flags shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Directory to write the generated module into.
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Base name of the generated file, without extension [default: ctf-schemas].
    #[arg(long, value_name = "NAME")]
    pub file_name: Option<String>,

    /// Only generate these content types. Repeatable.
    #[arg(long = "content-type", value_name = "ID")]
    pub content_types: Vec<String>,

    /// Prefix for schema and skeleton identifiers [default: CF].
    #[arg(long, value_name = "PREFIX")]
    pub type_prefix: Option<String>,

    /// Print the generated module to standard output.
    #[arg(long)]
    pub stdout: bool,
}

impl OutputArgs {
    /// Merge these flags over `file`.
    pub fn pipeline_config(&self, file: &FileConfig) -> PipelineConfig {
        let content_types = if self.content_types.is_empty() {
            &file.content_types
        } else {
            &self.content_types
        };
        let type_prefix = self
            .type_prefix
            .clone()
            .or_else(|| file.type_prefix.clone())
            .unwrap_or_else(|| DEFAULT_TYPE_PREFIX.to_string());

        PipelineConfig {
            generation: GenerationConfig::default()
                .with_type_prefix(type_prefix)
                .with_filter(content_types.iter().map(String::as_str)),
            output: OutputConfig {
                directory: self
                    .out_dir
                    .clone()
                    .or_else(|| file.output.directory.clone()),
                file_name: self
                    .file_name
                    .clone()
                    .or_else(|| file.output.file_name.clone())
                    .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string()),
                stdout: self.stdout,
            },
        }
    }
}

/// Delivery API connection flags of `ctfz generate`.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Space to read the content model from.
    #[arg(long, env = "CONTENTFUL_SPACE_ID")]
    pub space_id: Option<String>,

    /// Delivery API access token.
    #[arg(long, env = "CONTENTFUL_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Space environment [default: master].
    #[arg(long, env = "CONTENTFUL_ENVIRONMENT")]
    pub environment: Option<String>,

    /// API host [default: https://cdn.contentful.com].
    #[arg(long)]
    pub base_url: Option<String>,
}

impl ConnectionArgs {
    /// Merge these flags (and their environment variables) over `file`.
    pub fn client_config(&self, file: &FileConfig) -> Result<ContentfulConfig> {
        let space_id = self
            .space_id
            .clone()
            .or_else(|| file.space_id.clone())
            .context("no space id: pass --space-id, set CONTENTFUL_SPACE_ID or add space_id to the config file")?;
        let access_token = self
            .access_token
            .clone()
            .or_else(|| file.access_token.clone())
            .context("no access token: pass --access-token, set CONTENTFUL_ACCESS_TOKEN or add access_token to the config file")?;

        let mut config = ContentfulConfig::new(space_id, access_token);
        if let Some(environment) = self.environment.clone().or_else(|| file.environment.clone()) {
            config = config.with_environment(environment);
        }
        if let Some(base_url) = self.base_url.clone().or_else(|| file.base_url.clone()) {
            config = config.with_base_url(base_url);
        }
        Ok(config)
    }
}
