//! # Generation Configuration
//!
//! Options recognised by [`generate`](crate::generate). Deserializable so a
//! caller's configuration file can embed it directly.

use std::collections::BTreeSet;

use ctfz_core::ContentTypeId;
use serde::{Deserialize, Serialize};

/// Prefix applied to schema and skeleton identifiers when none is configured.
pub const DEFAULT_TYPE_PREFIX: &str = "CF";

/// Options for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Prefix of schema-variant and skeleton-variant identifiers.
    pub type_prefix: String,
    /// Restrict generation to these content types. Empty means all.
    #[serde(rename = "content_types")]
    pub content_type_filter: BTreeSet<ContentTypeId>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            type_prefix: DEFAULT_TYPE_PREFIX.to_string(),
            content_type_filter: BTreeSet::new(),
        }
    }
}

impl GenerationConfig {
    /// Replace the type prefix.
    pub fn with_type_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.type_prefix = prefix.into();
        self
    }

    /// Restrict generation to `ids`.
    pub fn with_filter<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ContentTypeId>,
    {
        self.content_type_filter = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the content type `id` takes part in generation.
    pub fn selects(&self, id: &ContentTypeId) -> bool {
        self.content_type_filter.is_empty() || self.content_type_filter.contains(id)
    }
}
