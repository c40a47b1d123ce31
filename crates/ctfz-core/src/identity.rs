//! # Content-Type Identifier
//!
//! The stable, opaque key of a content type (`sys.id` on the wire). It is
//! used verbatim in the generated dispatch table and skeleton declarations,
//! and is the unit of link validations and content-type filters.

use serde::{Deserialize, Serialize};

/// Stable identifier of a content type, e.g. `blogPost`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentTypeId(String);

impl ContentTypeId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentTypeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ContentTypeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
