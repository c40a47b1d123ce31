//! # Error Types
//!
//! Errors raised while decoding a content-type collection. Field-level
//! irregularities are not errors here; only input that is not a collection
//! at all is rejected.

use thiserror::Error;

/// Failure to decode a content-type collection.
#[derive(Error, Debug)]
pub enum ModelError {
    /// The input was not valid JSON, or did not have the shape of a collection.
    #[error("invalid content-type collection: {0}")]
    InvalidCollection(#[from] serde_json::Error),

    /// Valid JSON, but neither a collection envelope nor a list.
    #[error("expected a content-type collection or a list of content types, found {found}")]
    NotACollection { found: &'static str },
}
