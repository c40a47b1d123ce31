//! # Codegen Errors
//!
//! Field-level problems never surface here: an unsupported kind or a broken
//! link descriptor only drops the field, and a record whose display name
//! yields no usable identifier only drops that record. These errors cover
//! conflicts between records, where emitting anyway would produce a module
//! with duplicate declarations.

use ctfz_core::ContentTypeId;
use thiserror::Error;

/// Failure to generate a module.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    /// Two selected content types derive the same published name.
    #[error("content types '{first}' and '{second}' both derive the identifier '{identifier}'")]
    IdentifierCollision {
        identifier: String,
        first: ContentTypeId,
        second: ContentTypeId,
    },

    /// The same stable identifier appears twice in the selection.
    #[error("content type '{content_type}' appears more than once")]
    DuplicateContentType { content_type: ContentTypeId },
}
