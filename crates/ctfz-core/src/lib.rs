//! # ctfz-core: Content-Model Wire Types
//!
//! The leaf crate of the `ctfz` workspace. It defines the in-memory shape of
//! a content-type collection exactly as the content delivery API returns it,
//! so that every other crate works on typed values rather than raw JSON.
//!
//! ## Key Design Principles
//!
//! 1. **Lenient decoding.** Unknown field kinds decode to [`FieldType::Other`],
//!    every nested descriptor is optional and an attribute of the wrong shape
//!    falls back to its default. A field without an `id`, or a content type
//!    without `sys.id` or `name`, is dropped. None of this fails the
//!    collection as a whole.
//!
//! 2. **Newtype identifiers.** Stable content-type identifiers are
//!    [`ContentTypeId`], never bare strings, so a display name cannot be
//!    passed where an identifier is expected.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ctfz-*` crates (this is the leaf of the DAG).
//! - No I/O. Callers hand in JSON text or already-decoded values.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod model;

pub use error::ModelError;
pub use identity::ContentTypeId;
pub use model::{
    ContentType, ContentTypeCollection, ContentTypeField, ContentTypeSys, FieldItems, FieldType,
    FieldValidation, LinkType,
};
