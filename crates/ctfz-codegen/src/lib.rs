//! # ctfz-codegen: Schema Generation for Content Models
//!
//! Translates a content-type collection into one self-contained source
//! module holding, per content type, a runtime schema, the static type
//! inferred from it and a skeleton type pairing that shape with the
//! content type's stable identifier; followed by a dispatch table from
//! identifier to schema and the export blocks.
//!
//! ## Pipeline
//!
//! 1. **Select** the content types named by the [`GenerationConfig`] filter.
//! 2. **Name** every selected type ([`naming`], [`table`]). A type with no
//!    usable name is skipped with a warning; two types publishing the same
//!    name fail the run before anything is emitted.
//! 3. **Resolve** each field to a [`SchemaExpr`] ([`field`], [`reference`]).
//!    Unsupported fields are dropped silently.
//! 4. **Emit** one [`RecordFragment`] per type ([`record`]).
//! 5. **Assemble** and render through a [`Dialect`] ([`assemble`],
//!    [`dialect`]).
//!
//! The crate performs no I/O and keeps no state between calls: the same
//! collection and configuration always produce byte-identical text.

pub mod assemble;
pub mod config;
pub mod dialect;
pub mod error;
pub mod expr;
pub mod field;
pub mod naming;
pub mod record;
pub mod reference;
pub mod table;

#[cfg(test)]
mod fixtures;

pub use assemble::assemble;
pub use config::{GenerationConfig, DEFAULT_TYPE_PREFIX};
pub use dialect::{Dialect, Zod};
pub use error::CodegenError;
pub use expr::{ObjectField, SchemaExpr};
pub use naming::{base_identifier, derive_variant, Variant, VariantNames};
pub use record::{emit_record, RecordFragment};
pub use table::NameTable;

use ctfz_core::ContentType;

/// Generate the zod module for `collection`.
///
/// Returns an empty string when no content type is selected.
pub fn generate(
    collection: &[ContentType],
    config: &GenerationConfig,
) -> Result<String, CodegenError> {
    generate_with(&Zod, collection, config)
}

/// Generate the module for `collection` in the given dialect.
pub fn generate_with<D: Dialect + ?Sized>(
    dialect: &D,
    collection: &[ContentType],
    config: &GenerationConfig,
) -> Result<String, CodegenError> {
    generate_module(dialect, collection, config).map(|module| module.text)
}

/// A generated module and the number of content models it declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    /// Source text. Empty when no content type was selected.
    pub text: String,
    pub records: usize,
}

/// Generate the module for `collection`, reporting how many records it holds.
pub fn generate_module<D: Dialect + ?Sized>(
    dialect: &D,
    collection: &[ContentType],
    config: &GenerationConfig,
) -> Result<GeneratedModule, CodegenError> {
    let fragments = emit_fragments(dialect, collection, config)?;
    let text = if fragments.is_empty() {
        String::new()
    } else {
        assemble(dialect, &fragments)
    };
    Ok(GeneratedModule {
        text,
        records: fragments.len(),
    })
}

/// Select, name and emit the fragments of `collection`, in collection order.
pub fn emit_fragments<D: Dialect + ?Sized>(
    dialect: &D,
    collection: &[ContentType],
    config: &GenerationConfig,
) -> Result<Vec<RecordFragment>, CodegenError> {
    let selected: Vec<&ContentType> = collection
        .iter()
        .filter(|ct| config.selects(ct.id()))
        .collect();

    let names = NameTable::build(
        selected.iter().copied(),
        &config.type_prefix,
        dialect.reserved_identifiers(),
    )?;

    let mut fragments = Vec::with_capacity(selected.len());
    for content_type in selected {
        let Some(identifiers) = names.get(content_type.id()) else {
            continue;
        };
        tracing::info!(
            content_type = %content_type.id(),
            "Generating content model for {}",
            content_type.name
        );
        fragments.push(emit_record(content_type, identifiers, &names));
    }
    Ok(fragments)
}
