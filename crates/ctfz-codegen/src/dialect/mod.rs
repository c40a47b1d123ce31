//! # Target Dialects
//!
//! A [`Dialect`] turns the dialect-neutral pieces of a module (expression
//! trees, record fragments) into source text. Resolution and assembly never
//! produce text themselves, so supporting another validator library is a
//! matter of adding a dialect.

pub mod zod;

pub use zod::Zod;

use crate::expr::SchemaExpr;
use crate::record::RecordFragment;

/// Concrete syntax of a generated module.
pub trait Dialect {
    /// Extension of the generated file, without the dot.
    fn file_extension(&self) -> &'static str;

    /// Names the module declares on its own; no record may derive one.
    fn reserved_identifiers(&self) -> &'static [&'static str];

    /// Render an expression whose first line sits at indentation level `depth`.
    fn render_expr(&self, expr: &SchemaExpr, depth: usize) -> String;

    /// Fixed leading boilerplate: directives, imports, shared declarations.
    fn preamble(&self) -> String;

    /// The schema, static-type and skeleton declarations of one record.
    fn record(&self, fragment: &RecordFragment) -> String;

    /// Table from stable identifier to schema variant, in fragment order.
    fn dispatch_table(&self, fragments: &[RecordFragment]) -> String;

    /// Value exports (schema variants) followed by type-only exports
    /// (type and skeleton variants), in fragment order.
    fn exports(&self, fragments: &[RecordFragment]) -> String;
}
