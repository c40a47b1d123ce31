//! # Field Type Resolution
//!
//! Maps one field's declared kind to a schema expression:
//!
//! | Kind | Expression |
//! |---|---|
//! | `Symbol`, `Text` | [`SchemaExpr::String`] |
//! | `Integer`, `Number` | [`SchemaExpr::Number`] |
//! | `Date` | [`SchemaExpr::Date`] |
//! | `Boolean` | [`SchemaExpr::Boolean`] |
//! | `Link` | [`resolve_reference`] |
//! | `Array` | [`SchemaExpr::Array`] of a `Symbol` or `Link` element |
//!
//! Everything else resolves to `None` and the field is dropped from its
//! record. Arrays with any other element kind are dropped too; there is no
//! "array of unknown".

use ctfz_core::{ContentTypeField, FieldItems, FieldType};

use crate::expr::SchemaExpr;
use crate::reference::{resolve_reference, LinkDescriptor};
use crate::table::NameTable;

/// Resolve a field to its schema expression, or `None` if it is unsupported.
pub fn resolve_field_expression(field: &ContentTypeField, names: &NameTable) -> Option<SchemaExpr> {
    match field.field_type {
        FieldType::Symbol | FieldType::Text => Some(SchemaExpr::String),
        FieldType::Integer | FieldType::Number => Some(SchemaExpr::Number),
        FieldType::Date => Some(SchemaExpr::Date),
        FieldType::Boolean => Some(SchemaExpr::Boolean),
        FieldType::Link => resolve_reference(&LinkDescriptor::of_field(field), names),
        FieldType::Array => {
            let element = resolve_array_element(field.items.as_ref()?, names)?;
            Some(SchemaExpr::array(element))
        }
        FieldType::Location
        | FieldType::Object
        | FieldType::RichText
        | FieldType::ResourceLink
        | FieldType::Other => None,
    }
}

/// Resolve the element of an array field. Only short text and links are supported.
fn resolve_array_element(items: &FieldItems, names: &NameTable) -> Option<SchemaExpr> {
    match items.field_type? {
        FieldType::Symbol => Some(SchemaExpr::String),
        FieldType::Link => resolve_reference(&LinkDescriptor::of_items(items), names),
        _ => None,
    }
}
