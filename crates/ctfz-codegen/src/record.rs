//! # Record Emission
//!
//! Builds the fragment for one content type: the object schema over its
//! supported fields plus the identifiers its three declarations are
//! published under. Fragments are plain values; nothing is rendered or
//! accumulated here.

use ctfz_core::{ContentType, ContentTypeId};

use crate::expr::{ObjectField, SchemaExpr};
use crate::field::resolve_field_expression;
use crate::naming::VariantNames;
use crate::table::NameTable;

/// Everything needed to render one record's declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFragment {
    /// Stable identifier, paired with the static type in the skeleton declaration.
    pub content_type: ContentTypeId,
    pub display_name: String,
    pub names: VariantNames,
    /// Always a [`SchemaExpr::Object`] with one property per supported field.
    pub schema: SchemaExpr,
}

impl RecordFragment {
    /// Property keys of the schema, in emission order.
    pub fn field_keys(&self) -> Vec<&str> {
        match &self.schema {
            SchemaExpr::Object(fields) => fields.iter().map(|f| f.key.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

/// Emit the fragment of `record`, published under `identifiers`.
///
/// Fields are visited in declared order. A field that does not resolve is
/// skipped; a field that is not required is wrapped in
/// [`SchemaExpr::Optional`].
pub fn emit_record(
    record: &ContentType,
    identifiers: &VariantNames,
    names: &NameTable,
) -> RecordFragment {
    let fields = record
        .fields
        .iter()
        .filter_map(|field| {
            let expr = resolve_field_expression(field, names)?;
            let expr = if field.required {
                expr
            } else {
                SchemaExpr::optional(expr)
            };
            Some(ObjectField::new(field.id.clone(), expr))
        })
        .collect();

    RecordFragment {
        content_type: record.id().clone(),
        display_name: record.name.clone(),
        names: identifiers.clone(),
        schema: SchemaExpr::Object(fields),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::entry_link;
    use crate::fixtures::*;
    use ctfz_core::FieldType;

    fn emit(records: &[ContentType], index: usize) -> RecordFragment {
        let names = NameTable::build(records, "CF", &[]).unwrap();
        let record = &records[index];
        emit_record(record, names.get(record.id()).unwrap(), &names)
    }

    #[test]
    fn fields_keep_declared_order_minus_unsupported() {
        let records = [content_type(
            "article",
            "Article",
            vec![
                required(field("title", FieldType::Symbol)),
                field("where", FieldType::Location),
                field("body", FieldType::Text),
                field("meta", FieldType::Object),
                field("views", FieldType::Integer),
                array_of("scores", items(FieldType::Number)),
                field("published", FieldType::Date),
            ],
        )];
        let fragment = emit(&records, 0);
        assert_eq!(fragment.field_keys(), vec!["title", "body", "views", "published"]);
    }

    #[test]
    fn optionality_follows_required_flag() {
        let records = [content_type(
            "article",
            "Article",
            vec![
                required(field("title", FieldType::Symbol)),
                field("subtitle", FieldType::Symbol),
            ],
        )];
        let fragment = emit(&records, 0);
        assert_eq!(
            fragment.schema,
            SchemaExpr::Object(vec![
                ObjectField::new("title", SchemaExpr::String),
                ObjectField::new("subtitle", SchemaExpr::optional(SchemaExpr::String)),
            ])
        );
    }

    #[test]
    fn carries_identifiers_and_stable_id() {
        let records = [content_type("blogPost", "blog post", Vec::new())];
        let fragment = emit(&records, 0);
        assert_eq!(fragment.content_type, ContentTypeId::new("blogPost"));
        assert_eq!(fragment.names.schema, "CFBlogPostDecoder");
        assert_eq!(fragment.names.type_name, "BlogPost");
        assert_eq!(fragment.names.skeleton, "CFTypeBlogPost");
        assert_eq!(fragment.schema, SchemaExpr::Object(Vec::new()));
    }

    #[test]
    fn self_reference_is_deferred() {
        let records = [content_type(
            "category",
            "Category",
            vec![
                required(field("name", FieldType::Symbol)),
                entry_ref("parent", &["category"]),
                array_of("children", entry_items(&["category"])),
            ],
        )];
        let fragment = emit(&records, 0);
        assert_eq!(
            fragment.schema,
            SchemaExpr::Object(vec![
                ObjectField::new("name", SchemaExpr::String),
                ObjectField::new(
                    "parent",
                    SchemaExpr::optional(entry_link(SchemaExpr::lazy("CFCategoryDecoder")))
                ),
                ObjectField::new(
                    "children",
                    SchemaExpr::optional(SchemaExpr::array(entry_link(SchemaExpr::lazy(
                        "CFCategoryDecoder"
                    ))))
                ),
            ])
        );
    }

    #[test]
    fn forward_reference_is_independent_of_emission_order() {
        let a = content_type("a", "Alpha", vec![required(entry_ref("next", &["b"]))]);
        let b = content_type("b", "Beta", vec![entry_ref("prev", &["a"])]);

        let forward = [a.clone(), b.clone()];
        let backward = [b, a];

        assert_eq!(emit(&forward, 0), emit(&backward, 1));
        assert_eq!(emit(&forward, 1), emit(&backward, 0));
    }
}
