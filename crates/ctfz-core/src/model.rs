//! # Content-Type Model
//!
//! Serde mirror of the content delivery API's content-type resources. Only
//! the parts the generator reads are modelled; every other key is ignored.
//!
//! ## Link Targets
//!
//! A single `Link` field declares its permitted targets in its own
//! `validations`; an `Array` of links declares them on `items.validations`.
//! In both places the first validation carrying `linkContentType` wins.
//!
//! ## Leniency
//!
//! Field attributes decode through [`or_default`] and lists through
//! [`valid_entries`]: an attribute of the wrong shape falls back to its
//! default (`Other`, `None`, `false`, empty) and a list entry that cannot be
//! decoded at all is dropped. The generator later skips whatever no longer
//! resolves, so one malformed field never costs the rest of the collection.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ModelError;
use crate::identity::ContentTypeId;

/// Declared kind of a field (or of an array element).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FieldType {
    /// Short text.
    Symbol,
    /// Long text.
    Text,
    Integer,
    Number,
    Date,
    Boolean,
    /// Reference to an entry or an asset; see [`LinkType`].
    Link,
    Array,
    Location,
    Object,
    RichText,
    ResourceLink,
    /// Any kind this crate does not know about, including a missing `type`.
    #[default]
    #[serde(other)]
    Other,
}

/// What a `Link` field points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkType {
    /// Another entry, constrained by `linkContentType` validations.
    Entry,
    /// A binary asset.
    Asset,
    #[serde(other)]
    Other,
}

/// One validation rule attached to a field or to its element descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidation {
    /// Content types an entry link may point at.
    #[serde(
        default,
        deserialize_with = "or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub link_content_type: Option<Vec<ContentTypeId>>,
}

/// Element descriptor of an `Array` field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldItems {
    #[serde(rename = "type", default, deserialize_with = "or_default")]
    pub field_type: Option<FieldType>,
    #[serde(
        default,
        deserialize_with = "or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub link_type: Option<LinkType>,
    #[serde(default, deserialize_with = "valid_entries")]
    pub validations: Vec<FieldValidation>,
}

impl FieldItems {
    /// Permitted entry targets of the array's elements, in declared order.
    pub fn link_targets(&self) -> Option<&[ContentTypeId]> {
        first_link_content_type(&self.validations)
    }
}

/// One field of a content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeField {
    /// Stable key, used verbatim as the property name in generated output.
    pub id: String,
    #[serde(default, deserialize_with = "or_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "or_default")]
    pub field_type: FieldType,
    #[serde(
        default,
        deserialize_with = "or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub link_type: Option<LinkType>,
    #[serde(default, deserialize_with = "or_default")]
    pub required: bool,
    #[serde(
        default,
        deserialize_with = "or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub items: Option<FieldItems>,
    #[serde(default, deserialize_with = "valid_entries")]
    pub validations: Vec<FieldValidation>,
}

impl ContentTypeField {
    /// Permitted entry targets of a single `Link` field, in declared order.
    pub fn link_targets(&self) -> Option<&[ContentTypeId]> {
        first_link_content_type(&self.validations)
    }
}

/// System metadata of a content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeSys {
    pub id: ContentTypeId,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// A named record type with an ordered field list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentType {
    pub sys: ContentTypeSys,
    /// Human-readable name; drives every derived identifier.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_field: Option<String>,
    /// Fields in declared order. Entries without a usable `id` are dropped.
    #[serde(default, deserialize_with = "valid_entries")]
    pub fields: Vec<ContentTypeField>,
}

impl ContentType {
    /// The stable identifier (`sys.id`).
    pub fn id(&self) -> &ContentTypeId {
        &self.sys.id
    }
}

/// One page (or the whole) of a content-type listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeCollection {
    #[serde(default, deserialize_with = "or_default")]
    pub total: u64,
    #[serde(default, deserialize_with = "or_default")]
    pub skip: u64,
    #[serde(default, deserialize_with = "or_default")]
    pub limit: u64,
    /// Content types in listing order. Entries missing `sys.id` or `name`
    /// are dropped.
    #[serde(deserialize_with = "valid_entries")]
    pub items: Vec<ContentType>,
}

impl ContentTypeCollection {
    /// Decode a collection from JSON.
    ///
    /// Accepts either the API's collection envelope (`{"items": [...]}`) or a
    /// bare array of content types, as produced by most export tools.
    pub fn from_json(text: &str) -> Result<Self, ModelError> {
        let document: Value = serde_json::from_str(text)?;
        match document {
            document @ Value::Object(_) => Ok(Self::deserialize(document)?),
            document @ Value::Array(_) => {
                let items: Vec<ContentType> = valid_entries(document)?;
                Ok(Self {
                    total: items.len() as u64,
                    skip: 0,
                    limit: items.len() as u64,
                    items,
                })
            }
            other => Err(ModelError::NotACollection {
                found: json_kind(&other),
            }),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Decode `T`, falling back to its default when the value has the wrong shape.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Decode the entries of a list that decode, dropping the rest.
///
/// `null` or a non-list value is an empty list.
fn valid_entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let entries = match Value::deserialize(deserializer)? {
        Value::Array(entries) => entries,
        _ => return Ok(Vec::new()),
    };
    Ok(entries
        .into_iter()
        .filter_map(|entry| T::deserialize(entry).ok())
        .collect())
}

fn first_link_content_type(validations: &[FieldValidation]) -> Option<&[ContentTypeId]> {
    validations
        .iter()
        .find_map(|v| v.link_content_type.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOG_POST: &str = r#"{
        "sys": { "id": "blogPost", "type": "ContentType" },
        "name": "Blog Post",
        "displayField": "title",
        "fields": [
            { "id": "title", "name": "Title", "type": "Symbol", "required": true, "validations": [] },
            { "id": "hero", "name": "Hero", "type": "Link", "linkType": "Asset" },
            {
                "id": "author", "name": "Author", "type": "Link", "linkType": "Entry",
                "validations": [{ "unique": true }, { "linkContentType": ["person"] }]
            },
            {
                "id": "related", "name": "Related", "type": "Array",
                "items": {
                    "type": "Link", "linkType": "Entry",
                    "validations": [{ "linkContentType": ["blogPost", "page"] }]
                }
            },
            { "id": "location", "name": "Location", "type": "Location" },
            { "id": "mystery", "name": "Mystery", "type": "Hologram" }
        ]
    }"#;

    #[test]
    fn decodes_realistic_content_type() {
        let ct: ContentType = serde_json::from_str(BLOG_POST).unwrap();
        assert_eq!(ct.id().as_str(), "blogPost");
        assert_eq!(ct.name, "Blog Post");
        assert_eq!(ct.fields.len(), 6);
        assert!(ct.fields[0].required);
        assert!(!ct.fields[1].required);
        assert_eq!(ct.fields[1].link_type, Some(LinkType::Asset));
        assert_eq!(ct.fields[4].field_type, FieldType::Location);
    }

    #[test]
    fn unknown_field_kind_decodes_to_other() {
        let ct: ContentType = serde_json::from_str(BLOG_POST).unwrap();
        assert_eq!(ct.fields[5].field_type, FieldType::Other);
    }

    #[test]
    fn missing_field_kind_decodes_to_other() {
        let field: ContentTypeField = serde_json::from_str(r#"{ "id": "x" }"#).unwrap();
        assert_eq!(field.field_type, FieldType::Other);
        assert!(!field.required);
        assert!(field.items.is_none());
    }

    #[test]
    fn single_link_targets_come_from_own_validations() {
        let ct: ContentType = serde_json::from_str(BLOG_POST).unwrap();
        let targets = ct.fields[2].link_targets().unwrap();
        assert_eq!(targets, &[ContentTypeId::new("person")]);
    }

    #[test]
    fn array_link_targets_come_from_items() {
        let ct: ContentType = serde_json::from_str(BLOG_POST).unwrap();
        let items = ct.fields[3].items.as_ref().unwrap();
        assert_eq!(items.field_type, Some(FieldType::Link));
        assert_eq!(
            items.link_targets().unwrap(),
            &[ContentTypeId::new("blogPost"), ContentTypeId::new("page")]
        );
        assert!(ct.fields[3].link_targets().is_none());
    }

    #[test]
    fn collection_envelope_and_bare_array_both_decode() {
        let envelope = format!(r#"{{ "total": 1, "skip": 0, "limit": 100, "items": [{BLOG_POST}] }}"#);
        let a = ContentTypeCollection::from_json(&envelope).unwrap();
        assert_eq!(a.total, 1);
        assert_eq!(a.items.len(), 1);

        let bare = format!("[{BLOG_POST}]");
        let b = ContentTypeCollection::from_json(&bare).unwrap();
        assert_eq!(b.items, a.items);
        assert_eq!(b.total, 1);
    }

    #[test]
    fn non_collection_input_is_rejected() {
        assert!(matches!(
            ContentTypeCollection::from_json("not json"),
            Err(ModelError::InvalidCollection(_))
        ));
        let err = ContentTypeCollection::from_json("42").unwrap_err();
        assert!(matches!(err, ModelError::NotACollection { found: "a number" }));
        assert!(err.to_string().ends_with("found a number"));
    }

    #[test]
    fn envelope_errors_name_the_offending_key() {
        let err = ContentTypeCollection::from_json(r#"{ "total": 1 }"#).unwrap_err();
        assert!(err.to_string().contains("missing field `items`"), "{err}");
    }

    #[test]
    fn envelope_items_of_the_wrong_shape_are_empty() {
        let collection = ContentTypeCollection::from_json(r#"{ "items": 5 }"#).unwrap();
        assert!(collection.items.is_empty());
    }

    fn with_odd_field(odd: &str) -> ContentTypeCollection {
        let text = format!(
            r#"{{ "items": [{{
                "sys": {{ "id": "page" }},
                "name": "Page",
                "fields": [
                    {odd},
                    {{ "id": "title", "type": "Symbol", "required": true }}
                ]
            }}] }}"#
        );
        ContentTypeCollection::from_json(&text).unwrap()
    }

    fn title_survives(collection: &ContentTypeCollection) -> &ContentTypeField {
        assert_eq!(collection.items.len(), 1);
        let fields = &collection.items[0].fields;
        let title = fields.iter().find(|f| f.id == "title").unwrap();
        assert_eq!(title.field_type, FieldType::Symbol);
        assert!(title.required);
        &fields[0]
    }

    #[test]
    fn element_kind_of_the_wrong_shape_is_unknown() {
        let collection = with_odd_field(r#"{ "id": "tags", "type": "Array", "items": { "type": 5 } }"#);
        let tags = title_survives(&collection);
        assert_eq!(tags.field_type, FieldType::Array);
        assert_eq!(tags.items.as_ref().unwrap().field_type, None);
    }

    #[test]
    fn null_validations_are_empty() {
        let collection = with_odd_field(r#"{ "id": "body", "type": "Text", "validations": null }"#);
        let body = title_survives(&collection);
        assert!(body.validations.is_empty());
    }

    #[test]
    fn scalar_link_content_type_means_no_targets() {
        let collection = with_odd_field(
            r#"{ "id": "author", "type": "Link", "linkType": "Entry",
                 "validations": [{ "linkContentType": "person" }] }"#,
        );
        let author = title_survives(&collection);
        assert_eq!(author.link_type, Some(LinkType::Entry));
        assert!(author.link_targets().is_none());
    }

    #[test]
    fn null_required_is_optional() {
        let collection = with_odd_field(r#"{ "id": "summary", "type": "Text", "required": null }"#);
        let summary = title_survives(&collection);
        assert_eq!(summary.field_type, FieldType::Text);
        assert!(!summary.required);
    }

    #[test]
    fn field_without_id_is_dropped() {
        let collection = with_odd_field(r#"{ "name": "Nameless", "type": "Symbol" }"#);
        let only = title_survives(&collection);
        assert_eq!(only.id, "title");
        assert_eq!(collection.items[0].fields.len(), 1);
    }

    #[test]
    fn content_type_without_sys_is_dropped() {
        let text = format!(r#"[{{ "name": "Orphan", "fields": [] }}, {BLOG_POST}]"#);
        let collection = ContentTypeCollection::from_json(&text).unwrap();
        assert_eq!(collection.items.len(), 1);
        assert_eq!(collection.items[0].id().as_str(), "blogPost");
        assert_eq!(collection.total, 1);
    }
}
