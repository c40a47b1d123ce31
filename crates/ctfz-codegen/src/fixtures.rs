//! Builders for content-type values used across unit tests.

use ctfz_core::{
    ContentType, ContentTypeField, ContentTypeId, ContentTypeSys, FieldItems, FieldType,
    FieldValidation, LinkType,
};

pub(crate) fn content_type(id: &str, name: &str, fields: Vec<ContentTypeField>) -> ContentType {
    ContentType {
        sys: ContentTypeSys {
            id: ContentTypeId::new(id),
            kind: Some("ContentType".into()),
        },
        name: name.to_string(),
        description: None,
        display_field: None,
        fields,
    }
}

pub(crate) fn field(id: &str, field_type: FieldType) -> ContentTypeField {
    ContentTypeField {
        id: id.to_string(),
        name: id.to_string(),
        field_type,
        link_type: None,
        required: false,
        items: None,
        validations: Vec::new(),
    }
}

pub(crate) fn required(mut field: ContentTypeField) -> ContentTypeField {
    field.required = true;
    field
}

pub(crate) fn link_validation(targets: &[&str]) -> FieldValidation {
    FieldValidation {
        link_content_type: Some(targets.iter().map(|t| ContentTypeId::new(*t)).collect()),
    }
}

pub(crate) fn entry_ref(id: &str, targets: &[&str]) -> ContentTypeField {
    ContentTypeField {
        link_type: Some(LinkType::Entry),
        validations: vec![link_validation(targets)],
        ..field(id, FieldType::Link)
    }
}

pub(crate) fn asset_ref(id: &str) -> ContentTypeField {
    ContentTypeField {
        link_type: Some(LinkType::Asset),
        ..field(id, FieldType::Link)
    }
}

pub(crate) fn array_of(id: &str, items: FieldItems) -> ContentTypeField {
    ContentTypeField {
        items: Some(items),
        ..field(id, FieldType::Array)
    }
}

pub(crate) fn items(field_type: FieldType) -> FieldItems {
    FieldItems {
        field_type: Some(field_type),
        link_type: None,
        validations: Vec::new(),
    }
}

pub(crate) fn entry_items(targets: &[&str]) -> FieldItems {
    FieldItems {
        field_type: Some(FieldType::Link),
        link_type: Some(LinkType::Entry),
        validations: vec![link_validation(targets)],
    }
}

pub(crate) fn asset_items() -> FieldItems {
    FieldItems {
        field_type: Some(FieldType::Link),
        link_type: Some(LinkType::Asset),
        validations: Vec::new(),
    }
}
