//! # Reference Resolution
//!
//! Resolves link fields (and link elements of arrays) into schema
//! expressions.
//!
//! - Asset links resolve to [`SchemaExpr::Asset`], the name of the shared
//!   asset shape. The shape itself is declared once in the preamble.
//! - Entry links resolve to deferred references through the [`NameTable`].
//!   One permitted target gives a single [`SchemaExpr::Lazy`]; several give
//!   a [`SchemaExpr::Union`] of them in declared order, duplicates kept.
//!
//! References are always deferred. Records may point at themselves or at
//! each other, and a record may be emitted before the record it points at.

use ctfz_core::{ContentTypeField, ContentTypeId, FieldItems, LinkType};

use crate::expr::{entry_link, SchemaExpr};
use crate::table::NameTable;

/// The link-relevant parts of a field or of an array's element descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkDescriptor<'a> {
    pub link_type: Option<LinkType>,
    pub targets: Option<&'a [ContentTypeId]>,
}

impl<'a> LinkDescriptor<'a> {
    /// Descriptor of a single `Link` field.
    pub fn of_field(field: &'a ContentTypeField) -> Self {
        Self {
            link_type: field.link_type,
            targets: field.link_targets(),
        }
    }

    /// Descriptor of the elements of an `Array` field.
    pub fn of_items(items: &'a FieldItems) -> Self {
        Self {
            link_type: items.link_type,
            targets: items.link_targets(),
        }
    }
}

/// Resolve a link, or `None` when it cannot be expressed.
///
/// Entry links with no permitted targets are unconstrained and therefore
/// unsupported. Targets missing from `names` (unknown, or excluded from this
/// run) are left out so the module never refers to an undeclared schema; if
/// that leaves nothing, the link is unsupported as well.
pub fn resolve_reference(link: &LinkDescriptor<'_>, names: &NameTable) -> Option<SchemaExpr> {
    match link.link_type? {
        LinkType::Asset => Some(SchemaExpr::Asset),
        LinkType::Entry => resolve_entry_targets(link.targets?, names),
        LinkType::Other => None,
    }
}

fn resolve_entry_targets(targets: &[ContentTypeId], names: &NameTable) -> Option<SchemaExpr> {
    let mut deferred: Vec<SchemaExpr> = targets
        .iter()
        .filter_map(|id| names.schema_name(id))
        .map(SchemaExpr::lazy)
        .collect();

    let target = match deferred.len() {
        0 => return None,
        1 => deferred.pop()?,
        _ => SchemaExpr::Union(deferred),
    };
    Some(entry_link(target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::content_type;
    use ctfz_core::ContentType;

    fn record(id: &str, name: &str) -> ContentType {
        content_type(id, name, Vec::new())
    }

    fn table() -> NameTable {
        let records = [
            record("blogPost", "Blog Post"),
            record("person", "Person"),
            record("page", "Landing Page"),
        ];
        NameTable::build(&records, "CF", &[]).unwrap()
    }

    fn ids(raw: &[&str]) -> Vec<ContentTypeId> {
        raw.iter().map(|s| ContentTypeId::new(*s)).collect()
    }

    fn entry(targets: &[ContentTypeId]) -> LinkDescriptor<'_> {
        LinkDescriptor {
            link_type: Some(LinkType::Entry),
            targets: Some(targets),
        }
    }

    #[test]
    fn asset_link_is_the_shared_shape() {
        let link = LinkDescriptor {
            link_type: Some(LinkType::Asset),
            targets: None,
        };
        assert_eq!(resolve_reference(&link, &table()), Some(SchemaExpr::Asset));
    }

    #[test]
    fn single_target_is_one_deferred_reference() {
        let targets = ids(&["person"]);
        assert_eq!(
            resolve_reference(&entry(&targets), &table()),
            Some(entry_link(SchemaExpr::lazy("CFPersonDecoder")))
        );
    }

    #[test]
    fn target_name_comes_from_display_name_not_id() {
        let targets = ids(&["page"]);
        assert_eq!(
            resolve_reference(&entry(&targets), &table()),
            Some(entry_link(SchemaExpr::lazy("CFLandingPageDecoder")))
        );
    }

    #[test]
    fn several_targets_are_an_ordered_union_with_duplicates() {
        let targets = ids(&["person", "blogPost", "person"]);
        assert_eq!(
            resolve_reference(&entry(&targets), &table()),
            Some(entry_link(SchemaExpr::Union(vec![
                SchemaExpr::lazy("CFPersonDecoder"),
                SchemaExpr::lazy("CFBlogPostDecoder"),
                SchemaExpr::lazy("CFPersonDecoder"),
            ])))
        );
    }

    #[test]
    fn unconstrained_entry_link_is_unsupported() {
        let empty = ids(&[]);
        assert_eq!(resolve_reference(&entry(&empty), &table()), None);

        let missing = LinkDescriptor {
            link_type: Some(LinkType::Entry),
            targets: None,
        };
        assert_eq!(resolve_reference(&missing, &table()), None);
    }

    #[test]
    fn unknown_targets_are_left_out() {
        let targets = ids(&["ghost", "person"]);
        assert_eq!(
            resolve_reference(&entry(&targets), &table()),
            Some(entry_link(SchemaExpr::lazy("CFPersonDecoder")))
        );

        let only_ghosts = ids(&["ghost"]);
        assert_eq!(resolve_reference(&entry(&only_ghosts), &table()), None);
    }

    #[test]
    fn missing_or_unknown_link_type_is_unsupported() {
        let targets = ids(&["person"]);
        for link_type in [None, Some(LinkType::Other)] {
            let link = LinkDescriptor {
                link_type,
                targets: Some(&targets),
            };
            assert_eq!(resolve_reference(&link, &table()), None);
        }
    }
}
