//! # Name Table
//!
//! Identifier triples of every record selected for one generation run,
//! keyed by stable identifier. Built once before emission so that any record
//! can refer to any other regardless of emission order, and checked so that
//! no two published names coincide.
//!
//! A record whose display name yields no usable identifier (no word
//! characters, a leading digit, or a name the module declares itself) is
//! left out with a warning. References to it then resolve like references
//! to an unknown content type and drop out of the output.

use std::collections::{HashMap, HashSet};
use std::fmt;

use ctfz_core::{ContentType, ContentTypeId};

use crate::error::CodegenError;
use crate::naming::{is_valid_identifier, Variant, VariantNames};

/// Published names of the selected records.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    names: HashMap<ContentTypeId, VariantNames>,
}

/// Why a record cannot be declared.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Unusable {
    NoWordCharacters,
    Invalid(String),
    Reserved(String),
}

impl fmt::Display for Unusable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWordCharacters => f.write_str("display name has no word characters"),
            Self::Invalid(identifier) => write!(f, "'{identifier}' is not a valid identifier"),
            Self::Reserved(identifier) => write!(f, "'{identifier}' is declared by the module itself"),
        }
    }
}

fn check_usable(derived: &VariantNames, reserved: &[&str]) -> Result<(), Unusable> {
    if derived.base.is_empty() {
        return Err(Unusable::NoWordCharacters);
    }
    for variant in Variant::ALL {
        let identifier = derived.get(variant);
        if !is_valid_identifier(identifier) {
            return Err(Unusable::Invalid(identifier.to_string()));
        }
        if reserved.contains(&identifier) {
            return Err(Unusable::Reserved(identifier.to_string()));
        }
    }
    Ok(())
}

impl NameTable {
    /// Derive and validate the names of `records` under `prefix`.
    ///
    /// `reserved` lists names the module declares on its own (preamble
    /// helpers, the dispatch table). Records that cannot be declared are
    /// skipped; two records publishing the same name fail the build.
    pub fn build<'a>(
        records: impl IntoIterator<Item = &'a ContentType>,
        prefix: &str,
        reserved: &[&str],
    ) -> Result<Self, CodegenError> {
        let mut names: HashMap<ContentTypeId, VariantNames> = HashMap::new();
        let mut seen: HashSet<&ContentTypeId> = HashSet::new();
        let mut owners: HashMap<String, ContentTypeId> = HashMap::new();

        for record in records {
            let id = record.id();
            if !seen.insert(id) {
                return Err(CodegenError::DuplicateContentType {
                    content_type: id.clone(),
                });
            }

            let derived = VariantNames::derive(&record.name, prefix);
            if let Err(reason) = check_usable(&derived, reserved) {
                tracing::warn!(
                    content_type = %id,
                    "Skipping content type '{}': {reason}",
                    record.name
                );
                continue;
            }

            for variant in Variant::ALL {
                let identifier = derived.get(variant);
                if let Some(first) = owners.insert(identifier.to_string(), id.clone()) {
                    return Err(CodegenError::IdentifierCollision {
                        identifier: identifier.to_string(),
                        first,
                        second: id.clone(),
                    });
                }
            }

            names.insert(id.clone(), derived);
        }

        Ok(Self { names })
    }

    /// Names of the record with stable identifier `id`, if it was selected.
    pub fn get(&self, id: &ContentTypeId) -> Option<&VariantNames> {
        self.names.get(id)
    }

    /// Schema-variant name of the record `id`, if it was selected.
    pub fn schema_name(&self, id: &ContentTypeId) -> Option<&str> {
        self.get(id).map(|names| names.schema.as_str())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
