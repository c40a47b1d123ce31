//! # Identifier Derivation
//!
//! Turns a content type's display name into a code-safe base identifier and
//! derives the three variant names every generated record is published
//! under:
//!
//! | Variant | Shape | Example (`"blog post"`, prefix `CF`) |
//! |---|---|---|
//! | [`Variant::Schema`] | `prefix + base + "Decoder"` | `CFBlogPostDecoder` |
//! | [`Variant::Type`] | `base` | `BlogPost` |
//! | [`Variant::Skeleton`] | `prefix + "Type" + base` | `CFTypeBlogPost` |
//!
//! All derivations are pure functions of `(display name, prefix)`.

/// Which of the three published names of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Runtime validator; the target of dispatch-table entries and deferred references.
    Schema,
    /// Static shape inferred from the schema.
    Type,
    /// Static shape paired with the record's stable identifier.
    Skeleton,
}

impl Variant {
    /// All variants, in declaration order.
    pub const ALL: [Variant; 3] = [Variant::Schema, Variant::Type, Variant::Skeleton];
}

/// Derive the base identifier from a display name.
///
/// The name is split on every run of non-word characters (anything other
/// than ASCII letters, digits and `_`), the first character of each segment
/// is upper-cased, and the segments are joined. Empty segments are skipped,
/// so a name without word characters yields an empty string.
pub fn base_identifier(display_name: &str) -> String {
    display_name
        .split(|c: char| !is_word_char(c))
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect()
}

/// Derive one variant name from a base identifier and prefix.
pub fn derive_variant(base: &str, prefix: &str, variant: Variant) -> String {
    match variant {
        Variant::Schema => format!("{prefix}{base}Decoder"),
        Variant::Type => base.to_string(),
        Variant::Skeleton => format!("{prefix}Type{base}"),
    }
}

/// Whether `name` can be used as a declaration name in the generated module.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| is_word_char(c) || c == '$')
        }
        _ => false,
    }
}

/// The identifier triple of one record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariantNames {
    pub base: String,
    pub schema: String,
    pub type_name: String,
    pub skeleton: String,
}

impl VariantNames {
    /// Derive all three names for a display name under `prefix`.
    pub fn derive(display_name: &str, prefix: &str) -> Self {
        let base = base_identifier(display_name);
        Self {
            schema: derive_variant(&base, prefix, Variant::Schema),
            type_name: derive_variant(&base, prefix, Variant::Type),
            skeleton: derive_variant(&base, prefix, Variant::Skeleton),
            base,
        }
    }

    /// The name published for `variant`.
    pub fn get(&self, variant: Variant) -> &str {
        match variant {
            Variant::Schema => &self.schema,
            Variant::Type => &self.type_name,
            Variant::Skeleton => &self.skeleton,
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(segment.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}
