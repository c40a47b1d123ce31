//! # Schema Expression Tree
//!
//! Resolution produces [`SchemaExpr`] values rather than text. Rendering to a
//! concrete validator syntax happens once, at assembly time, through a
//! [`Dialect`](crate::dialect::Dialect).

/// A schema expression in dialect-neutral form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaExpr {
    String,
    Number,
    /// Date leaf; an opaque helper that is not validated further.
    Date,
    Boolean,
    /// Named reference to the shared asset shape declared in the preamble.
    Asset,
    /// Array whose elements match the inner expression.
    Array(Box<SchemaExpr>),
    /// The inner expression, or absent.
    Optional(Box<SchemaExpr>),
    /// Deferred reference to a record's schema, read at the point of use.
    Lazy(String),
    /// Any of the members, in declared order.
    Union(Vec<SchemaExpr>),
    /// Object with the given properties, in declared order.
    Object(Vec<ObjectField>),
}

/// A property of an [`SchemaExpr::Object`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectField {
    pub key: String,
    pub expr: SchemaExpr,
}

impl ObjectField {
    pub fn new(key: impl Into<String>, expr: SchemaExpr) -> Self {
        Self {
            key: key.into(),
            expr,
        }
    }
}

impl SchemaExpr {
    pub fn array(inner: SchemaExpr) -> Self {
        Self::Array(Box::new(inner))
    }

    pub fn optional(inner: SchemaExpr) -> Self {
        Self::Optional(Box::new(inner))
    }

    pub fn lazy(schema_name: impl Into<String>) -> Self {
        Self::Lazy(schema_name.into())
    }

    /// Schema names this expression defers to, in order of appearance.
    pub fn deferred_targets(&self) -> Vec<&str> {
        let mut targets = Vec::new();
        self.collect_deferred(&mut targets);
        targets
    }

    fn collect_deferred<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Lazy(name) => out.push(name),
            Self::Array(inner) | Self::Optional(inner) => inner.collect_deferred(out),
            Self::Union(members) => members.iter().for_each(|m| m.collect_deferred(out)),
            Self::Object(fields) => fields.iter().for_each(|f| f.expr.collect_deferred(out)),
            Self::String | Self::Number | Self::Date | Self::Boolean | Self::Asset => {}
        }
    }
}

/// The shared asset shape: `{ fields: { file: { url: string } } }`.
pub fn asset_shape() -> SchemaExpr {
    SchemaExpr::Object(vec![ObjectField::new(
        "fields",
        SchemaExpr::Object(vec![ObjectField::new(
            "file",
            SchemaExpr::Object(vec![ObjectField::new("url", SchemaExpr::String)]),
        )]),
    )])
}

/// Wrap a deferred reference (or union of them) in the linked-entry envelope.
///
/// Linked entries arrive as objects whose `fields` property holds the target
/// record, so the deferred part sits one level down.
pub fn entry_link(target: SchemaExpr) -> SchemaExpr {
    SchemaExpr::Object(vec![ObjectField::new("fields", target)])
}
