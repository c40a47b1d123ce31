//! # zod / TypeScript Dialect
//!
//! Renders modules for the `zod` runtime validation library:
//!
//! ```text
//! const CFBlogPostDecoder = z.object({
//!   title: z.string(),
//!   author: z.object({
//!     fields: z.lazy(() => CFPersonDecoder),
//!   }).optional(),
//! });
//!
//! type BlogPost = z.infer<typeof CFBlogPostDecoder>;
//! type CFTypeBlogPost = EntrySkeletonType<BlogPost, 'blogPost'>;
//! ```
//!
//! Deferred references render as `z.lazy(() => Name)`, which reads `Name`
//! when a value is parsed rather than when the schema is declared.

use crate::expr::{asset_shape, SchemaExpr};
use crate::naming::is_valid_identifier;
use crate::record::RecordFragment;

use super::Dialect;

/// Name of the shared asset shape declared in the preamble.
pub const ASSET_SHAPE: &str = "CFAsset";

/// Name of the date helper declared in the preamble.
pub const DATE_HELPER: &str = "date";

/// Name of the exported dispatch table.
pub const DISPATCH_TABLE: &str = "ParserMap";

const INDENT: &str = "  ";

const RESERVED: &[&str] = &["z", "EntrySkeletonType", ASSET_SHAPE, DATE_HELPER, DISPATCH_TABLE];

/// The zod dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zod;

impl Dialect for Zod {
    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn reserved_identifiers(&self) -> &'static [&'static str] {
        RESERVED
    }

    fn render_expr(&self, expr: &SchemaExpr, depth: usize) -> String {
        match expr {
            SchemaExpr::String => "z.string()".to_string(),
            SchemaExpr::Number => "z.number()".to_string(),
            SchemaExpr::Date => format!("{DATE_HELPER}()"),
            SchemaExpr::Boolean => "z.boolean()".to_string(),
            SchemaExpr::Asset => ASSET_SHAPE.to_string(),
            SchemaExpr::Array(inner) => format!("z.array({})", self.render_expr(inner, depth)),
            SchemaExpr::Optional(inner) => format!("{}.optional()", self.render_expr(inner, depth)),
            SchemaExpr::Lazy(name) => format!("z.lazy(() => {name})"),
            SchemaExpr::Union(members) => {
                let mut out = String::from("z.union([\n");
                for member in members {
                    push_indent(&mut out, depth + 1);
                    out.push_str(&self.render_expr(member, depth + 1));
                    out.push_str(",\n");
                }
                push_indent(&mut out, depth);
                out.push_str("])");
                out
            }
            SchemaExpr::Object(fields) if fields.is_empty() => "z.object({})".to_string(),
            SchemaExpr::Object(fields) => {
                let mut out = String::from("z.object({\n");
                for field in fields {
                    push_indent(&mut out, depth + 1);
                    out.push_str(&property_key(&field.key));
                    out.push_str(": ");
                    out.push_str(&self.render_expr(&field.expr, depth + 1));
                    out.push_str(",\n");
                }
                push_indent(&mut out, depth);
                out.push_str("})");
                out
            }
        }
    }

    fn preamble(&self) -> String {
        format!(
            "/* eslint-disable */\n\
             // @ts-nocheck TS2454\n\
             \n\
             // This file is auto-generated\n\
             import {{ z }} from \"zod\";\n\
             import type {{ EntrySkeletonType }} from \"contentful\";\n\
             \n\
             const {ASSET_SHAPE} = {};\n\
             \n\
             const {DATE_HELPER} = () => z.string();\n\
             \n",
            self.render_expr(&asset_shape(), 0)
        )
    }

    fn record(&self, fragment: &RecordFragment) -> String {
        let names = &fragment.names;
        format!(
            "const {schema} = {body};\n\
             \n\
             type {type_name} = z.infer<typeof {schema}>;\n\
             type {skeleton} = EntrySkeletonType<{type_name}, {id}>;\n\
             \n",
            schema = names.schema,
            body = self.render_expr(&fragment.schema, 0),
            type_name = names.type_name,
            skeleton = names.skeleton,
            id = string_literal(fragment.content_type.as_str()),
        )
    }

    fn dispatch_table(&self, fragments: &[RecordFragment]) -> String {
        let mut out =
            format!("export const {DISPATCH_TABLE}: Record<string, z.ZodSchema<unknown>> = {{\n");
        for fragment in fragments {
            out.push_str(INDENT);
            out.push_str(&string_literal(fragment.content_type.as_str()));
            out.push_str(": ");
            out.push_str(&fragment.names.schema);
            out.push_str(",\n");
        }
        out.push_str("};\n");
        out
    }

    fn exports(&self, fragments: &[RecordFragment]) -> String {
        let values = fragments.iter().map(|f| f.names.schema.as_str());
        let types = fragments
            .iter()
            .flat_map(|f| [f.names.type_name.as_str(), f.names.skeleton.as_str()]);

        let mut out = String::from("\n");
        out.push_str(&export_block("export", values));
        out.push_str(&export_block("export type", types));
        out
    }
}

fn export_block<'a>(keyword: &str, names: impl Iterator<Item = &'a str>) -> String {
    let mut out = format!("{keyword} {{\n");
    for name in names {
        out.push_str(INDENT);
        out.push_str(name);
        out.push_str(",\n");
    }
    out.push_str("};\n");
    out
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

/// Object-literal key for a field id.
///
/// `__proto__` as a plain or quoted key sets the prototype of the literal
/// instead of adding a property; only the computed form adds a property.
fn property_key(key: &str) -> String {
    if key == "__proto__" {
        format!("[{}]", string_literal(key))
    } else if is_valid_identifier(key) {
        key.to_string()
    } else {
        string_literal(key)
    }
}

/// Single-quoted TypeScript string literal.
fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}
