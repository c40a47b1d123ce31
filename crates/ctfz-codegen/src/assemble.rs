//! # Module Assembly
//!
//! Concatenates, in order: the dialect's preamble, one block of declarations
//! per record fragment, the dispatch table, and the export blocks. Fragment
//! order is the order of the input collection.

use crate::dialect::Dialect;
use crate::record::RecordFragment;

/// Assemble the full module text for `fragments`.
pub fn assemble<D: Dialect + ?Sized>(dialect: &D, fragments: &[RecordFragment]) -> String {
    let mut out = dialect.preamble();
    for fragment in fragments {
        out.push_str(&dialect.record(fragment));
    }
    out.push_str(&dialect.dispatch_table(fragments));
    out.push_str(&dialect.exports(fragments));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::SchemaExpr;
    use crate::naming::VariantNames;
    use ctfz_core::ContentTypeId;

    /// Renders each piece as a single tagged line, to check ordering only.
    struct Outline;

    impl Dialect for Outline {
        fn file_extension(&self) -> &'static str {
            "txt"
        }

        fn reserved_identifiers(&self) -> &'static [&'static str] {
            &[]
        }

        fn render_expr(&self, _expr: &SchemaExpr, _depth: usize) -> String {
            String::new()
        }

        fn preamble(&self) -> String {
            "preamble\n".into()
        }

        fn record(&self, fragment: &RecordFragment) -> String {
            format!("record {}\n", fragment.content_type)
        }

        fn dispatch_table(&self, fragments: &[RecordFragment]) -> String {
            let ids: Vec<_> = fragments.iter().map(|f| f.content_type.as_str()).collect();
            format!("table {}\n", ids.join(","))
        }

        fn exports(&self, fragments: &[RecordFragment]) -> String {
            format!("exports {}\n", fragments.len())
        }
    }

    fn fragment(id: &str) -> RecordFragment {
        RecordFragment {
            content_type: ContentTypeId::new(id),
            display_name: id.to_string(),
            names: VariantNames::derive(id, "CF"),
            schema: SchemaExpr::Object(Vec::new()),
        }
    }

    #[test]
    fn sections_in_fixed_order() {
        let fragments = [fragment("b"), fragment("a"), fragment("c")];
        assert_eq!(
            assemble(&Outline, &fragments),
            "preamble\nrecord b\nrecord a\nrecord c\ntable b,a,c\nexports 3\n"
        );
    }

    #[test]
    fn works_through_a_trait_object() {
        let dialect: &dyn Dialect = &Outline;
        assert_eq!(
            assemble(dialect, &[]),
            "preamble\ntable \nexports 0\n"
        );
    }
}
