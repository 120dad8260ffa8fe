//! Property-based tests for canonical enum ordering
//! **Property: Sort invariant and idempotent deduplication**

use std::collections::BTreeSet;

use fmtgen_generation::{
    canonicalize, scan_overloads, EnumTypeName, FormatterEmitter, SourceText,
};
use proptest::prelude::*;

/// Strategy for generating identifier-shaped enum names
fn enum_name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,12}"
}

fn overload(name: &str) -> String {
    format!(
        "template <typename CharT, typename Traits>\n\
         std::basic_ostream<CharT, Traits>& operator<<(std::basic_ostream<CharT, Traits>& o, {} value) {{\n    return o;\n}}\n",
        name
    )
}

proptest! {
    /// Property: canonical order equals the lexicographic order of the distinct names
    #[test]
    fn prop_canonical_order_is_sorted_distinct(
        names in prop::collection::vec(enum_name_strategy(), 0..40),
    ) {
        let list = canonicalize(names.iter().map(|n| EnumTypeName::new(n.as_str())));
        let actual: Vec<&str> = list.iter().map(|n| n.as_str()).collect();

        let mut expected: Vec<&str> = names.iter().map(|n| n.as_str()).collect();
        expected.sort();
        expected.dedup();

        prop_assert_eq!(actual, expected);
    }

    /// Property: a name matched N times yields exactly one formatter fragment
    #[test]
    fn prop_duplicate_matches_emit_once(
        name in enum_name_strategy(),
        repeats in 1usize..8,
        others in prop::collection::vec(enum_name_strategy(), 0..10),
    ) {
        let mut header = String::new();
        for _ in 0..repeats {
            header.push_str(&overload(&name));
        }
        for other in &others {
            header.push_str(&overload(other));
        }

        let source = SourceText::new("print.h", header);
        let list = canonicalize(scan_overloads(&source));
        let emitter = FormatterEmitter::new("wgpu").unwrap();
        let fragments = emitter.emit_all(&list).unwrap();

        let count = fragments.iter().filter(|f| f.enum_name.as_str() == name).count();
        prop_assert_eq!(count, 1);

        let distinct: BTreeSet<&str> = others
            .iter()
            .map(|s| s.as_str())
            .chain(std::iter::once(name.as_str()))
            .collect();
        prop_assert_eq!(fragments.len(), distinct.len());
    }

    /// Property: fragment order in the scan result does not depend on declaration order
    #[test]
    fn prop_order_independent_of_declaration_order(
        names in prop::collection::vec(enum_name_strategy(), 1..20)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
    ) {
        let (original, shuffled) = names;
        let header_a: String = original.iter().map(|n| overload(n)).collect();
        let header_b: String = shuffled.iter().map(|n| overload(n)).collect();

        let a = canonicalize(scan_overloads(&SourceText::new("a.h", header_a)));
        let b = canonicalize(scan_overloads(&SourceText::new("b.h", header_b)));

        prop_assert_eq!(a, b);
    }
}
