//! Deduplicates and orders matched enum names

use std::collections::BTreeSet;

use crate::models::{CanonicalEnumList, EnumTypeName};

/// Collapse duplicates and sort lexicographically
///
/// Ordering is byte-wise on the identifier, so regenerating from the same
/// header always yields the same document regardless of declaration order.
pub fn canonicalize(names: impl IntoIterator<Item = EnumTypeName>) -> CanonicalEnumList {
    let unique: BTreeSet<EnumTypeName> = names.into_iter().collect();
    CanonicalEnumList::from_sorted(unique.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &CanonicalEnumList) -> Vec<&str> {
        list.iter().map(|n| n.as_str()).collect()
    }

    #[test]
    fn test_sorts_and_dedups() {
        let input = ["Shape", "Color", "Shape", "AdapterType", "Color"]
            .into_iter()
            .map(EnumTypeName::from);
        let list = canonicalize(input);
        assert_eq!(names(&list), vec!["AdapterType", "Color", "Shape"]);
    }

    #[test]
    fn test_uppercase_sorts_before_lowercase() {
        let list = canonicalize(["alpha", "Beta", "_gamma"].into_iter().map(EnumTypeName::from));
        assert_eq!(names(&list), vec!["Beta", "_gamma", "alpha"]);
    }

    #[test]
    fn test_empty_input() {
        let list = canonicalize(Vec::new());
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }
}
