//! Extracts enum type names from stream-insertion overload declarations
//!
//! This is a single regular expression run over the whole header, not a C++
//! parser. It recognizes the shape emitted by the WebGPU print header:
//!
//! ```text
//! std::basic_ostream<CharT, Traits>& operator<<(std::basic_ostream<CharT, Traits>& o, Name value) {
//! ```
//!
//! Names are captured without namespace information, so two enums sharing a
//! short name in different namespaces are indistinguishable here.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::{EnumTypeName, SourceText};

const OVERLOAD_PATTERN: &str = r"std::basic_ostream<CharT, Traits>&\s+operator<<\s*\(\s*std::basic_ostream<CharT, Traits>&\s+o,\s+(\w+)\s+value\s*\)\s*\{";

/// Get or create the overload regex
fn overload_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(OVERLOAD_PATTERN).expect("Invalid regex"))
}

/// Scan the header for overloads and return each captured type name
///
/// Names come back in match order with duplicates kept; an empty vector
/// means nothing matched.
pub fn scan_overloads(source: &SourceText) -> Vec<EnumTypeName> {
    let names: Vec<EnumTypeName> = overload_regex()
        .captures_iter(source.content())
        .filter_map(|caps| caps.get(1))
        .map(|m| EnumTypeName::new(m.as_str()))
        .collect();

    tracing::debug!(
        path = %source.path().display(),
        matches = names.len(),
        "Scanned for operator<< overloads"
    );
    names
}
