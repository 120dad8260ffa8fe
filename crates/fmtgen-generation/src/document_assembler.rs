//! Wraps rendered fragments in header boilerplate

use crate::models::{FormatterFragment, OutputDocument};

/// Assemble the generated header
///
/// Lines are joined with `\n` and the document has no trailing newline:
///
/// ```text
/// #pragma once
/// #include <...>          (one per include, in order)
///
/// namespace fmt {
/// <fragments>
/// } // namespace fmt
/// ```
pub fn assemble(includes: &[String], fragments: &[FormatterFragment]) -> OutputDocument {
    let mut lines = Vec::with_capacity(includes.len() + fragments.len() + 4);
    lines.push("#pragma once".to_string());
    lines.extend(includes.iter().map(|include| format!("#include <{}>", include)));
    lines.push(String::new());
    lines.push("namespace fmt {".to_string());
    lines.extend(fragments.iter().map(|fragment| fragment.text.clone()));
    lines.push("} // namespace fmt".to_string());

    OutputDocument {
        text: lines.join("\n"),
        formatter_count: fragments.len(),
    }
}
