//! Data models passed between generation stages

use std::{
    fmt,
    path::{Path, PathBuf},
};

/// Raw content of the input header, scoped to one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    path: PathBuf,
    content: String,
}

impl SourceText {
    /// Wrap already-loaded header content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Path the content was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full header text
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Identifier of an enumeration type captured from an overload declaration
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EnumTypeName(String);

impl EnumTypeName {
    /// Create a name from a captured identifier
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnumTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EnumTypeName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Sorted, duplicate-free enum names
///
/// Only [`crate::canonicalizer::canonicalize`] builds one, so the ordering
/// invariant holds for every instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalEnumList {
    names: Vec<EnumTypeName>,
}

impl CanonicalEnumList {
    pub(crate) fn from_sorted(names: Vec<EnumTypeName>) -> Self {
        debug_assert!(names.windows(2).all(|w| w[0] < w[1]));
        Self { names }
    }

    /// Number of distinct names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no names were found
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate in canonical order
    pub fn iter(&self) -> std::slice::Iter<'_, EnumTypeName> {
        self.names.iter()
    }

    /// Names in canonical order
    pub fn as_slice(&self) -> &[EnumTypeName] {
        &self.names
    }
}

impl<'a> IntoIterator for &'a CanonicalEnumList {
    type Item = &'a EnumTypeName;
    type IntoIter = std::slice::Iter<'a, EnumTypeName>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

/// Rendered formatter specialization for one enum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterFragment {
    /// Enum the fragment specializes
    pub enum_name: EnumTypeName,
    /// Rendered C++ text
    pub text: String,
}

/// Complete generated header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    /// Full header text
    pub text: String,
    /// Number of formatter specializations in the document
    pub formatter_count: usize,
}

/// What a generation run did with the output path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// Document written to the output path
    Written,
    /// Check mode found the output already current
    Unchanged,
    /// Rendered only, nothing touched on disk
    DryRun,
}

/// Summary of a successful generation run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Header that was scanned
    pub input_path: PathBuf,
    /// Destination of the generated header
    pub output_path: PathBuf,
    /// Enums that received a formatter, in emitted order
    pub enum_names: Vec<EnumTypeName>,
    /// Number of formatters generated
    pub formatter_count: usize,
    /// What happened to the output path
    pub outcome: GenerationOutcome,
}

impl GenerationReport {
    /// One-line summary suitable for terminal output
    pub fn summary(&self) -> String {
        match self.outcome {
            GenerationOutcome::Written => format!(
                "Generated {} formatters in '{}'",
                self.formatter_count,
                self.output_path.display()
            ),
            GenerationOutcome::Unchanged => format!(
                "'{}' is up to date ({} formatters)",
                self.output_path.display(),
                self.formatter_count
            ),
            GenerationOutcome::DryRun => format!(
                "Would generate {} formatters in '{}' (dry-run)",
                self.formatter_count,
                self.output_path.display()
            ),
        }
    }
}
