//! Loads the input header into memory
//!
//! The header must be UTF-8. A file with any other encoding, even in a
//! comment, is rejected as [`GenerationError::SourceUnreadable`] rather than
//! scanned partially.

use std::{fs, io, path::Path};

use crate::{
    error::{GenerationError, Result},
    models::SourceText,
};

/// Read the whole input header
///
/// A missing file is reported as [`GenerationError::SourceNotFound`] so the
/// caller can stop before any output is touched.
pub fn read_source(path: &Path) -> Result<SourceText> {
    match fs::read_to_string(path) {
        Ok(content) => {
            tracing::debug!(path = %path.display(), bytes = content.len(), "Read source header");
            Ok(SourceText::new(path, content))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(GenerationError::SourceNotFound(path.to_path_buf()))
        }
        Err(e) => Err(GenerationError::SourceUnreadable {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
