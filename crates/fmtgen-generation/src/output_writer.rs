//! Output writer for the generated header
//!
//! Writes go to a temporary sibling file which is then renamed over the
//! destination, so a failed run never leaves a half-written header behind.
//! Existing output is replaced without a backup.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use uuid::Uuid;

use crate::{
    error::{GenerationError, Result},
    models::OutputDocument,
};

/// Configuration for output writing
#[derive(Debug, Clone, Default)]
pub struct OutputWriterConfig {
    /// Whether to run in dry-run mode (preview only)
    pub dry_run: bool,
}

/// Result of writing the generated header
#[derive(Debug, Clone)]
pub struct WriteResult {
    /// Destination path
    pub path: PathBuf,
    /// Whether the file was actually written
    pub written: bool,
    /// Whether the destination existed and was replaced
    pub replaced: bool,
    /// Bytes in the document
    pub bytes: usize,
    /// Whether this was a dry-run
    pub dry_run: bool,
}

/// Writes generated headers to disk
pub struct OutputWriter {
    config: OutputWriterConfig,
}

impl OutputWriter {
    /// Create a new output writer with default configuration
    pub fn new() -> Self {
        Self {
            config: OutputWriterConfig::default(),
        }
    }

    /// Create a new output writer with custom configuration
    pub fn with_config(config: OutputWriterConfig) -> Self {
        Self { config }
    }

    /// Write the document to `path`, creating parent directories
    ///
    /// In dry-run mode nothing on disk is touched.
    pub fn write(&self, document: &OutputDocument, path: &Path) -> Result<WriteResult> {
        let replaced = path.exists();

        if self.config.dry_run {
            return Ok(WriteResult {
                path: path.to_path_buf(),
                written: false,
                replaced: false,
                bytes: document.text.len(),
                dry_run: true,
            });
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| write_failure(path, e))?;
                tracing::debug!(dir = %parent.display(), "Created output directory");
            }
        }

        self.write_atomic(path, &document.text)?;

        Ok(WriteResult {
            path: path.to_path_buf(),
            written: true,
            replaced,
            bytes: document.text.len(),
            dry_run: false,
        })
    }

    /// Whether `path` already holds exactly this document
    ///
    /// Compared byte for byte; a missing or undecodable file is simply stale.
    pub fn is_current(&self, document: &OutputDocument, path: &Path) -> Result<bool> {
        match fs::read(path) {
            Ok(existing) => Ok(existing == document.text.as_bytes()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(GenerationError::SourceUnreadable {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    /// Write to a temporary sibling and rename it into place
    fn write_atomic(&self, path: &Path, content: &str) -> Result<()> {
        let temp_path = self.temp_path(path);

        if let Err(e) = fs::write(&temp_path, content) {
            let _ = fs::remove_file(&temp_path);
            return Err(write_failure(path, e));
        }

        if let Err(e) = fs::rename(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(write_failure(path, e));
        }

        Ok(())
    }

    /// Generates a temporary file path next to `path`
    fn temp_path(&self, path: &Path) -> PathBuf {
        let file_name = format!(
            ".tmp-{}-{}",
            Uuid::new_v4(),
            path.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("header")
        );
        path.with_file_name(file_name)
    }

    /// Get a summary of a write result
    pub fn summarize_result(&self, result: &WriteResult) -> String {
        format!(
            "{}: {} bytes{}{}",
            result.path.display(),
            result.bytes,
            if result.replaced { " (replaced)" } else { "" },
            if result.dry_run { " (dry-run)" } else { "" }
        )
    }
}

impl Default for OutputWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn write_failure(path: &Path, source: io::Error) -> GenerationError {
    GenerationError::WriteFailure {
        path: path.to_path_buf(),
        source,
    }
}
