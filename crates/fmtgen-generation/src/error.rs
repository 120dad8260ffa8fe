//! Error types for formatter generation

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the generation pipeline
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Errors that can occur while generating formatter specializations
///
/// None of these are retried; each is surfaced once to the caller.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Input header does not exist
    #[error("Source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Input header exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    SourceUnreadable {
        /// Path of the input header
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Input header contains no recognized operator<< overloads
    #[error("No operator<< overloads found in {}", .0.display())]
    NoMatchesFound(PathBuf),

    /// Output could not be created or written
    #[error("Write failed for {}: {source}", path.display())]
    WriteFailure {
        /// Destination that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Existing output differs from what would be generated
    #[error("Generated header is out of date: {}", .0.display())]
    OutOfDate(PathBuf),

    /// Formatter template failed to register or render
    #[error("Template error: {0}")]
    Template(String),

    /// Configuration values failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration sources could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl GenerationError {
    /// Whether this condition should be reported as a warning rather than an error
    pub fn is_warning(&self) -> bool {
        matches!(self, GenerationError::NoMatchesFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_matches_is_warning() {
        let err = GenerationError::NoMatchesFound(PathBuf::from("a.h"));
        assert!(err.is_warning());
        assert!(err.to_string().contains("a.h"));
    }

    #[test]
    fn test_source_not_found_is_error() {
        let err = GenerationError::SourceNotFound(PathBuf::from("missing.h"));
        assert!(!err.is_warning());
        assert_eq!(err.to_string(), "Source not found: missing.h");
    }

    #[test]
    fn test_write_failure_message_includes_path() {
        let err = GenerationError::WriteFailure {
            path: PathBuf::from("out/gen.h"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = err.to_string();
        assert!(message.contains("out/gen.h"));
        assert!(message.contains("denied"));
    }
}
