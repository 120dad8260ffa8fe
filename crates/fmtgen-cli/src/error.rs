// CLI error types and user-facing messages

use fmtgen_generation::GenerationError;
use thiserror::Error;

/// Exit code for a successful run
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for write, configuration and other failures
pub const EXIT_FAILURE: i32 = 1;
/// Exit code when the input header does not exist
pub const EXIT_SOURCE_NOT_FOUND: i32 = 2;
/// Exit code when the input header has no recognized overloads
pub const EXIT_NO_MATCHES: i32 = 3;
/// Exit code when check mode finds a stale output
pub const EXIT_OUT_OF_DATE: i32 = 4;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl CliError {
    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::InvalidArgument { message } => {
                format!("Invalid argument: {}\n\nRun 'fmtgen --help' for usage information.", message)
            }
            CliError::Generation(GenerationError::SourceNotFound(path)) => {
                format!("Error: '{}' not found.", path.display())
            }
            CliError::Generation(GenerationError::NoMatchesFound(path)) => {
                format!("No operator<< overloads found in '{}'.", path.display())
            }
            CliError::Generation(GenerationError::OutOfDate(path)) => {
                format!(
                    "'{}' is out of date.\n\nRun 'fmtgen' without --check to regenerate it.",
                    path.display()
                )
            }
            CliError::Generation(
                e @ (GenerationError::InvalidConfig(_) | GenerationError::Config(_)),
            ) => {
                format!("{}\n\nCheck fmtgen.toml and FMTGEN_* environment variables.", e)
            }
            CliError::Generation(e) => format!("Formatter generation failed: {}", e),
        }
    }

    /// Get technical details for verbose mode
    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Generation(GenerationError::SourceNotFound(_)) => EXIT_SOURCE_NOT_FOUND,
            CliError::Generation(GenerationError::NoMatchesFound(_)) => EXIT_NO_MATCHES,
            CliError::Generation(GenerationError::OutOfDate(_)) => EXIT_OUT_OF_DATE,
            _ => EXIT_FAILURE,
        }
    }

    /// Whether to present this as a warning rather than an error
    pub fn is_warning(&self) -> bool {
        matches!(self, CliError::Generation(e) if e.is_warning())
    }
}

pub type CliResult<T> = Result<T, CliError>;
