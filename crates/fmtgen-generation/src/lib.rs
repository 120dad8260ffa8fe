#![warn(missing_docs)]

//! Formatter generation for fmtgen
//!
//! Scans a C++ header for `operator<<` overloads on enum types and emits a
//! companion header of `fmt::formatter` specializations that reuse those
//! overloads. Extraction is a single regular expression over the whole
//! file; there is no C++ parsing.

pub mod canonicalizer;
pub mod config;
pub mod document_assembler;
pub mod error;
pub mod formatter_emitter;
pub mod generation_manager;
pub mod models;
pub mod output_writer;
pub mod overload_scanner;
pub mod source_reader;

// Re-export public API
pub use canonicalizer::canonicalize;
pub use crate::config::{ConfigLoader, GeneratorConfig, DEFAULT_NAMESPACE};
pub use document_assembler::assemble;
pub use error::{GenerationError, Result};
pub use formatter_emitter::FormatterEmitter;
pub use generation_manager::GenerationManager;
pub use models::{
    CanonicalEnumList, EnumTypeName, FormatterFragment, GenerationOutcome, GenerationReport,
    OutputDocument, SourceText,
};
pub use output_writer::{OutputWriter, OutputWriterConfig, WriteResult};
pub use overload_scanner::scan_overloads;
pub use source_reader::read_source;
