//! Generation manager for orchestrating a formatter generation run
//!
//! Runs the pipeline in order: read the source header, scan for overloads,
//! canonicalize the names, emit one fragment per enum, assemble the
//! document, then write, check or preview it.

use crate::{
    canonicalizer::canonicalize,
    config::GeneratorConfig,
    document_assembler::assemble,
    error::{GenerationError, Result},
    formatter_emitter::FormatterEmitter,
    models::{CanonicalEnumList, GenerationOutcome, GenerationReport, OutputDocument},
    output_writer::{OutputWriter, OutputWriterConfig},
    overload_scanner::scan_overloads,
    source_reader::read_source,
};

/// Orchestrates one generation run
pub struct GenerationManager {
    /// Configuration for the run
    config: GeneratorConfig,
    /// Formatter emitter bound to the configured namespace
    emitter: FormatterEmitter,
    /// Output writer instance
    writer: OutputWriter,
}

impl GenerationManager {
    /// Creates a manager for the given configuration
    ///
    /// The configuration is validated up front.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let emitter = FormatterEmitter::new(config.namespace.clone())?;
        let writer = OutputWriter::with_config(OutputWriterConfig {
            dry_run: config.dry_run,
        });

        Ok(Self {
            config,
            emitter,
            writer,
        })
    }

    /// Discover the canonical enum list in the input header
    ///
    /// Fails with `SourceNotFound` for a missing header and `NoMatchesFound`
    /// when no overloads are recognized.
    pub fn discover(&self) -> Result<CanonicalEnumList> {
        let source = read_source(&self.config.input_path)?;
        let enums = canonicalize(scan_overloads(&source));

        if enums.is_empty() {
            tracing::warn!(
                path = %self.config.input_path.display(),
                "No operator<< overloads found"
            );
            return Err(GenerationError::NoMatchesFound(
                self.config.input_path.clone(),
            ));
        }

        tracing::debug!(enums = enums.len(), "Canonicalized enum names");
        Ok(enums)
    }

    /// Render the full document for a canonical enum list
    pub fn render_document(&self, enums: &CanonicalEnumList) -> Result<OutputDocument> {
        let fragments = self.emitter.emit_all(enums)?;
        tracing::debug!(
            fragments = fragments.len(),
            namespace = %self.emitter.namespace(),
            "Emitted formatter fragments"
        );
        Ok(assemble(&self.config.includes, &fragments))
    }

    /// Discover and render without touching the output path
    pub fn render(&self) -> Result<OutputDocument> {
        let enums = self.discover()?;
        self.render_document(&enums)
    }

    /// Run the whole pipeline
    ///
    /// Depending on configuration this writes the output, verifies it is
    /// current (`OutOfDate` otherwise), or only renders it.
    pub fn generate(&self) -> Result<GenerationReport> {
        self.generate_with_document().map(|(report, _)| report)
    }

    /// Run the whole pipeline and hand back the rendered document as well
    ///
    /// The source is read once, so the document always matches the report.
    pub fn generate_with_document(&self) -> Result<(GenerationReport, OutputDocument)> {
        let enums = self.discover()?;
        let document = self.render_document(&enums)?;
        let output_path = &self.config.output_path;

        let outcome = if self.config.check {
            if !self.writer.is_current(&document, output_path)? {
                tracing::warn!(path = %output_path.display(), "Generated header is stale");
                return Err(GenerationError::OutOfDate(output_path.clone()));
            }
            GenerationOutcome::Unchanged
        } else {
            let result = self.writer.write(&document, output_path)?;
            tracing::debug!("{}", self.writer.summarize_result(&result));
            if result.dry_run {
                GenerationOutcome::DryRun
            } else {
                GenerationOutcome::Written
            }
        };

        let report = GenerationReport {
            input_path: self.config.input_path.clone(),
            output_path: output_path.clone(),
            enum_names: enums.as_slice().to_vec(),
            formatter_count: document.formatter_count,
            outcome,
        };
        tracing::info!(
            formatters = report.formatter_count,
            output = %output_path.display(),
            "{}",
            report.summary()
        );
        Ok((report, document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const HEADER: &str = "\
std::basic_ostream<CharT, Traits>& operator<<(std::basic_ostream<CharT, Traits>& o, Shape value) {}
std::basic_ostream<CharT, Traits>& operator<<(std::basic_ostream<CharT, Traits>& o, Color value) {}
";

    fn setup(content: &str) -> (TempDir, GeneratorConfig) {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("webgpu_cpp_print.h");
        fs::write(&input, content).unwrap();
        let config = GeneratorConfig::new(input, temp_dir.path().join("out/formatters.h"));
        (temp_dir, config)
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GeneratorConfig::default().with_namespace("not a namespace");
        assert!(matches!(
            GenerationManager::new(config),
            Err(GenerationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_discover_sorted() {
        let (_dir, config) = setup(HEADER);
        let manager = GenerationManager::new(config).unwrap();
        let enums = manager.discover().unwrap();
        let names: Vec<_> = enums.iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["Color", "Shape"]);
    }

    #[test]
    fn test_generate_writes_output() {
        let (_dir, config) = setup(HEADER);
        let output = config.output_path.clone();
        let report = GenerationManager::new(config).unwrap().generate().unwrap();

        assert_eq!(report.formatter_count, 2);
        assert_eq!(report.outcome, GenerationOutcome::Written);
        let text = fs::read_to_string(output).unwrap();
        assert!(text.find("wgpu::Color").unwrap() < text.find("wgpu::Shape").unwrap());
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let (_dir, config) = setup(HEADER);
        let output = config.output_path.clone();
        let report = GenerationManager::new(config.with_dry_run(true))
            .unwrap()
            .generate()
            .unwrap();

        assert_eq!(report.outcome, GenerationOutcome::DryRun);
        assert!(!output.exists());
    }

    #[test]
    fn test_check_mode() {
        let (_dir, config) = setup(HEADER);
        let output = config.output_path.clone();

        let checker = GenerationManager::new(config.clone().with_check(true)).unwrap();
        assert!(matches!(checker.generate(), Err(GenerationError::OutOfDate(_))));
        assert!(!output.exists());

        GenerationManager::new(config).unwrap().generate().unwrap();
        let report = checker.generate().unwrap();
        assert_eq!(report.outcome, GenerationOutcome::Unchanged);
    }

    #[test]
    fn test_generate_with_document_matches_written_output() {
        let (_dir, config) = setup(HEADER);
        let output = config.output_path.clone();
        let (report, document) = GenerationManager::new(config)
            .unwrap()
            .generate_with_document()
            .unwrap();

        assert_eq!(report.formatter_count, document.formatter_count);
        assert_eq!(fs::read_to_string(output).unwrap(), document.text);
    }

    #[test]
    fn test_check_mode_with_undecodable_output_is_stale() {
        let (_dir, config) = setup(HEADER);
        let output = config.output_path.clone();
        fs::create_dir_all(output.parent().unwrap()).unwrap();
        fs::write(&output, [0xff, 0xfe, 0x00]).unwrap();

        let result = GenerationManager::new(config.with_check(true))
            .unwrap()
            .generate();

        assert!(matches!(result, Err(GenerationError::OutOfDate(p)) if p == output));
    }

    #[test]
    fn test_no_matches() {
        let (_dir, config) = setup("int main() { return 0; }");
        let output = config.output_path.clone();
        let result = GenerationManager::new(config).unwrap().generate();

        assert!(matches!(result, Err(GenerationError::NoMatchesFound(_))));
        assert!(!output.exists());
        assert!(!output.parent().unwrap().exists());
    }
}
