// Argument parsing and dispatch to the generation pipeline

use std::path::PathBuf;

use clap::Parser;
use fmtgen_generation::{ConfigLoader, GenerationManager, GenerationReport, GeneratorConfig};

use crate::error::{CliError, CliResult};

/// fmtgen - fmt::formatter specializations for enums with operator<< overloads
#[derive(Parser, Debug)]
#[command(name = "fmtgen")]
#[command(bin_name = "fmtgen")]
#[command(about = "Generate fmt::formatter specializations from operator<< enum overloads")]
#[command(
    long_about = "Scans a C++ header for stream-insertion overloads of enum types and writes a \
companion header specializing fmt::formatter for each enum.\n\n\
Settings are read from fmtgen.toml and FMTGEN_* environment variables; flags override both."
)]
#[command(version)]
pub struct Cli {
    /// Header containing the operator<< overloads
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Generated header to write
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Namespace of the enums (empty for the global namespace)
    #[arg(short, long, value_name = "NS")]
    pub namespace: Option<String>,

    /// Header to include in the generated file; repeat to replace the default list
    #[arg(long = "include", value_name = "HEADER")]
    pub includes: Vec<String>,

    /// Configuration file (default: fmtgen.toml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Render without writing the output
    #[arg(long, conflicts_with = "check")]
    pub dry_run: bool,

    /// Fail if the output differs from what would be generated
    #[arg(long)]
    pub check: bool,

    /// Print the rendered header to stdout (requires --dry-run)
    #[arg(long, requires = "dry_run")]
    pub print: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimize output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Result of a successful invocation
#[derive(Debug)]
pub struct RunOutput {
    /// Generation summary
    pub report: GenerationReport,
    /// Rendered header when `--print` was given
    pub document: Option<String>,
}

/// Routes parsed arguments into a generation run
pub struct CommandRouter;

impl CommandRouter {
    /// Layer CLI flags over file and environment configuration
    pub fn resolve_config(cli: &Cli) -> CliResult<GeneratorConfig> {
        let loader = match &cli.config {
            Some(path) => ConfigLoader::with_path(path),
            None => ConfigLoader::new(),
        };
        let mut config = loader.load()?;

        if let Some(input) = &cli.input {
            config.input_path = input.clone();
        }
        if let Some(output) = &cli.output {
            config.output_path = output.clone();
        }
        if let Some(namespace) = &cli.namespace {
            config.namespace = namespace.clone();
        }
        if !cli.includes.is_empty() {
            config.includes = cli.includes.clone();
        }
        if cli.dry_run {
            config.dry_run = true;
        }
        if cli.check {
            config.check = true;
        }

        if config.input_path == config.output_path {
            return Err(CliError::InvalidArgument {
                message: format!(
                    "input and output both point to '{}'",
                    config.input_path.display()
                ),
            });
        }

        Ok(config)
    }

    /// Run the generator for the parsed arguments
    pub fn execute(cli: &Cli) -> CliResult<RunOutput> {
        let config = Self::resolve_config(cli)?;
        let manager = GenerationManager::new(config)?;

        let (report, document) = manager.generate_with_document()?;

        Ok(RunOutput {
            report,
            document: cli.print.then_some(document.text),
        })
    }
}
