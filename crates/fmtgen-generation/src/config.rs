//! Generator configuration
//!
//! Settings are an explicit value handed to the pipeline. They are layered
//! from built-in defaults, an optional TOML file and `FMTGEN_*` environment
//! variables; callers apply command-line overrides on top.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use config::{Config, Environment, File};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{GenerationError, Result};

/// Namespace the enums live in unless configured otherwise
pub const DEFAULT_NAMESPACE: &str = "wgpu";
/// Header scanned for operator<< overloads
pub const DEFAULT_INPUT_PATH: &str = "webgpu_cpp_print.h";
/// Generated header
pub const DEFAULT_OUTPUT_PATH: &str = "webgpu_fmt_formatters.h";
/// Config file looked up when none is given explicitly
pub const DEFAULT_CONFIG_FILE: &str = "fmtgen.toml";
/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "FMTGEN";

/// Includes emitted at the top of the generated header
pub fn default_includes() -> Vec<String> {
    vec![
        "spdlog/fmt/bundled/format.h".to_string(),
        "sstream".to_string(),
        "webgpu/webgpu_cpp_print.h".to_string(),
    ]
}

/// Configuration for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Header containing the stream-insertion overloads
    pub input_path: PathBuf,
    /// Destination of the generated header
    pub output_path: PathBuf,
    /// Namespace qualifying each enum, empty for the global namespace
    pub namespace: String,
    /// Headers included by the generated file, in order
    pub includes: Vec<String>,
    /// Render without touching the output path
    pub dry_run: bool,
    /// Compare against the existing output instead of writing
    pub check: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            namespace: DEFAULT_NAMESPACE.to_string(),
            includes: default_includes(),
            dry_run: false,
            check: false,
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration for the given input and output paths
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            ..Default::default()
        }
    }

    /// Override the enum namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Override the include list
    pub fn with_includes(mut self, includes: Vec<String>) -> Self {
        self.includes = includes;
        self
    }

    /// Enable or disable dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Enable or disable check mode
    pub fn with_check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(GenerationError::InvalidConfig(
                "input path must not be empty".to_string(),
            ));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(GenerationError::InvalidConfig(
                "output path must not be empty".to_string(),
            ));
        }
        if !is_valid_namespace(&self.namespace) {
            return Err(GenerationError::InvalidConfig(format!(
                "'{}' is not a valid C++ namespace",
                self.namespace
            )));
        }
        for include in &self.includes {
            if include.trim().is_empty()
                || include.contains(['<', '>', '\n', '\r'])
            {
                return Err(GenerationError::InvalidConfig(format!(
                    "invalid include '{}'",
                    include
                )));
            }
        }
        if self.dry_run && self.check {
            return Err(GenerationError::InvalidConfig(
                "dry-run and check modes are mutually exclusive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Empty, or identifiers joined by `::`
fn is_valid_namespace(namespace: &str) -> bool {
    static NAMESPACE: OnceLock<Regex> = OnceLock::new();
    namespace.is_empty()
        || NAMESPACE
            .get_or_init(|| {
                Regex::new(r"^(::)?[A-Za-z_]\w*(::[A-Za-z_]\w*)*$").expect("Invalid regex")
            })
            .is_match(namespace)
}

/// Loads [`GeneratorConfig`] from layered sources
pub struct ConfigLoader {
    /// Config file path
    config_path: PathBuf,
    /// Whether a missing config file is an error
    required: bool,
    /// Environment snapshot used instead of the process environment
    env: Option<HashMap<String, String>>,
}

impl ConfigLoader {
    /// Loader reading the optional default config file
    pub fn new() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
            required: false,
            env: None,
        }
    }

    /// Loader reading an explicitly named config file, which must exist
    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            config_path: path.as_ref().to_path_buf(),
            required: true,
            env: None,
        }
    }

    /// Read environment overrides from the given map instead of the process
    pub fn with_env(mut self, env: HashMap<String, String>) -> Self {
        self.env = Some(env);
        self
    }

    /// Build the configuration: defaults, then file, then environment
    pub fn load(&self) -> Result<GeneratorConfig> {
        let environment = Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("includes")
            .source(self.env.clone());

        let builder = Config::builder()
            .add_source(File::from(self.config_path.clone()).required(self.required))
            .add_source(environment);

        let config: GeneratorConfig = builder.build()?.try_deserialize()?;
        tracing::debug!(
            config_path = %self.config_path.display(),
            namespace = %config.namespace,
            "Loaded generator configuration"
        );
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
