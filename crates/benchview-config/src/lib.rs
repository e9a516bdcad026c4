//! Configuration system for benchview.
//!
//! Load report and progress options from TOML or YAML. Unknown keys and
//! values of the wrong type are rejected at load time, and [`validate`]
//! checks the remaining constraints before any report step or renderer runs.
//!
//! [`validate`]: BenchviewConfig::validate
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use benchview_config::BenchviewConfig;
//!
//! let config = BenchviewConfig::from_toml_str(r#"
//!     [report]
//!     aggregate_iterations = true
//!     precision = 4
//!     explode_param = "batch"
//!
//!     [progress]
//!     time_unit = "milliseconds"
//! "#).unwrap();
//!
//! assert!(config.report.aggregate_iterations);
//! assert_eq!(config.report.explode_param.as_deref(), Some("batch"));
//! assert_eq!(config.progress.precision, 3);
//! ```
//!
//! A wrongly typed option fails before anything runs:
//!
//! ```
//! use benchview_config::BenchviewConfig;
//!
//! assert!(BenchviewConfig::from_toml_str("[report]\nprecision = \"high\"").is_err());
//! ```

use std::path::Path;

use benchview_core::{OutputMode, TimeUnit};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest fractional precision accepted for rendered times.
pub const MAX_PRECISION: usize = 20;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields, rename_all = "snake_case")]
pub struct BenchviewConfig {
    /// Tabular report options.
    pub report: ReportOptions,

    /// Live progress display options.
    pub progress: ProgressOptions,
}

impl BenchviewConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_report(mut self, report: ReportOptions) -> Self {
        self.report = report;
        self
    }

    pub fn with_progress(mut self, progress: ProgressOptions) -> Self {
        self.progress = progress;
        self
    }

    /// Checks every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.report.validate()?;
        self.progress.validate()
    }
}

/// Options for the tabular row builder.
///
/// # Example
///
/// ```
/// use benchview_config::ReportOptions;
///
/// let options = ReportOptions::new()
///     .with_aggregate_iterations(true)
///     .with_explode_param("batch");
///
/// assert_eq!(options.precision, 8);
/// assert!(options.validate().is_ok());
/// assert!(ReportOptions::new().with_explode_param("").validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields, rename_all = "snake_case")]
pub struct ReportOptions {
    /// Collapse iteration rows into one row per run.
    pub aggregate_iterations: bool,

    /// Fractional digits for rendered times.
    pub precision: usize,

    /// Parameter whose values become separate time columns.
    pub explode_param: Option<String>,

    /// Keep `memory` and `memory_diff` columns.
    pub memory: bool,

    /// Keep `memory_inc` and `memory_diff_inc` columns.
    pub memory_inc: bool,

    /// Additional column groups removed from the final table.
    ///
    /// Each entry must be a built-in column, a parameter of some subject, or,
    /// when `explode_param` is set, a pivot column such as `batch-1`.
    pub remove_cols: Vec<String>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            aggregate_iterations: false,
            precision: 8,
            explode_param: None,
            memory: false,
            memory_inc: false,
            remove_cols: Vec::new(),
        }
    }
}

impl ReportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_aggregate_iterations(mut self, aggregate: bool) -> Self {
        self.aggregate_iterations = aggregate;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_explode_param(mut self, param: impl Into<String>) -> Self {
        self.explode_param = Some(param.into());
        self
    }

    pub fn with_memory(mut self, memory: bool) -> Self {
        self.memory = memory;
        self
    }

    pub fn with_memory_inc(mut self, memory_inc: bool) -> Self {
        self.memory_inc = memory_inc;
        self
    }

    pub fn with_remove_col(mut self, col: impl Into<String>) -> Self {
        self.remove_cols.push(col.into());
        self
    }

    /// Rejects options that cannot describe a valid report.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::Invalid(format!(
                "precision {} exceeds maximum of {}",
                self.precision, MAX_PRECISION
            )));
        }
        if let Some(param) = &self.explode_param {
            if param.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "explode_param must not be empty".to_string(),
                ));
            }
        }
        for col in &self.remove_cols {
            if col.is_empty() || col.contains(['#', '.']) {
                return Err(ConfigError::Invalid(format!(
                    "remove_cols entry {:?} is not a column name",
                    col
                )));
            }
        }
        Ok(())
    }
}

/// Options for the live progress grid.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields, rename_all = "snake_case")]
pub struct ProgressOptions {
    /// Unit used when the subject does not override it.
    pub time_unit: TimeUnit,

    /// Time or throughput display.
    pub output_mode: OutputMode,

    /// Fractional digits for cell values.
    pub precision: usize,

    /// Color styled text; cursor control is always emitted on a terminal.
    pub colors: bool,
}

impl Default for ProgressOptions {
    fn default() -> Self {
        Self {
            time_unit: TimeUnit::Microseconds,
            output_mode: OutputMode::Time,
            precision: 3,
            colors: true,
        }
    }
}

impl ProgressOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_time_unit(mut self, unit: TimeUnit) -> Self {
        self.time_unit = unit;
        self
    }

    pub fn with_output_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = mode;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::Invalid(format!(
                "progress precision {} exceeds maximum of {}",
                self.precision, MAX_PRECISION
            )));
        }
        Ok(())
    }
}
