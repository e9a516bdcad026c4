//! Error types for report generation

use benchview_config::ConfigError;
use thiserror::Error;

/// Errors raised while configuring, transforming or exporting a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The report options failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// `explode_param` names a parameter no iteration carries.
    #[error("Unknown explode parameter {param:?} in {scope}")]
    UnknownParameter { param: String, scope: String },

    /// `remove_cols` names a column the report never produces.
    #[error("Unknown column {column:?} in {scope}")]
    UnknownColumn { column: String, scope: String },

    /// A step added, removed or renamed tables.
    #[error("Step {step} changed workspace tables from {expected:?} to {actual:?}")]
    SchemaViolation {
        step: &'static str,
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for report operations
pub type Result<T> = std::result::Result<T, ReportError>;
