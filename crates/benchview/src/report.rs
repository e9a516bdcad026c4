//! Report entry points that hide the pipeline wiring.

use std::path::Path;

use benchview_config::{BenchviewConfig, ReportOptions};
use benchview_core::SuiteResult;
use benchview_report::{ReportError, ReportGenerator, Workspace};

/// Configuration file read by [`generate_report_from_config`].
pub const CONFIG_FILE: &str = "benchview.toml";

/// Builds one table per subject of `suite`.
pub fn generate_report(
    suite: &SuiteResult,
    options: ReportOptions,
) -> Result<Workspace, ReportError> {
    ReportGenerator::new(options)?.generate(suite)
}

/// Like [`generate_report`], with options from `benchview.toml` in the
/// working directory. Defaults apply when the file does not exist; a file
/// that fails to parse or validate is an error.
pub fn generate_report_from_config(suite: &SuiteResult) -> Result<Workspace, ReportError> {
    let config = if Path::new(CONFIG_FILE).exists() {
        BenchviewConfig::load(CONFIG_FILE)?
    } else {
        BenchviewConfig::default()
    };
    generate_report(suite, config.report)
}
