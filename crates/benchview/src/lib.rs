//! benchview - Benchmark result presentation in Rust
//!
//! Turn measured runs into tables, or watch them arrive in a live grid.
//!
//! # Example
//!
//! ```rust
//! use benchview::prelude::*;
//!
//! let subject = SubjectResult::new(SubjectMetadata::new(0, "benchSort")).with_run(
//!     AggregateIterationResult::from_iterations(vec![
//!         Iteration::new(0, ParameterSet::new().with("size", 10)).with_time(12.5),
//!     ]),
//! );
//! let suite = SuiteResult::new().with_benchmark(
//!     BenchmarkResult::new(BenchmarkMetadata::new("SortBench")).with_subject(subject),
//! );
//!
//! let workspace = generate_report(&suite, ReportOptions::new().with_precision(1)).unwrap();
//! let row = &workspace.tables()[0].rows()[0];
//! assert_eq!(row.get("time").unwrap().to_string(), "12.5");
//! ```

// Measurement model
pub use benchview_core::{
    format_decimal, format_memory, format_memory_diff, AggregateIterationResult,
    BenchmarkMetadata, BenchmarkResult, Iteration, IterationCollection, IterationError,
    IterationStats, Measurement, MeasurementError, OutputMode, ParamValue, ParameterSet,
    SubjectMetadata, SubjectResult, SuiteResult, TimeSummary, TimeUnit,
};

// Options
pub use benchview_config::{BenchviewConfig, ConfigError, ProgressOptions, ReportOptions};

// Report pipeline
pub use benchview_report::step;
pub use benchview_report::{
    CsvExporter, JsonExporter, MarkdownReport, Pipeline, ReportError, ReportGenerator, Row, Step,
    Table, TabularRowBuilder, Value, Workspace,
};

// Live progress (optional)
#[cfg(feature = "console")]
pub use benchview_console as console;

mod report;
pub use report::{generate_report, generate_report_from_config, CONFIG_FILE};

pub mod prelude {
    pub use super::{
        AggregateIterationResult, BenchmarkMetadata, BenchmarkResult, Iteration,
        IterationCollection, Measurement, ParameterSet, SubjectMetadata, SubjectResult,
        SuiteResult, TimeUnit,
    };
    pub use super::{ProgressOptions, ReportOptions};
    pub use super::{generate_report, Row, Table, Value, Workspace};
    pub use super::step::{
        AggregateIterationsStep, ExplodeParamStep, FilterColsStep, Pipeline, Step,
    };

    #[cfg(feature = "console")]
    pub use benchview_console::{LiveRenderer, ProgressLogger};
}
