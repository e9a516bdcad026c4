//! Tabular report pipeline for benchmark results.
//!
//! Raw per-iteration measurements are flattened into rows, collected into a
//! [`Workspace`] of named tables, and reshaped by an ordered [`Pipeline`] of
//! [`Step`]s before export.
//!
//! # Overview
//!
//! - [`Workspace`], [`Table`], [`Row`], [`Value`]: the mutable grid. Column
//!   names may carry a `#group.` prefix so whole groups can be removed.
//! - [`step`]: column filtering, run aggregation, parameter explode and
//!   schema normalization steps.
//! - [`TabularRowBuilder`]: turns one subject's runs into rows according to
//!   [`ReportOptions`](benchview_config::ReportOptions).
//! - [`ReportGenerator`]: builds one table per subject for a whole suite.
//! - [`CsvExporter`], [`MarkdownReport`], [`JsonExporter`]: output formats.
//!
//! # Example
//!
//! ```
//! use benchview_report::step::{FilterColsStep, Pipeline};
//! use benchview_report::{Row, Table, Workspace};
//!
//! let mut workspace = Workspace::new().with_table(
//!     Table::new("results").with_row(Row::new().with("#time.mean", 1.5).with("subject", "benchFoo")),
//! );
//!
//! Pipeline::new()
//!     .with_step(FilterColsStep::new(["time"]))
//!     .run(&mut workspace)
//!     .unwrap();
//!
//! let row = &workspace.tables()[0].rows()[0];
//! assert_eq!(row.columns().collect::<Vec<_>>(), vec!["subject"]);
//! ```

mod builder;
mod error;
mod export;
mod generator;
pub mod step;
mod workspace;


pub use builder::{TabularRowBuilder, BUILTIN_COLUMNS};
pub use error::{ReportError, Result};
pub use export::{CsvExporter, JsonExporter, MarkdownReport};
pub use generator::ReportGenerator;
pub use step::{Pipeline, Step};
pub use workspace::{group_of, Row, Table, Value, Workspace};
