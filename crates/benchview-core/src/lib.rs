//! benchview Core - Measurement model consumed by the presentation layers
//!
//! This crate provides the read side of a benchmark run:
//! - Iterations and the collections that own them
//! - Aggregate (per-run) iteration results and subject/benchmark/suite results
//! - Parameter values used to key runs
//! - Time units and the fixed-precision / grouped-integer formatting rules
//!
//! Nothing here executes benchmarks; an external engine populates these types.

pub mod aggregate;
pub mod collection;
pub mod error;
pub mod format;
pub mod iteration;
pub mod param;
pub mod subject;
pub mod time;

#[cfg(test)]
mod tests;

pub use aggregate::{AggregateIterationResult, TimeSummary};
pub use collection::{IterationCollection, IterationStats};
pub use error::{IterationError, MeasurementError};
pub use format::{format_decimal, format_memory, format_memory_diff};
pub use iteration::{Iteration, Measurement};
pub use param::{ParamValue, ParameterSet};
pub use subject::{BenchmarkMetadata, BenchmarkResult, SubjectMetadata, SubjectResult, SuiteResult};
pub use time::{OutputMode, TimeUnit};
