//! Per-run aggregate results.

use crate::collection::IterationCollection;
use crate::iteration::Iteration;

/// Min/max/total/average time over one run, in microseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimeSummary {
    pub min: f64,
    pub max: f64,
    pub total: f64,
    pub average: f64,
}

impl TimeSummary {
    /// Summarizes iteration times. Empty input yields all zeros.
    pub fn from_iterations(iterations: &[Iteration]) -> Self {
        if iterations.is_empty() {
            return Self::default();
        }
        let times = iterations.iter().map(Iteration::time);
        let min = times.clone().fold(f64::INFINITY, f64::min);
        let max = times.clone().fold(f64::NEG_INFINITY, f64::max);
        let total: f64 = times.sum();
        Self {
            min,
            max,
            total,
            average: total / iterations.len() as f64,
        }
    }
}

/// Read-only view of one run: its iterations plus their time summary.
///
/// # Example
///
/// ```
/// use benchview_core::{AggregateIterationResult, Iteration, ParameterSet};
///
/// let result = AggregateIterationResult::from_iterations(vec![
///     Iteration::new(0, ParameterSet::new()).with_time(2.0),
///     Iteration::new(1, ParameterSet::new()).with_time(4.0),
/// ]);
///
/// assert_eq!(result.iteration_count(), 2);
/// assert_eq!(result.min_time(), 2.0);
/// assert_eq!(result.average_time(), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateIterationResult {
    iterations: Vec<Iteration>,
    summary: TimeSummary,
}

impl AggregateIterationResult {
    /// Uses a summary computed elsewhere.
    pub fn new(iterations: Vec<Iteration>, summary: TimeSummary) -> Self {
        Self {
            iterations,
            summary,
        }
    }

    pub fn from_iterations(iterations: Vec<Iteration>) -> Self {
        let summary = TimeSummary::from_iterations(&iterations);
        Self::new(iterations, summary)
    }

    pub fn iterations(&self) -> &[Iteration] {
        &self.iterations
    }

    pub fn iteration_count(&self) -> usize {
        self.iterations.len()
    }

    pub fn min_time(&self) -> f64 {
        self.summary.min
    }

    pub fn max_time(&self) -> f64 {
        self.summary.max
    }

    pub fn total_time(&self) -> f64 {
        self.summary.total
    }

    pub fn average_time(&self) -> f64 {
        self.summary.average
    }

    pub fn summary(&self) -> &TimeSummary {
        &self.summary
    }
}

impl From<&IterationCollection> for AggregateIterationResult {
    fn from(collection: &IterationCollection) -> Self {
        Self::from_iterations(collection.iterations().to_vec())
    }
}
