//! A single timed execution of a benchmark subject.

use crate::param::ParameterSet;

/// Measured values for one iteration, as reported by the benchmark engine.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Measurement {
    /// Elapsed time in microseconds.
    pub time: f64,
    /// Memory in use after the iteration, in bytes.
    pub memory: u64,
    /// Change in memory over the iteration.
    pub memory_diff: i64,
    /// Memory including allocator overhead.
    pub memory_inclusive: u64,
    /// Change in inclusive memory over the iteration.
    pub memory_diff_inclusive: i64,
}

/// Immutable record of one iteration.
///
/// The owning [`IterationCollection`](crate::IterationCollection) is not
/// referenced from here; event consumers receive the collection alongside
/// the iteration instead.
///
/// # Example
///
/// ```
/// use benchview_core::{Iteration, ParameterSet};
///
/// let iteration = Iteration::new(3, ParameterSet::new().with("size", 100))
///     .with_time(12.5)
///     .with_memory(2048, -16);
///
/// assert_eq!(iteration.index(), 3);
/// assert_eq!(iteration.time(), 12.5);
/// assert_eq!(iteration.memory_diff(), -16);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Iteration {
    index: usize,
    measurement: Measurement,
    parameters: ParameterSet,
}

impl Iteration {
    /// Creates an unmeasured iteration (all measurements zero).
    pub fn new(index: usize, parameters: ParameterSet) -> Self {
        Self {
            index,
            measurement: Measurement::default(),
            parameters,
        }
    }

    pub fn with_measurement(mut self, measurement: Measurement) -> Self {
        self.measurement = measurement;
        self
    }

    pub fn with_time(mut self, time: f64) -> Self {
        self.measurement.time = time;
        self
    }

    pub fn with_memory(mut self, memory: u64, diff: i64) -> Self {
        self.measurement.memory = memory;
        self.measurement.memory_diff = diff;
        self
    }

    pub fn with_memory_inclusive(mut self, memory: u64, diff: i64) -> Self {
        self.measurement.memory_inclusive = memory;
        self.measurement.memory_diff_inclusive = diff;
        self
    }

    /// 0-based position within the owning collection.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Elapsed time in microseconds.
    pub fn time(&self) -> f64 {
        self.measurement.time
    }

    pub fn memory(&self) -> u64 {
        self.measurement.memory
    }

    pub fn memory_diff(&self) -> i64 {
        self.measurement.memory_diff
    }

    pub fn memory_inclusive(&self) -> u64 {
        self.measurement.memory_inclusive
    }

    pub fn memory_diff_inclusive(&self) -> i64 {
        self.measurement.memory_diff_inclusive
    }

    pub fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }
}
