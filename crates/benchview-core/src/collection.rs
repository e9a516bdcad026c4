//! Ordered iterations of one subject run.
//!
//! A collection is created with a fixed number of placeholder iterations,
//! populated as iterations complete, and frozen once the run ends or fails.

use std::collections::BTreeSet;

use crate::error::{IterationError, MeasurementError};
use crate::iteration::{Iteration, Measurement};
use crate::param::ParameterSet;
use crate::subject::SubjectMetadata;

/// Summary statistics computed upstream for a finished collection.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IterationStats {
    /// Mean time in microseconds.
    pub mean: f64,
    /// Modal time in microseconds.
    pub mode: f64,
    /// Relative standard deviation, as a percentage.
    pub rstdev: f64,
}

/// Iterations for one subject run.
///
/// # Example
///
/// ```
/// use benchview_core::{IterationCollection, Measurement, ParameterSet, SubjectMetadata};
///
/// let subject = SubjectMetadata::new(0, "benchSort");
/// let mut collection = IterationCollection::new(subject, 3, ParameterSet::new());
///
/// collection.record(0, Measurement { time: 10.0, ..Default::default() }).unwrap();
/// collection.reject(0).unwrap();
/// collection.freeze();
///
/// assert_eq!(collection.len(), 3);
/// assert!(collection.rejects().contains(&0));
/// assert!(collection.record(1, Measurement::default()).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct IterationCollection {
    subject: SubjectMetadata,
    iterations: Vec<Iteration>,
    rejects: BTreeSet<usize>,
    exception: Option<IterationError>,
    stats: Option<IterationStats>,
    frozen: bool,
}

impl IterationCollection {
    /// Creates `count` unmeasured iterations sharing `parameters`.
    pub fn new(subject: SubjectMetadata, count: usize, parameters: ParameterSet) -> Self {
        let iterations = (0..count)
            .map(|index| Iteration::new(index, parameters.clone()))
            .collect();
        Self::from_iterations(subject, iterations)
    }

    /// Wraps already-built iterations. Indices are taken as given.
    pub fn from_iterations(subject: SubjectMetadata, iterations: Vec<Iteration>) -> Self {
        Self {
            subject,
            iterations,
            rejects: BTreeSet::new(),
            exception: None,
            stats: None,
            frozen: false,
        }
    }

    pub fn with_stats(mut self, stats: IterationStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn subject(&self) -> &SubjectMetadata {
        &self.subject
    }

    pub fn len(&self) -> usize {
        self.iterations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.iterations.is_empty()
    }

    pub fn iteration(&self, index: usize) -> Option<&Iteration> {
        self.iterations.get(index)
    }

    pub fn iterations(&self) -> &[Iteration] {
        &self.iterations
    }

    pub fn iter(&self) -> impl Iterator<Item = &Iteration> {
        self.iterations.iter()
    }

    /// Stores the measurement for iteration `index`.
    ///
    /// # Errors
    ///
    /// Fails if the collection is frozen, the index is out of range or the
    /// time is negative/NaN.
    pub fn record(
        &mut self,
        index: usize,
        measurement: Measurement,
    ) -> Result<&Iteration, MeasurementError> {
        self.ensure_open(index)?;
        if measurement.time.is_nan() || measurement.time < 0.0 {
            return Err(MeasurementError::InvalidTime(measurement.time));
        }
        let slot = &mut self.iterations[index];
        *slot = Iteration::new(index, slot.parameters().clone()).with_measurement(measurement);
        Ok(slot)
    }

    /// Flags iteration `index` as rejected (eligible for re-run).
    pub fn reject(&mut self, index: usize) -> Result<(), MeasurementError> {
        self.ensure_open(index)?;
        self.rejects.insert(index);
        Ok(())
    }

    pub fn rejects(&self) -> &BTreeSet<usize> {
        &self.rejects
    }

    pub fn has_rejects(&self) -> bool {
        !self.rejects.is_empty()
    }

    /// Records a terminal failure and freezes the collection.
    pub fn fail(&mut self, error: IterationError) {
        self.exception = Some(error);
        self.frozen = true;
    }

    pub fn exception(&self) -> Option<&IterationError> {
        self.exception.as_ref()
    }

    pub fn has_exception(&self) -> bool {
        self.exception.is_some()
    }

    pub fn set_stats(&mut self, stats: IterationStats) {
        self.stats = Some(stats);
    }

    pub fn stats(&self) -> Option<&IterationStats> {
        self.stats.as_ref()
    }

    /// Ends the run; further mutation is rejected.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    fn ensure_open(&self, index: usize) -> Result<(), MeasurementError> {
        if self.frozen {
            return Err(MeasurementError::Frozen);
        }
        if index >= self.iterations.len() {
            return Err(MeasurementError::IndexOutOfRange {
                index,
                len: self.iterations.len(),
            });
        }
        Ok(())
    }
}
