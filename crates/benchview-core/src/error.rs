//! Error types for the measurement model

use thiserror::Error;

/// Errors raised while populating an [`IterationCollection`](crate::IterationCollection).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasurementError {
    /// The iteration index is outside the collection.
    #[error("Iteration index {index} out of range (collection has {len} iterations)")]
    IndexOutOfRange { index: usize, len: usize },

    /// The collection was frozen by a completed run or an exception.
    #[error("Iteration collection is frozen")]
    Frozen,

    /// A measured time was negative or not a number.
    #[error("Invalid iteration time: {0}")]
    InvalidTime(f64),
}

/// Terminal failure of an iteration run, reported by the measurement source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct IterationError {
    message: String,
}

impl IterationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
