//! Transform steps for the report workspace
//!
//! Steps are the building blocks of report shaping:
//! - FilterColsStep: removes column groups
//! - AggregateIterationsStep: collapses iteration rows into one row per run
//! - ExplodeParamStep: pivots one parameter's values into time columns
//! - UniformColumnsStep: gives every row of a table the same columns
//!
//! A [`Pipeline`] runs steps strictly in order; each step sees the full
//! effect of the steps before it.

mod aggregate;
mod explode;
mod filter_cols;
mod uniform;

#[cfg(test)]
mod tests;

use std::fmt::Debug;
use std::time::Instant;

use tracing::debug;

pub use aggregate::AggregateIterationsStep;
pub use explode::{fingerprint, ExplodeParamStep};
pub use filter_cols::FilterColsStep;
pub use uniform::UniformColumnsStep;

use crate::error::{ReportError, Result};
use crate::workspace::Workspace;

/// A mutation applied to the whole workspace.
///
/// A step must finish its pass over every table before the next step
/// starts. It may rewrite rows and cells but must not add, remove or rename
/// tables; [`Pipeline::run`] rejects steps that do.
pub trait Step: Send + Debug {
    /// Applies this step in place.
    fn step(&self, workspace: &mut Workspace);

    /// Returns the name of this step type.
    fn step_type_name(&self) -> &'static str;
}

/// Ordered sequence of steps.
///
/// The sequence is fixed when the pipeline is built; nothing is discovered
/// while it runs.
#[derive(Debug, Default)]
pub struct Pipeline {
    steps: Vec<Box<dyn Step>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step, returning the pipeline for chaining.
    pub fn with_step(mut self, step: impl Step + 'static) -> Self {
        self.push(step);
        self
    }

    pub fn push(&mut self, step: impl Step + 'static) {
        self.steps.push(Box::new(step));
    }

    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.step_type_name()).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Runs every step in order against `workspace`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::SchemaViolation`] as soon as a step leaves the
    /// workspace with a different set of tables; later steps do not run.
    pub fn run(&self, workspace: &mut Workspace) -> Result<()> {
        let expected = workspace.table_names();

        for (index, step) in self.steps.iter().enumerate() {
            let name = step.step_type_name();
            let start = Instant::now();
            debug!(
                event = "step_start",
                step = name,
                step_index = index as u64,
                rows = workspace.row_count() as u64,
            );

            step.step(workspace);

            let actual = workspace.table_names();
            if actual != expected {
                return Err(ReportError::SchemaViolation {
                    step: name,
                    expected,
                    actual,
                });
            }

            debug!(
                event = "step_end",
                step = name,
                step_index = index as u64,
                rows = workspace.row_count() as u64,
                duration_us = start.elapsed().as_micros() as u64,
            );
        }

        Ok(())
    }
}
