//! Benchmark → subject → run hierarchy.

use crate::aggregate::AggregateIterationResult;
use crate::time::{OutputMode, TimeUnit};

/// Static description of a subject (one benchmark method).
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectMetadata {
    pub index: usize,
    pub name: String,
    /// Overrides the renderer's default unit when set.
    pub output_time_unit: Option<TimeUnit>,
    /// Overrides the renderer's default mode when set.
    pub output_mode: Option<OutputMode>,
}

impl SubjectMetadata {
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
            output_time_unit: None,
            output_mode: None,
        }
    }

    pub fn with_time_unit(mut self, unit: TimeUnit) -> Self {
        self.output_time_unit = Some(unit);
        self
    }

    pub fn with_output_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = Some(mode);
        self
    }
}

/// Static description of a benchmark class and its subjects.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkMetadata {
    pub class: String,
    pub subjects: Vec<SubjectMetadata>,
}

impl BenchmarkMetadata {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            subjects: Vec::new(),
        }
    }

    pub fn with_subject(mut self, subject: SubjectMetadata) -> Self {
        self.subjects.push(subject);
        self
    }
}

/// All runs of one subject.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectResult {
    pub metadata: SubjectMetadata,
    aggregates: Vec<AggregateIterationResult>,
}

impl SubjectResult {
    pub fn new(metadata: SubjectMetadata) -> Self {
        Self {
            metadata,
            aggregates: Vec::new(),
        }
    }

    pub fn with_run(mut self, run: AggregateIterationResult) -> Self {
        self.aggregates.push(run);
        self
    }

    pub fn add_run(&mut self, run: AggregateIterationResult) {
        self.aggregates.push(run);
    }

    /// Runs in execution order, paired with their 0-based run index.
    pub fn aggregate_iteration_results(
        &self,
    ) -> impl Iterator<Item = (usize, &AggregateIterationResult)> {
        self.aggregates.iter().enumerate()
    }

    pub fn run_count(&self) -> usize {
        self.aggregates.len()
    }
}

/// Results for every subject of one benchmark class.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    pub metadata: BenchmarkMetadata,
    pub subjects: Vec<SubjectResult>,
}

impl BenchmarkResult {
    pub fn new(metadata: BenchmarkMetadata) -> Self {
        Self {
            metadata,
            subjects: Vec::new(),
        }
    }

    pub fn with_subject(mut self, subject: SubjectResult) -> Self {
        self.subjects.push(subject);
        self
    }
}

/// Results for a whole suite execution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuiteResult {
    pub benchmarks: Vec<BenchmarkResult>,
}

impl SuiteResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_benchmark(mut self, benchmark: BenchmarkResult) -> Self {
        self.benchmarks.push(benchmark);
        self
    }
}
