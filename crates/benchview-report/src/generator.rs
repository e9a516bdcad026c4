//! Suite-level report generation.

use benchview_config::ReportOptions;
use benchview_core::SuiteResult;
use tracing::info;

use crate::builder::TabularRowBuilder;
use crate::error::Result;
use crate::step::{Pipeline, Step, UniformColumnsStep};
use crate::workspace::{Table, Workspace};

/// Builds a workspace with one table per subject of a suite.
///
/// Tables are named `<benchmark class>::<subject name>`. After the rows are
/// built, any extra steps run in the order they were added, followed by
/// [`UniformColumnsStep`] so every table has a single display schema.
/// Option names are checked once against the whole suite, so a subject
/// without the explode parameter keeps its rows as built.
///
/// # Example
///
/// ```
/// use benchview_config::ReportOptions;
/// use benchview_core::{
///     AggregateIterationResult, BenchmarkMetadata, BenchmarkResult, Iteration, ParameterSet,
///     SubjectMetadata, SubjectResult, SuiteResult,
/// };
/// use benchview_report::ReportGenerator;
///
/// let subject = SubjectResult::new(SubjectMetadata::new(0, "benchHash")).with_run(
///     AggregateIterationResult::from_iterations(vec![
///         Iteration::new(0, ParameterSet::new()).with_time(3.0),
///     ]),
/// );
/// let suite = SuiteResult::new().with_benchmark(
///     BenchmarkResult::new(BenchmarkMetadata::new("HashBench")).with_subject(subject),
/// );
///
/// let workspace = ReportGenerator::new(ReportOptions::new()).unwrap().generate(&suite).unwrap();
/// assert!(workspace.table("HashBench::benchHash").is_some());
/// ```
#[derive(Debug)]
pub struct ReportGenerator {
    builder: TabularRowBuilder,
    steps: Pipeline,
}

impl ReportGenerator {
    /// Validates `options` and creates a generator.
    pub fn new(options: ReportOptions) -> Result<Self> {
        Ok(Self {
            builder: TabularRowBuilder::new(options)?,
            steps: Pipeline::new(),
        })
    }

    /// Adds a step that runs after row building.
    pub fn with_step(mut self, step: impl Step + 'static) -> Self {
        self.steps.push(step);
        self
    }

    pub fn builder(&self) -> &TabularRowBuilder {
        &self.builder
    }

    pub fn generate(&self, suite: &SuiteResult) -> Result<Workspace> {
        self.builder.check_suite(suite)?;
        let mut workspace = Workspace::new();

        for benchmark in &suite.benchmarks {
            for subject in &benchmark.subjects {
                let name = format!("{}::{}", benchmark.metadata.class, subject.metadata.name);
                let rows = self.builder.build_checked_rows(subject)?;
                workspace.add_table(Table::new(name).with_rows(rows));
            }
        }

        self.steps.run(&mut workspace)?;
        Pipeline::new()
            .with_step(UniformColumnsStep)
            .run(&mut workspace)?;

        info!(
            event = "report_generated",
            tables = workspace.tables().len() as u64,
            rows = workspace.row_count() as u64,
        );
        Ok(workspace)
    }
}
