//! Flattening subject results into report rows.

use benchview_config::ReportOptions;
use benchview_core::{format_decimal, format_memory, format_memory_diff, SubjectResult, SuiteResult};
use tracing::debug;

use crate::error::{ReportError, Result};
use crate::step::{AggregateIterationsStep, ExplodeParamStep, FilterColsStep, Pipeline};
use crate::workspace::{Row, Table, Workspace};

/// Columns produced for every iteration, before pruning.
pub const BUILTIN_COLUMNS: &[&str] = &[
    "run",
    "iter",
    "iters",
    "time",
    "memory",
    "memory_diff",
    "memory_inc",
    "memory_diff_inc",
    "min_time",
    "max_time",
    "total_time",
];

/// Converts one subject's runs into flat rows.
///
/// Each iteration becomes a row with `run`/`iter` (1-based), `iters`, one
/// column per parameter, the formatted `time`, the memory columns and the
/// run's `min_time`/`max_time`/`total_time`. Depending on the options the
/// rows are then collapsed per run, exploded on a parameter, and pruned.
///
/// # Example
///
/// ```
/// use benchview_config::ReportOptions;
/// use benchview_core::{AggregateIterationResult, Iteration, ParameterSet, SubjectMetadata, SubjectResult};
/// use benchview_report::TabularRowBuilder;
///
/// let params = ParameterSet::new().with("size", 10);
/// let subject = SubjectResult::new(SubjectMetadata::new(0, "benchSort")).with_run(
///     AggregateIterationResult::from_iterations(vec![
///         Iteration::new(0, params.clone()).with_time(1.5),
///         Iteration::new(1, params).with_time(2.5),
///     ]),
/// );
///
/// let builder = TabularRowBuilder::new(ReportOptions::new().with_precision(2)).unwrap();
/// let rows = builder.build_rows(&subject).unwrap();
///
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[1].get("time").unwrap().to_string(), "2.50");
/// assert_eq!(rows[1].columns().collect::<Vec<_>>(), vec!["iter", "size", "time"]);
/// ```
#[derive(Debug, Clone)]
pub struct TabularRowBuilder {
    options: ReportOptions,
}

impl TabularRowBuilder {
    /// Creates a builder, validating the options first.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Config`] for invalid options.
    pub fn new(options: ReportOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Builds the final rows for `subject`.
    ///
    /// # Errors
    ///
    /// Fails before any step runs if `explode_param` or a `remove_cols`
    /// entry names something the subject never produces.
    pub fn build_rows(&self, subject: &SubjectResult) -> Result<Vec<Row>> {
        self.check_columns([subject], || format!("subject {}", subject.metadata.name))?;
        self.build_checked_rows(subject)
    }

    /// Checks `explode_param` and `remove_cols` against every subject of
    /// `suite` at once.
    ///
    /// A name only has to occur in one subject; subjects that lack it pass
    /// their rows through the steps unchanged.
    ///
    /// # Errors
    ///
    /// [`ReportError::UnknownParameter`] or [`ReportError::UnknownColumn`]
    /// when no subject of the suite produces the name.
    pub fn check_suite(&self, suite: &SuiteResult) -> Result<()> {
        let subjects = suite
            .benchmarks
            .iter()
            .flat_map(|benchmark| benchmark.subjects.iter());
        self.check_columns(subjects, || "suite".to_string())
    }

    /// Builds rows for a subject whose names were already checked.
    pub(crate) fn build_checked_rows(&self, subject: &SubjectResult) -> Result<Vec<Row>> {
        let table = Table::new(subject.metadata.name.clone()).with_rows(self.raw_rows(subject));
        let mut workspace = Workspace::new().with_table(table);
        self.pipeline().run(&mut workspace)?;

        let rows: Vec<Row> = workspace
            .into_tables()
            .into_iter()
            .flat_map(Table::into_rows)
            .collect();
        debug!(
            event = "rows_built",
            subject = subject.metadata.name.as_str(),
            rows = rows.len() as u64,
        );
        Ok(rows)
    }

    /// One unpruned row per iteration, in run then iteration order.
    pub fn raw_rows(&self, subject: &SubjectResult) -> Vec<Row> {
        let precision = self.options.precision;
        let mut rows = Vec::new();

        for (run_index, aggregate) in subject.aggregate_iteration_results() {
            for iteration in aggregate.iterations() {
                let mut row = Row::new()
                    .with_parameters(iteration.parameters().clone())
                    .with("run", run_index + 1)
                    .with("iter", iteration.index() + 1)
                    .with("iters", aggregate.iteration_count());
                for (name, value) in iteration.parameters().iter() {
                    row.set(name, value);
                }
                row.set("time", format_decimal(iteration.time(), precision));
                row.set("memory", format_memory(iteration.memory()));
                row.set("memory_diff", format_memory_diff(iteration.memory_diff()));
                row.set("memory_inc", format_memory(iteration.memory_inclusive()));
                row.set(
                    "memory_diff_inc",
                    format_memory_diff(iteration.memory_diff_inclusive()),
                );
                row.set("min_time", format_decimal(aggregate.min_time(), precision));
                row.set("max_time", format_decimal(aggregate.max_time(), precision));
                row.set("total_time", format_decimal(aggregate.total_time(), precision));
                rows.push(row);
            }
        }

        rows
    }

    /// Steps applied to the raw rows, in order.
    pub fn pipeline(&self) -> Pipeline {
        let mut pipeline = Pipeline::new();
        if self.options.aggregate_iterations {
            pipeline.push(AggregateIterationsStep::new());
        }
        if let Some(param) = &self.options.explode_param {
            pipeline.push(ExplodeParamStep::new(param.as_str()));
        }
        pipeline.push(FilterColsStep::new(self.pruned_columns()));
        pipeline
    }

    /// Column groups removed from the final rows.
    pub fn pruned_columns(&self) -> Vec<String> {
        let options = &self.options;
        let mut columns = vec!["run"];

        if !options.aggregate_iterations || options.explode_param.is_some() {
            columns.extend(["min_time", "max_time", "total_time"]);
        }
        if options.aggregate_iterations {
            columns.extend(["iter", "memory", "memory_inc", "memory_diff", "memory_diff_inc"]);
        } else {
            columns.push("iters");
        }
        if !options.memory {
            columns.extend(["memory", "memory_diff"]);
        }
        if !options.memory_inc {
            columns.extend(["memory_inc", "memory_diff_inc"]);
        }

        let mut pruned: Vec<String> = Vec::new();
        for column in columns
            .into_iter()
            .map(str::to_string)
            .chain(options.remove_cols.iter().cloned())
        {
            if !pruned.contains(&column) {
                pruned.push(column);
            }
        }
        pruned
    }

    fn check_columns<'a, I>(&self, subjects: I, scope: impl Fn() -> String) -> Result<()>
    where
        I: IntoIterator<Item = &'a SubjectResult>,
        I::IntoIter: Clone,
    {
        let subjects = subjects.into_iter();
        let has_param = |name: &str| {
            subjects
                .clone()
                .flat_map(|subject| subject.aggregate_iteration_results())
                .flat_map(|(_, aggregate)| aggregate.iterations())
                .any(|iteration| iteration.parameters().contains(name))
        };

        if let Some(param) = &self.options.explode_param {
            if !has_param(param) {
                return Err(ReportError::UnknownParameter {
                    param: param.clone(),
                    scope: scope(),
                });
            }
        }

        for column in &self.options.remove_cols {
            if !BUILTIN_COLUMNS.contains(&column.as_str())
                && !self.is_pivot_column(column)
                && !has_param(column)
            {
                return Err(ReportError::UnknownColumn {
                    column: column.clone(),
                    scope: scope(),
                });
            }
        }

        Ok(())
    }

    /// Whether `column` is named like a column produced by exploding.
    fn is_pivot_column(&self, column: &str) -> bool {
        self.options.explode_param.as_deref().is_some_and(|param| {
            column
                .strip_prefix(param)
                .and_then(|rest| rest.strip_prefix('-'))
                .is_some_and(|value| !value.is_empty())
        })
    }
}
