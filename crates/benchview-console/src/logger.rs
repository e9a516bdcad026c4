//! Progress event interface.

use std::io;

use benchview_core::{BenchmarkMetadata, Iteration, IterationCollection};

/// Receives the lifecycle events of a benchmark suite as it runs.
///
/// Events arrive in this order for every subject run:
/// `iterations_start`, then `iteration_start`/`iteration_end` pairs, then
/// `iterations_end`. A driver may re-enter `iterations_start` for the same
/// subject after a run ended with rejected iterations.
pub trait ProgressLogger {
    fn benchmark_start(&mut self, benchmark: &BenchmarkMetadata) -> io::Result<()>;

    fn iterations_start(&mut self, collection: &IterationCollection) -> io::Result<()>;

    fn iteration_start(
        &mut self,
        collection: &IterationCollection,
        iteration: &Iteration,
    ) -> io::Result<()>;

    fn iteration_end(
        &mut self,
        collection: &IterationCollection,
        iteration: &Iteration,
    ) -> io::Result<()>;

    fn iterations_end(&mut self, collection: &IterationCollection) -> io::Result<()>;

    fn suite_end(&mut self) -> io::Result<()>;
}
