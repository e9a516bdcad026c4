//! State shared by every benchmark a renderer reports on.

/// Suite-wide progress state.
///
/// Owned by the renderer instance, so separate renderers (and tests) never
/// observe each other's output history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    benchmarks: usize,
    subjects: usize,
    iterations: usize,
    rejects: usize,
    errors: usize,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a benchmark header; returns true for the first one.
    pub fn start_benchmark(&mut self) -> bool {
        self.benchmarks += 1;
        self.benchmarks == 1
    }

    /// Records a finished run of `iterations` iterations, `rejects` of
    /// them rejected.
    pub fn record_run(&mut self, iterations: usize, rejects: usize) {
        self.iterations += iterations;
        self.rejects += rejects;
    }

    /// Records a subject whose session ended, successfully or not.
    pub fn record_subject(&mut self, failed: bool) {
        self.subjects += 1;
        if failed {
            self.errors += 1;
        }
    }

    pub fn benchmarks(&self) -> usize {
        self.benchmarks
    }

    pub fn subjects(&self) -> usize {
        self.subjects
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn rejects(&self) -> usize {
        self.rejects
    }

    pub fn errors(&self) -> usize {
        self.errors
    }

    /// One-line tally, e.g. `2 subjects, 30 iterations, 1 rejects, 0 errors`.
    pub fn summary(&self) -> String {
        format!(
            "{} subjects, {} iterations, {} rejects, {} errors",
            self.subjects, self.iterations, self.rejects, self.errors
        )
    }
}
