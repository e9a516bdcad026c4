//! Runs and subjects with predictable measurements.

use benchview_core::{
    AggregateIterationResult, BenchmarkMetadata, BenchmarkResult, Iteration, ParameterSet,
    SubjectMetadata, SubjectResult, SuiteResult,
};

/// Iterations with the given times.
///
/// Iteration `i` gets memory `1000 * (i + 1)` and a memory delta of `i - 1`
/// (so -1, 0, +1, ...); inclusive values are twice those.
pub fn iterations(parameters: &ParameterSet, times: &[f64]) -> Vec<Iteration> {
    times
        .iter()
        .enumerate()
        .map(|(i, &time)| {
            let memory = 1000 * (i as u64 + 1);
            let diff = i as i64 - 1;
            Iteration::new(i, parameters.clone())
                .with_time(time)
                .with_memory(memory, diff)
                .with_memory_inclusive(memory * 2, diff * 2)
        })
        .collect()
}

/// One run over `times`.
pub fn run(parameters: ParameterSet, times: &[f64]) -> AggregateIterationResult {
    AggregateIterationResult::from_iterations(iterations(&parameters, times))
}

pub fn subject(name: &str, runs: Vec<AggregateIterationResult>) -> SubjectResult {
    let mut subject = SubjectResult::new(SubjectMetadata::new(0, name));
    for run in runs {
        subject.add_run(run);
    }
    subject
}

/// A subject with one run per `(size, batch)` combination, sizes outermost.
///
/// Every run has `iterations` iterations; iteration `i` of the run for
/// `(size, batch)` takes `size * 100 + batch * 10 + i` microseconds.
pub fn exploded_subject(sizes: &[i64], batches: &[i64], iterations: usize) -> SubjectResult {
    let mut runs = Vec::new();
    for &size in sizes {
        for &batch in batches {
            let params = ParameterSet::new().with("size", size).with("batch", batch);
            let times: Vec<f64> = (0..iterations)
                .map(|i| (size * 100 + batch * 10) as f64 + i as f64)
                .collect();
            runs.push(run(params, &times));
        }
    }
    subject("benchExplode", runs)
}

/// A suite with one benchmark holding the given subjects.
pub fn suite(class: &str, subjects: Vec<SubjectResult>) -> SuiteResult {
    let mut metadata = BenchmarkMetadata::new(class);
    let mut benchmark = BenchmarkResult::new(BenchmarkMetadata::new(class));
    for (index, mut subject) in subjects.into_iter().enumerate() {
        subject.metadata.index = index;
        metadata.subjects.push(subject.metadata.clone());
        benchmark.subjects.push(subject);
    }
    benchmark.metadata = metadata;
    SuiteResult::new().with_benchmark(benchmark)
}
