//! Tests for the measurement model.

use super::*;

#[test]
fn test_format_decimal_precision() {
    assert_eq!(format_decimal(1.0 / 3.0, 4), "0.3333");
    assert_eq!(format_decimal(1.0 / 3.0, 0), "0");
    assert_eq!(format_decimal(2.5, 8), "2.50000000");
}

#[test]
fn test_memory_diff_sign() {
    assert_eq!(format_memory_diff(5), "+5");
    assert_eq!(format_memory_diff(-5), "-5");
    assert_eq!(format_memory_diff(0), "0");
    assert_eq!(format_memory_diff(12_345), "+12,345");
    assert_eq!(format_memory_diff(-12_345), "-12,345");
}

#[test]
fn test_memory_grouping() {
    assert_eq!(format_memory(0), "0");
    assert_eq!(format_memory(1_048_576), "1,048,576");
}

#[test]
fn test_time_unit_conversion() {
    assert_eq!(TimeUnit::Seconds.convert(1_500_000.0, OutputMode::Time), 1.5);
    assert_eq!(TimeUnit::Microseconds.convert(0.0, OutputMode::Throughput), 0.0);
    assert_eq!(TimeUnit::Milliseconds.format(1234.0, OutputMode::Time, 3), "1.234");
    assert_eq!(TimeUnit::Microseconds.dest_suffix(OutputMode::Time), "μs");
    assert_eq!(TimeUnit::Seconds.dest_suffix(OutputMode::Throughput), "ops/s");
}

#[test]
fn test_collection_lifecycle() {
    let params = ParameterSet::new().with("size", 10);
    let mut collection = IterationCollection::new(SubjectMetadata::new(1, "benchFoo"), 2, params);

    assert!(!collection.is_frozen());
    let iteration = collection
        .record(
            1,
            Measurement {
                time: 4.0,
                memory: 100,
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(iteration.index(), 1);
    assert_eq!(iteration.time(), 4.0);
    assert_eq!(
        iteration.parameters().get("size"),
        Some(&ParamValue::Int(10))
    );

    assert_eq!(
        collection.record(5, Measurement::default()),
        Err(MeasurementError::IndexOutOfRange { index: 5, len: 2 })
    );

    collection.fail(IterationError::new("boom"));
    assert!(collection.has_exception());
    assert!(collection.is_frozen());
    assert_eq!(collection.reject(0), Err(MeasurementError::Frozen));
}

#[test]
fn test_collection_rejects_invalid_time() {
    let mut collection =
        IterationCollection::new(SubjectMetadata::new(0, "benchFoo"), 1, ParameterSet::new());
    let result = collection.record(
        0,
        Measurement {
            time: -1.0,
            ..Default::default()
        },
    );
    assert_eq!(result, Err(MeasurementError::InvalidTime(-1.0)));
}

#[test]
fn test_time_summary() {
    let iterations: Vec<_> = [3.0, 1.0, 2.0]
        .iter()
        .enumerate()
        .map(|(i, t)| Iteration::new(i, ParameterSet::new()).with_time(*t))
        .collect();
    let summary = TimeSummary::from_iterations(&iterations);
    assert_eq!(summary.min, 1.0);
    assert_eq!(summary.max, 3.0);
    assert_eq!(summary.total, 6.0);
    assert_eq!(summary.average, 2.0);

    assert_eq!(TimeSummary::from_iterations(&[]), TimeSummary::default());
}

#[test]
fn test_parameter_set_order() {
    let params = ParameterSet::new().with("a", 1).with("b", "x").with("c", true);
    let names: Vec<_> = params.without("b").names().map(String::from).collect();
    assert_eq!(names, vec!["a", "c"]);
    assert_eq!(ParamValue::from(true).to_string(), "true");
    assert_eq!(ParamValue::Null.to_string(), "");
}

#[test]
fn test_subject_runs_are_indexed() {
    let subject = SubjectResult::new(SubjectMetadata::new(0, "benchFoo"))
        .with_run(AggregateIterationResult::from_iterations(vec![]))
        .with_run(AggregateIterationResult::from_iterations(vec![]));
    let indices: Vec<_> = subject.aggregate_iteration_results().map(|(i, _)| i).collect();
    assert_eq!(indices, vec![0, 1]);
}
