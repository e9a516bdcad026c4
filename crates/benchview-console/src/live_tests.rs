//! Tests for the live progress grid.

use benchview_config::ProgressOptions;
use benchview_core::{
    IterationCollection, IterationError, IterationStats, Measurement, OutputMode, ParameterSet,
    SubjectMetadata, TimeUnit,
};
use benchview_test::{benchmark, measured_collection, pending_collection};

use crate::{LiveRenderer, PlainOutput, ProgressLogger, RecordingOutput, RenderPhase};

fn renderer() -> LiveRenderer<RecordingOutput> {
    LiveRenderer::new(RecordingOutput::new(), ProgressOptions::new()).unwrap()
}

fn take(renderer: &mut LiveRenderer<RecordingOutput>) -> String {
    renderer.output_mut().take()
}

fn measure(collection: &mut IterationCollection, index: usize, time: f64) {
    collection
        .record(
            index,
            Measurement {
                time,
                ..Default::default()
            },
        )
        .unwrap();
}

#[test]
fn test_invalid_options_rejected() {
    let options = ProgressOptions::new().with_precision(50);
    assert!(LiveRenderer::new(RecordingOutput::new(), options).is_err());
}

#[test]
fn test_benchmark_header() {
    let mut renderer = renderer();
    let metadata = benchmark("SortBench", &["benchQuick", "benchMerge"]);

    renderer.benchmark_start(&metadata).unwrap();
    assert_eq!(
        take(&mut renderer),
        "<comment>SortBench</comment> (#0 benchQuick, #1 benchMerge)\n\n"
    );

    renderer.benchmark_start(&metadata).unwrap();
    assert!(take(&mut renderer).starts_with("\n<comment>SortBench</comment>"));
}

#[test]
fn test_separate_renderers_do_not_share_first_flag() {
    let metadata = benchmark("SortBench", &["benchQuick"]);

    let mut first = renderer();
    first.benchmark_start(&metadata).unwrap();
    let mut second = renderer();
    second.benchmark_start(&metadata).unwrap();

    assert_eq!(first.output().as_str(), second.output().as_str());
}

#[test]
fn test_thirty_iterations_draw_two_rows() {
    let mut renderer = renderer();
    let collection = pending_collection(0, 30);

    renderer.iterations_start(&collection).unwrap();

    let expected = format!(
        "\x1B[1G#0  {}\n    {}0.000 (μs)\x1B[0J\x1B[1A",
        "0.000 ".repeat(15),
        "0.000 ".repeat(14)
    );
    assert_eq!(renderer.output().as_str(), expected);
    assert_eq!(renderer.current_line(), 0);
    assert_eq!(renderer.phase(), RenderPhase::DrawingRow);
}

#[test]
fn test_full_row_does_not_add_empty_line() {
    let mut renderer = renderer();
    let collection = pending_collection(3, 15);

    renderer.iterations_start(&collection).unwrap();

    let output = renderer.output().as_str();
    assert!(!output.contains('\n'));
    assert!(output.starts_with("\x1B[1G#3  0.000"));
    assert!(output.ends_with("0.000 (μs)\x1B[0J"));
}

#[test]
fn test_cells_written_in_place() {
    let mut renderer = renderer();
    let mut collection = pending_collection(0, 20);

    renderer.iterations_start(&collection).unwrap();
    take(&mut renderer);

    renderer
        .iteration_start(&collection, &collection.iterations()[16])
        .unwrap();
    assert_eq!(
        take(&mut renderer),
        "\x1B[1B\x1B[11G<progress>0.000 </progress>"
    );
    assert_eq!(renderer.current_line(), 1);

    measure(&mut collection, 16, 1.5);
    renderer
        .iteration_end(&collection, &collection.iterations()[16])
        .unwrap();
    assert_eq!(take(&mut renderer), "\x1B[11G1.500 ");

    renderer
        .iteration_start(&collection, &collection.iterations()[17])
        .unwrap();
    assert_eq!(
        take(&mut renderer),
        "\x1B[17G<progress>0.000 </progress>"
    );
    assert_eq!(renderer.repaint_count(), 0);
}

#[test]
fn test_row_complete_then_next_row() {
    let mut renderer = renderer();
    let mut collection = pending_collection(0, 16);

    renderer.iterations_start(&collection).unwrap();
    measure(&mut collection, 14, 2.0);
    renderer
        .iteration_end(&collection, &collection.iterations()[14])
        .unwrap();
    assert_eq!(renderer.phase(), RenderPhase::RowComplete);

    take(&mut renderer);
    renderer
        .iteration_start(&collection, &collection.iterations()[15])
        .unwrap();
    assert!(take(&mut renderer).starts_with("\x1B[1B\x1B[5G"));
    assert_eq!(renderer.phase(), RenderPhase::DrawingRow);
}

#[test]
fn test_width_growth_repaints_once() {
    let mut renderer = renderer();
    let mut collection = pending_collection(0, 3);

    renderer.iterations_start(&collection).unwrap();
    take(&mut renderer);

    measure(&mut collection, 1, 1_234_567.0);
    renderer
        .iteration_end(&collection, &collection.iterations()[1])
        .unwrap();

    assert_eq!(renderer.layout().col_width(), 12);
    assert_eq!(renderer.repaint_count(), 1);
    assert_eq!(
        take(&mut renderer),
        "\x1B[1G#0  0.000       1234567.000 0.000 (μs)\x1B[0J\x1B[17G1234567.000 "
    );

    measure(&mut collection, 2, 7_654_321.0);
    renderer
        .iteration_end(&collection, &collection.iterations()[2])
        .unwrap();
    assert_eq!(renderer.repaint_count(), 1);
    assert_eq!(take(&mut renderer), "\x1B[29G7654321.000 ");
}

#[test]
fn test_width_growth_restores_cursor_row() {
    let mut renderer = renderer();
    let mut collection = pending_collection(0, 20);

    renderer.iterations_start(&collection).unwrap();
    renderer
        .iteration_start(&collection, &collection.iterations()[16])
        .unwrap();
    take(&mut renderer);

    measure(&mut collection, 16, 1_234_567.0);
    renderer
        .iteration_end(&collection, &collection.iterations()[16])
        .unwrap();

    let output = take(&mut renderer);
    assert_eq!(renderer.repaint_count(), 1);
    assert!(output.starts_with("\x1B[1A\x1B[1G#0  "));
    assert!(output.ends_with("\x1B[0J\x1B[1A\x1B[1B\x1B[17G1234567.000 "));
    assert_eq!(renderer.current_line(), 1);
}

#[test]
fn test_wide_times_fit_before_first_draw() {
    let mut renderer = renderer();
    let collection = measured_collection(&[1.0, 123_456.0]);

    renderer.iterations_start(&collection).unwrap();

    assert_eq!(renderer.layout().col_width(), 11);
    assert_eq!(renderer.repaint_count(), 0);
    assert_eq!(
        renderer.output().as_str(),
        "\x1B[1G#0  1.000      123456.000 (μs)\x1B[0J"
    );
}

#[test]
fn test_successful_run_prints_summary() {
    let mut renderer = renderer();
    let collection = measured_collection(&[1.0, 2.0]);

    renderer.iterations_start(&collection).unwrap();
    take(&mut renderer);
    renderer.iterations_end(&collection).unwrap();

    assert_eq!(
        take(&mut renderer),
        "\x1B[1G#0  1.000 2.000 (μs)\x1B[0J <comment>2 iterations</comment>\n"
    );
    assert_eq!(renderer.phase(), RenderPhase::Finalized);
    assert_eq!(renderer.current_line(), 0);
    assert_eq!(renderer.session().subjects(), 1);
}

#[test]
fn test_summary_with_stats() {
    let options = ProgressOptions::new().with_time_unit(TimeUnit::Milliseconds);
    let mut renderer = LiveRenderer::new(RecordingOutput::new(), options).unwrap();
    let collection = measured_collection(&[1_500.0]).with_stats(IterationStats {
        mean: 1_500.0,
        mode: 1_400.0,
        rstdev: 2.5,
    });

    renderer.iterations_start(&collection).unwrap();
    take(&mut renderer);
    renderer.iterations_end(&collection).unwrap();

    assert_eq!(
        take(&mut renderer),
        "\x1B[1G#0  1.500 (ms)\x1B[0J <comment>[μ Mo]/r: 1.500 1.400 μRSD/r: 2.50%</comment>\n"
    );
}

#[test]
fn test_subject_unit_overrides_options() {
    let subject = SubjectMetadata::new(0, "benchThroughput")
        .with_time_unit(TimeUnit::Milliseconds)
        .with_output_mode(OutputMode::Throughput);
    let mut collection = IterationCollection::new(subject, 1, ParameterSet::new());
    measure(&mut collection, 0, 500.0);

    let mut renderer = renderer();
    renderer.iterations_start(&collection).unwrap();

    assert_eq!(
        renderer.output().as_str(),
        "\x1B[1G#0  2.000 (ops/ms)\x1B[0J"
    );
}

#[test]
fn test_exception_ends_session_with_error() {
    let mut renderer = renderer();
    let mut collection = pending_collection(0, 2);

    renderer.iterations_start(&collection).unwrap();
    take(&mut renderer);
    collection.fail(IterationError::new("boom"));
    renderer.iterations_end(&collection).unwrap();

    assert_eq!(
        take(&mut renderer),
        "\x1B[1G#0  0.000 0.000 (μs)\x1B[0J <error>ERROR</error>\x1B[0K\n"
    );
    assert_eq!(renderer.phase(), RenderPhase::Finalized);
    assert_eq!(renderer.session().errors(), 1);
    assert_eq!(renderer.session().subjects(), 1);
}

#[test]
fn test_rejects_carried_into_next_run() {
    let mut renderer = renderer();

    let mut first = measured_collection(&[1.0, 2.0, 3.0]);
    first.reject(1).unwrap();
    renderer.iterations_start(&first).unwrap();
    take(&mut renderer);
    renderer.iterations_end(&first).unwrap();

    assert_eq!(
        take(&mut renderer),
        "\x1B[1G#0  1.000 2.000 3.000 (μs)\x1B[0J"
    );
    assert_eq!(renderer.phase(), RenderPhase::Idle);
    assert!(renderer.rejects().contains(&1));

    let second = measured_collection(&[1.0, 2.0, 3.0]);
    renderer.iterations_start(&second).unwrap();
    assert_eq!(
        take(&mut renderer),
        "\x1B[1G#0  1.000 <error>2.000 </error>3.000 (μs)\x1B[0J"
    );

    renderer.iterations_end(&second).unwrap();
    assert_eq!(
        take(&mut renderer),
        "\x1B[1G#0  1.000 <error>2.000 </error>3.000 (μs)\x1B[0J <comment>3 iterations</comment>\n"
    );
    assert!(renderer.rejects().is_empty());
    assert_eq!(renderer.phase(), RenderPhase::Finalized);

    renderer.suite_end().unwrap();
    assert_eq!(
        take(&mut renderer),
        "\n1 subjects, 6 iterations, 1 rejects, 0 errors\n"
    );
}

#[test]
fn test_plain_output_keeps_data_lines() {
    let mut renderer = LiveRenderer::new(PlainOutput::new(Vec::new()), ProgressOptions::new()).unwrap();
    let collection = measured_collection(&[1.0, 2.0]);

    renderer.iterations_start(&collection).unwrap();
    renderer
        .iteration_start(&collection, &collection.iterations()[0])
        .unwrap();
    renderer
        .iteration_end(&collection, &collection.iterations()[0])
        .unwrap();
    renderer.iterations_end(&collection).unwrap();

    let written = String::from_utf8(renderer.into_output().into_inner()).unwrap();
    assert_eq!(
        written,
        "#0  1.000 2.000 (μs)\n1.000 \n1.000 \n#0  1.000 2.000 (μs) 2 iterations\n"
    );
}
