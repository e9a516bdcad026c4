//! Tests for layout math, output sinks, session tallies and log formatting.

use super::*;

#[test]
fn test_cell_positions() {
    let layout = GridLayout::new();

    assert_eq!(layout.col_width(), INITIAL_COL_WIDTH);
    assert_eq!(layout.x_pos(0), 5);
    assert_eq!(layout.x_pos(14), 89);
    assert_eq!(layout.x_pos(15), 5);
    assert_eq!(layout.y_pos(14), 0);
    assert_eq!(layout.y_pos(16), 1);
    assert_eq!(layout.x_pos(16), 11);
}

#[test]
fn test_line_count() {
    let layout = GridLayout::new();

    assert_eq!(layout.line_count(0), 1);
    assert_eq!(layout.line_count(15), 1);
    assert_eq!(layout.line_count(16), 2);
    assert_eq!(layout.line_count(30), 2);
    assert_eq!(layout.line_count(31), 3);
}

#[test]
fn test_grow_to_fit() {
    let mut layout = GridLayout::new();

    assert!(!layout.grow_to_fit("123.45"));
    assert_eq!(layout.col_width(), 6);

    assert!(layout.grow_to_fit("1234.567"));
    assert_eq!(layout.col_width(), 9);
    assert_eq!(layout.x_pos(1), 14);

    assert!(!layout.grow_to_fit("1.0"));
    assert_eq!(layout.col_width(), 9);
}

#[test]
fn test_width_counts_characters() {
    assert_eq!(display_width("μs"), 2);
    assert_eq!(GridLayout::new().pad("μs"), "μs    ");
}

#[test]
fn test_label() {
    let layout = GridLayout::new();
    assert_eq!(layout.label(0), "#0  ");
    assert_eq!(layout.label(12), "#12 ");
}

#[test]
fn test_recording_output() {
    let mut output = RecordingOutput::new();

    output.text("a").unwrap();
    output.styled(Style::Error, "b").unwrap();
    output.control(Control::Column(3)).unwrap();
    output.control(Control::Down(2)).unwrap();
    output.control(Control::Up(1)).unwrap();
    output.control(Control::ClearLine).unwrap();
    output.control(Control::ClearBelow).unwrap();
    output.newline().unwrap();

    assert_eq!(
        output.as_str(),
        "a<error>b</error>\x1B[3G\x1B[2B\x1B[1A\x1B[0K\x1B[0J\n"
    );
    assert!(output.take().starts_with("a<error>"));
    assert!(output.as_str().is_empty());
}

#[test]
fn test_ansi_output_controls() {
    let mut output = AnsiOutput::new(Vec::new()).with_colors(false);

    output.styled(Style::Comment, "x").unwrap();
    output.control(Control::Column(5)).unwrap();
    output.control(Control::Down(2)).unwrap();
    output.control(Control::Up(3)).unwrap();
    output.control(Control::ClearLine).unwrap();
    output.control(Control::ClearBelow).unwrap();
    output.flush().unwrap();

    let written = String::from_utf8(output.into_inner()).unwrap();
    assert_eq!(written, "x\x1B[5G\x1B[2B\x1B[3A\x1B[K\x1B[J");
}

#[test]
fn test_ansi_output_colors() {
    let mut output = AnsiOutput::new(Vec::new());
    output.styled(Style::Error, "ERROR").unwrap();

    let written = String::from_utf8(output.into_inner()).unwrap();
    assert!(written.contains("ERROR"));
    assert!(written.starts_with('\x1B'));
}

#[test]
fn test_plain_output_strips_controls() {
    let mut output = PlainOutput::new(Vec::new());

    output.control(Control::Column(1)).unwrap();
    output.text("#0  1.000").unwrap();
    output.control(Control::ClearBelow).unwrap();
    output.control(Control::Column(5)).unwrap();
    output.styled(Style::InProgress, "2.000").unwrap();
    output.newline().unwrap();
    output.control(Control::Up(1)).unwrap();

    let written = String::from_utf8(output.into_inner()).unwrap();
    assert_eq!(written, "#0  1.000\n2.000\n");
}

#[test]
fn test_session_state() {
    let mut session = SessionState::new();

    assert!(session.start_benchmark());
    assert!(!session.start_benchmark());

    session.record_run(10, 2);
    session.record_run(10, 0);
    session.record_subject(false);
    session.record_run(5, 0);
    session.record_subject(true);

    assert_eq!(session.benchmarks(), 2);
    assert_eq!(session.summary(), "2 subjects, 25 iterations, 2 rejects, 1 errors");
}

#[test]
fn test_format_step_events() {
    let visitor = EventVisitor {
        event: Some("step_end".to_string()),
        step: Some("FilterCols".to_string()),
        step_index: Some(2),
        rows: Some(12_345),
        duration_us: Some(1_500),
        ..Default::default()
    };

    let line = format_event(&visitor);
    assert!(line.contains("FilterCols"));
    assert!(line.contains("12,345"));
    assert!(line.contains("1.50ms"));
}

#[test]
fn test_format_session_end_error() {
    let visitor = EventVisitor {
        event: Some("session_end".to_string()),
        subject: Some("benchSort".to_string()),
        outcome: Some("error".to_string()),
        message: Some("boom".to_string()),
        ..Default::default()
    };

    let line = format_event(&visitor);
    assert!(line.contains("benchSort"));
    assert!(line.contains("boom"));
}

#[test]
fn test_format_unknown_event_is_empty() {
    let visitor = EventVisitor {
        event: Some("other".to_string()),
        ..Default::default()
    };
    assert!(format_event(&visitor).is_empty());
    assert!(format_event(&EventVisitor::default()).is_empty());
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration_us(999), "999μs");
    assert_eq!(format_duration_us(2_500), "2.50ms");
    assert_eq!(format_duration_us(3_000_000), "3.00s");
}
