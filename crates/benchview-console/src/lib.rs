//! Live terminal progress and console logging for benchview.
//!
//! - [`LiveRenderer`]: a [`ProgressLogger`] that draws a grid of iteration
//!   times and rewrites single cells in place as iterations run.
//! - [`Output`] sinks: [`AnsiOutput`] for terminals, [`PlainOutput`] for
//!   pipes and files, [`RecordingOutput`] for tests.
//! - [`init`]: installs a `tracing` layer that prints report pipeline and
//!   renderer events to stderr with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Report generated, suite finished
//! - **DEBUG**: Pipeline steps, rows built, grid repaints, subject sessions

mod layout;
mod live;
mod logger;
mod output;
mod session;

#[cfg(test)]
mod live_tests;
#[cfg(test)]
mod tests;

pub use layout::{display_width, GridLayout, INDENT, INITIAL_COL_WIDTH, NUMBER_COLS};
pub use live::{LiveRenderer, RenderPhase};
pub use logger::ProgressLogger;
pub use output::{AnsiOutput, Control, Output, PlainOutput, RecordingOutput, Style};
pub use session::SessionState;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

const DEFAULT_FILTER: &str = "benchview_report=info,benchview_console=info";

/// Installs the console logging layer.
///
/// Safe to call multiple times - only the first call has effect. `RUST_LOG`
/// overrides the default `info` level for the report and console crates.
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ReportConsoleLayer)
            .try_init();
    });
}

fn elapsed_secs() -> f64 {
    EPOCH
        .get()
        .map(|epoch| epoch.elapsed().as_secs_f64())
        .unwrap_or(0.0)
}

/// A tracing layer that formats benchview events with colors.
///
/// Lines go to stderr so they never land inside the progress grid on
/// stdout.
pub struct ReportConsoleLayer;

impl<S: Subscriber> Layer<S> for ReportConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let target = event.metadata().target();
        if !target.starts_with("benchview_report") && !target.starts_with("benchview_console") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{} {}", format_elapsed(), output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    step: Option<String>,
    subject: Option<String>,
    outcome: Option<String>,
    message: Option<String>,
    step_index: Option<u64>,
    rows: Option<u64>,
    tables: Option<u64>,
    duration_us: Option<u64>,
    col_width: Option<u64>,
    subjects: Option<u64>,
    iterations: Option<u64>,
    rejects: Option<u64>,
    errors: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "step_index" => self.step_index = Some(value),
            "rows" => self.rows = Some(value),
            "tables" => self.tables = Some(value),
            "duration_us" => self.duration_us = Some(value),
            "col_width" => self.col_width = Some(value),
            "subjects" => self.subjects = Some(value),
            "iterations" => self.iterations = Some(value),
            "rejects" => self.rejects = Some(value),
            "errors" => self.errors = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let value = Some(value.to_string());
        match field.name() {
            "event" => self.event = value,
            "step" => self.step = value,
            "subject" => self.subject = value,
            "outcome" => self.outcome = value,
            "message" => self.message = value,
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "step_start" => format_step_start(v),
        "step_end" => format_step_end(v),
        "rows_built" => format_rows_built(v),
        "report_generated" => format_report_generated(v),
        "grid_repaint" => format_grid_repaint(v),
        "iterations_rejected" => format_rejected(v),
        "session_end" => format_session_end(v),
        "suite_end" => format_suite_end(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs()).bright_black().to_string()
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_step_start(v: &EventVisitor) -> String {
    format!(
        "{} Step {} {} │ {} rows",
        "▶".bright_blue(),
        v.step_index.unwrap_or(0),
        v.step.as_deref().unwrap_or("Unknown").white().bold(),
        count(v.rows).bright_yellow(),
    )
}

fn format_step_end(v: &EventVisitor) -> String {
    format!(
        "{} Step {} {} │ {} rows │ {}",
        "◀".bright_blue(),
        v.step_index.unwrap_or(0),
        v.step.as_deref().unwrap_or("Unknown").white().bold(),
        count(v.rows).bright_yellow(),
        format_duration_us(v.duration_us.unwrap_or(0)).yellow(),
    )
}

fn format_rows_built(v: &EventVisitor) -> String {
    format!(
        "{} {} │ {} rows",
        "≡".bright_cyan(),
        v.subject.as_deref().unwrap_or("?").white(),
        count(v.rows).bright_yellow(),
    )
}

fn format_report_generated(v: &EventVisitor) -> String {
    format!(
        "{} Report generated │ {} tables │ {} rows",
        "■".bright_cyan().bold(),
        count(v.tables).bright_yellow(),
        count(v.rows).bright_yellow(),
    )
}

fn format_grid_repaint(v: &EventVisitor) -> String {
    format!(
        "{} {} │ column width {}",
        "↻".bright_magenta(),
        v.subject.as_deref().unwrap_or("?").white(),
        count(v.col_width).bright_yellow(),
    )
}

fn format_rejected(v: &EventVisitor) -> String {
    format!(
        "{} {} │ {} rejected, re-running",
        "↺".yellow(),
        v.subject.as_deref().unwrap_or("?").white(),
        count(v.rejects).bright_red(),
    )
}

fn format_session_end(v: &EventVisitor) -> String {
    let subject = v.subject.as_deref().unwrap_or("?");
    match v.outcome.as_deref() {
        Some("error") => format!(
            "{} {} │ {}",
            "✗".bright_red(),
            subject.white(),
            v.message.as_deref().unwrap_or("failed").bright_red(),
        ),
        _ => format!("{} {}", "✓".bright_green(), subject.white()),
    }
}

fn format_suite_end(v: &EventVisitor) -> String {
    let errors = v.errors.unwrap_or(0);
    let errors_text = if errors > 0 {
        count(v.errors).bright_red().to_string()
    } else {
        count(v.errors).bright_green().to_string()
    };
    format!(
        "{} Suite complete │ {} subjects │ {} iterations │ {} rejects │ {} errors",
        "■".bright_cyan().bold(),
        count(v.subjects).bright_yellow(),
        count(v.iterations).bright_yellow(),
        count(v.rejects).bright_yellow(),
        errors_text,
    )
}

fn format_duration_us(us: u64) -> String {
    if us < 1000 {
        format!("{}μs", us)
    } else if us < 1_000_000 {
        format!("{:.2}ms", us as f64 / 1000.0)
    } else {
        format!("{:.2}s", us as f64 / 1_000_000.0)
    }
}
