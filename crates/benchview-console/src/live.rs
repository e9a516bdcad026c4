//! Cursor-addressed progress grid.

use std::collections::BTreeSet;
use std::io;

use benchview_config::{ConfigError, ProgressOptions};
use benchview_core::{BenchmarkMetadata, Iteration, IterationCollection, OutputMode, TimeUnit};
use tracing::{debug, info};

use crate::layout::{GridLayout, INDENT, NUMBER_COLS};
use crate::logger::ProgressLogger;
use crate::output::{AnsiOutput, Control, Output, Style};
use crate::session::SessionState;

/// Where the renderer is within a subject's session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPhase {
    /// No run in progress, or a run ended with rejects and awaits re-entry.
    Idle,
    /// Writing cells along the current grid row.
    DrawingRow,
    /// The last cell of a row finished and more cells follow.
    RowComplete,
    /// The subject finished, successfully or with an error.
    Finalized,
}

enum Cell {
    Plain(String),
    Styled(Style, String),
}

/// Draws a grid of iteration times and updates single cells in place.
///
/// Iteration `i` lives in row `i / 15`, at terminal column
/// `4 + (i % 15) * width + 1`. The cursor is parked on the first grid row
/// between events; every write is relative to the row the renderer last
/// moved to, so nothing else may write to the same stream mid-session.
///
/// When a time does not fit its column, every column is widened and the
/// whole grid is repainted once, then the cursor returns to the first row.
///
/// # Example
///
/// ```
/// use benchview_config::ProgressOptions;
/// use benchview_console::{LiveRenderer, ProgressLogger, RecordingOutput};
/// use benchview_core::{IterationCollection, ParameterSet, SubjectMetadata};
///
/// let collection = IterationCollection::new(SubjectMetadata::new(0, "benchSort"), 2, ParameterSet::new());
/// let mut renderer = LiveRenderer::new(RecordingOutput::new(), ProgressOptions::new()).unwrap();
///
/// renderer.iterations_start(&collection).unwrap();
/// assert!(renderer.output().as_str().starts_with("\x1B[1G#0  0.000 0.000 (μs)"));
/// ```
#[derive(Debug)]
pub struct LiveRenderer<O: Output> {
    output: O,
    options: ProgressOptions,
    layout: GridLayout,
    current_line: usize,
    rejects: BTreeSet<usize>,
    phase: RenderPhase,
    repaints: usize,
    session: SessionState,
}

impl LiveRenderer<AnsiOutput<io::Stdout>> {
    /// A renderer on stdout, colored unless `options.colors` is off.
    pub fn stdout(options: ProgressOptions) -> Result<Self, ConfigError> {
        let output = AnsiOutput::stdout().with_colors(options.colors);
        Self::new(output, options)
    }
}

impl<O: Output> LiveRenderer<O> {
    /// Validates `options` and creates a renderer with a fresh session.
    pub fn new(output: O, options: ProgressOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self {
            output,
            options,
            layout: GridLayout::new(),
            current_line: 0,
            rejects: BTreeSet::new(),
            phase: RenderPhase::Idle,
            repaints: 0,
            session: SessionState::new(),
        })
    }

    /// Continues an existing session instead of starting a fresh one.
    pub fn with_session(mut self, session: SessionState) -> Self {
        self.session = session;
        self
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    pub fn into_output(self) -> O {
        self.output
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Grid row the cursor is on (0 = first row).
    pub fn current_line(&self) -> usize {
        self.current_line
    }

    /// Rejected indices carried into the next run of the current subject.
    pub fn rejects(&self) -> &BTreeSet<usize> {
        &self.rejects
    }

    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    /// Full repaints caused by column growth.
    pub fn repaint_count(&self) -> usize {
        self.repaints
    }

    fn display_unit(&self, collection: &IterationCollection) -> (TimeUnit, OutputMode) {
        let subject = collection.subject();
        (
            subject.output_time_unit.unwrap_or(self.options.time_unit),
            subject.output_mode.unwrap_or(self.options.output_mode),
        )
    }

    fn format_time(&self, collection: &IterationCollection, micros: f64) -> String {
        let (unit, mode) = self.display_unit(collection);
        unit.format(micros, mode, self.options.precision)
    }

    /// Widens the columns to fit every time in `collection`.
    fn fit_columns(&mut self, collection: &IterationCollection) {
        for iteration in collection.iter() {
            let text = self.format_time(collection, iteration.time());
            self.layout.grow_to_fit(&text);
        }
    }

    /// The padded cell for `iteration`, repainting first if it is too wide.
    fn cell_text(
        &mut self,
        collection: &IterationCollection,
        iteration: &Iteration,
    ) -> io::Result<String> {
        let text = self.format_time(collection, iteration.time());
        if self.layout.grow_to_fit(&text) {
            self.repaint(collection)?;
        }
        Ok(self.layout.pad(&text))
    }

    fn repaint(&mut self, collection: &IterationCollection) -> io::Result<()> {
        self.repaints += 1;
        debug!(
            event = "grid_repaint",
            subject = collection.subject().name.as_str(),
            col_width = self.layout.col_width() as u64,
        );
        self.reset_line_position()?;
        self.draw_grid(collection)?;
        self.reset_line_position()
    }

    /// Writes the whole grid from the start of the current line, leaving
    /// the cursor at the end of its last row.
    fn draw_grid(&mut self, collection: &IterationCollection) -> io::Result<()> {
        self.fit_columns(collection);

        let mut lines: Vec<Vec<Cell>> = Vec::new();
        let mut line = vec![Cell::Plain(self.layout.label(collection.subject().index))];
        for (position, iteration) in collection.iter().enumerate() {
            let text = self.layout.pad(&self.format_time(collection, iteration.time()));
            if self.rejects.contains(&iteration.index()) {
                line.push(Cell::Styled(Style::Error, text));
            } else {
                line.push(Cell::Plain(text));
            }

            let row_full = (position + 1) % NUMBER_COLS == 0;
            if row_full && position + 1 < collection.len() {
                let next = vec![Cell::Plain(" ".repeat(INDENT))];
                lines.push(std::mem::replace(&mut line, next));
            }
        }
        if let Some(Cell::Plain(text)) = line.last_mut() {
            let trimmed = text.trim_end().len();
            text.truncate(trimmed);
        }
        lines.push(line);
        self.current_line = lines.len() - 1;

        self.output.control(Control::Column(1))?;
        for (index, line) in lines.iter().enumerate() {
            if index > 0 {
                self.output.newline()?;
            }
            for cell in line {
                match cell {
                    Cell::Plain(text) => self.output.text(text)?,
                    Cell::Styled(style, text) => self.output.styled(*style, text)?,
                }
            }
        }

        let (unit, mode) = self.display_unit(collection);
        self.output.text(&format!(" ({})", unit.dest_suffix(mode)))?;
        self.output.control(Control::ClearBelow)
    }

    fn reset_line_position(&mut self) -> io::Result<()> {
        if self.current_line > 0 {
            self.output.control(Control::Up(self.current_line))?;
        }
        self.current_line = 0;
        Ok(())
    }

    fn move_to_row(&mut self, row: usize) -> io::Result<()> {
        if row > self.current_line {
            self.output.control(Control::Down(row - self.current_line))?;
        } else if row < self.current_line {
            self.output.control(Control::Up(self.current_line - row))?;
        }
        self.current_line = row;
        Ok(())
    }

    fn summary(&self, collection: &IterationCollection) -> String {
        match collection.stats() {
            Some(stats) => format!(
                "[μ Mo]/r: {} {} μRSD/r: {:.2}%",
                self.format_time(collection, stats.mean),
                self.format_time(collection, stats.mode),
                stats.rstdev
            ),
            None => format!("{} iterations", collection.len()),
        }
    }
}

impl<O: Output> ProgressLogger for LiveRenderer<O> {
    fn benchmark_start(&mut self, benchmark: &BenchmarkMetadata) -> io::Result<()> {
        if !self.session.start_benchmark() {
            self.output.newline()?;
        }

        let subjects: Vec<String> = benchmark
            .subjects
            .iter()
            .map(|subject| format!("#{} {}", subject.index, subject.name))
            .collect();

        self.output.styled(Style::Comment, &benchmark.class)?;
        self.output.text(&format!(" ({})", subjects.join(", ")))?;
        self.output.newline()?;
        self.output.newline()?;
        self.output.flush()
    }

    fn iterations_start(&mut self, collection: &IterationCollection) -> io::Result<()> {
        self.draw_grid(collection)?;
        self.reset_line_position()?;
        self.phase = RenderPhase::DrawingRow;
        self.output.flush()
    }

    fn iteration_start(
        &mut self,
        collection: &IterationCollection,
        iteration: &Iteration,
    ) -> io::Result<()> {
        let cell = self.cell_text(collection, iteration)?;
        self.move_to_row(self.layout.y_pos(iteration.index()))?;
        self.phase = RenderPhase::DrawingRow;

        self.output
            .control(Control::Column(self.layout.x_pos(iteration.index())))?;
        self.output.styled(Style::InProgress, &cell)?;
        self.output.flush()
    }

    fn iteration_end(
        &mut self,
        collection: &IterationCollection,
        iteration: &Iteration,
    ) -> io::Result<()> {
        let index = iteration.index();
        let cell = self.cell_text(collection, iteration)?;
        self.move_to_row(self.layout.y_pos(index))?;

        self.output.control(Control::Column(self.layout.x_pos(index)))?;
        self.output.text(&cell)?;

        if index % NUMBER_COLS == NUMBER_COLS - 1 && index + 1 < collection.len() {
            self.phase = RenderPhase::RowComplete;
        }
        self.output.flush()
    }

    fn iterations_end(&mut self, collection: &IterationCollection) -> io::Result<()> {
        let subject = collection.subject().name.as_str();

        self.reset_line_position()?;
        self.draw_grid(collection)?;
        self.session
            .record_run(collection.len(), collection.rejects().len());

        if let Some(error) = collection.exception() {
            self.output.text(" ")?;
            self.output.styled(Style::Error, "ERROR")?;
            self.output.control(Control::ClearLine)?;
            self.output.newline()?;

            self.session.record_subject(true);
            self.rejects.clear();
            self.current_line = 0;
            self.phase = RenderPhase::Finalized;
            debug!(
                event = "session_end",
                subject,
                outcome = "error",
                message = error.message(),
            );
            return self.output.flush();
        }

        if collection.has_rejects() {
            self.rejects = collection.rejects().clone();
            self.reset_line_position()?;
            self.phase = RenderPhase::Idle;
            debug!(
                event = "iterations_rejected",
                subject,
                rejects = self.rejects.len() as u64,
            );
            return self.output.flush();
        }

        self.rejects.clear();
        let summary = self.summary(collection);
        self.output.text(" ")?;
        self.output.styled(Style::Comment, &summary)?;
        self.output.newline()?;

        self.session.record_subject(false);
        self.current_line = 0;
        self.phase = RenderPhase::Finalized;
        debug!(event = "session_end", subject, outcome = "ok");
        self.output.flush()
    }

    fn suite_end(&mut self) -> io::Result<()> {
        self.output.newline()?;
        self.output.text(&self.session.summary())?;
        self.output.newline()?;

        info!(
            event = "suite_end",
            subjects = self.session.subjects() as u64,
            iterations = self.session.iterations() as u64,
            rejects = self.session.rejects() as u64,
            errors = self.session.errors() as u64,
        );
        self.output.flush()
    }
}
