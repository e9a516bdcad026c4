//! Output sinks for the live renderer.
//!
//! The renderer never writes escape sequences itself. It emits text, styled
//! text and [`Control`] instructions, and the sink decides how to express
//! them: [`AnsiOutput`] for a terminal, [`PlainOutput`] for pipes and files,
//! [`RecordingOutput`] for inspecting exactly what was emitted.

use std::io::{self, Write};

use crossterm::cursor::{MoveDown, MoveToColumn, MoveUp};
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use owo_colors::OwoColorize;

/// Highlight applied to a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Headings and summaries.
    Comment,
    /// Rejected cells and failure markers.
    Error,
    /// The cell currently being measured.
    InProgress,
}

impl Style {
    /// Markup tag name used by [`RecordingOutput`].
    pub fn tag(self) -> &'static str {
        match self {
            Style::Comment => "comment",
            Style::Error => "error",
            Style::InProgress => "progress",
        }
    }
}

/// Cursor and screen instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Move to an absolute column on the current line (1-based).
    Column(usize),
    /// Move down `n` lines, keeping the column.
    Down(usize),
    /// Move up `n` lines, keeping the column.
    Up(usize),
    /// Clear from the cursor to the end of the line.
    ClearLine,
    /// Clear from the cursor to the end of the screen.
    ClearBelow,
}

impl Control {
    /// The ANSI escape sequence for this instruction.
    pub fn escape(self) -> String {
        match self {
            Control::Column(x) => format!("\x1B[{}G", x),
            Control::Down(n) => format!("\x1B[{}B", n),
            Control::Up(n) => format!("\x1B[{}A", n),
            Control::ClearLine => "\x1B[0K".to_string(),
            Control::ClearBelow => "\x1B[0J".to_string(),
        }
    }

    /// Whether this instruction moves the cursor.
    pub fn is_motion(self) -> bool {
        matches!(self, Control::Column(_) | Control::Down(_) | Control::Up(_))
    }
}

/// Destination for renderer output.
///
/// Writes must reach the underlying stream in call order; the renderer's
/// cursor bookkeeping depends on it.
pub trait Output {
    fn text(&mut self, text: &str) -> io::Result<()>;

    fn styled(&mut self, style: Style, text: &str) -> io::Result<()>;

    fn control(&mut self, control: Control) -> io::Result<()>;

    fn newline(&mut self) -> io::Result<()> {
        self.text("\n")
    }

    fn flush(&mut self) -> io::Result<()>;
}

impl<O: Output + ?Sized> Output for &mut O {
    fn text(&mut self, text: &str) -> io::Result<()> {
        (**self).text(text)
    }

    fn styled(&mut self, style: Style, text: &str) -> io::Result<()> {
        (**self).styled(style, text)
    }

    fn control(&mut self, control: Control) -> io::Result<()> {
        (**self).control(control)
    }

    fn newline(&mut self) -> io::Result<()> {
        (**self).newline()
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

/// Terminal sink: colors via `owo-colors`, cursor control via `crossterm`.
#[derive(Debug)]
pub struct AnsiOutput<W: Write> {
    writer: W,
    colors: bool,
}

impl AnsiOutput<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> AnsiOutput<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            colors: true,
        }
    }

    /// Disables or enables color; cursor control is unaffected.
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Output for AnsiOutput<W> {
    fn text(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())
    }

    fn styled(&mut self, style: Style, text: &str) -> io::Result<()> {
        if !self.colors {
            return self.text(text);
        }
        match style {
            Style::Comment => write!(self.writer, "{}", text.yellow()),
            Style::Error => write!(self.writer, "{}", text.white().on_red()),
            Style::InProgress => write!(self.writer, "{}", text.black().on_green()),
        }
    }

    fn control(&mut self, control: Control) -> io::Result<()> {
        match control {
            Control::Column(x) => queue!(self.writer, MoveToColumn(to_u16(x.saturating_sub(1)))),
            Control::Down(n) => queue!(self.writer, MoveDown(to_u16(n))),
            Control::Up(n) => queue!(self.writer, MoveUp(to_u16(n))),
            Control::ClearLine => queue!(self.writer, Clear(ClearType::UntilNewLine)),
            Control::ClearBelow => queue!(self.writer, Clear(ClearType::FromCursorDown)),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Sink for pipes and files.
///
/// Styles and control sequences are dropped. When the cursor would move
/// after text was written on the current line, a newline is written
/// instead, so every repaint lands on lines of its own.
#[derive(Debug)]
pub struct PlainOutput<W: Write> {
    writer: W,
    line_dirty: bool,
}

impl<W: Write> PlainOutput<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            line_dirty: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Output for PlainOutput<W> {
    fn text(&mut self, text: &str) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.writer.write_all(text.as_bytes())?;
        self.line_dirty = !text.ends_with('\n');
        Ok(())
    }

    fn styled(&mut self, _style: Style, text: &str) -> io::Result<()> {
        self.text(text)
    }

    fn control(&mut self, control: Control) -> io::Result<()> {
        if control.is_motion() && self.line_dirty {
            self.writer.write_all(b"\n")?;
            self.line_dirty = false;
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// In-memory sink keeping tag markup and literal escapes.
///
/// Styled text is recorded as `<tag>text</tag>` (see [`Style::tag`]) and
/// controls as their escape sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingOutput {
    buffer: String,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Returns everything recorded so far and clears the buffer.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl Output for RecordingOutput {
    fn text(&mut self, text: &str) -> io::Result<()> {
        self.buffer.push_str(text);
        Ok(())
    }

    fn styled(&mut self, style: Style, text: &str) -> io::Result<()> {
        let tag = style.tag();
        self.buffer.push_str(&format!("<{}>{}</{}>", tag, text, tag));
        Ok(())
    }

    fn control(&mut self, control: Control) -> io::Result<()> {
        self.buffer.push_str(&control.escape());
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
