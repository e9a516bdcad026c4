//! Grid geometry for the live renderer.

/// Cells per grid row.
pub const NUMBER_COLS: usize = 15;

/// Left margin reserved for the subject label on every row.
pub const INDENT: usize = 4;

/// Column width a session starts with.
pub const INITIAL_COL_WIDTH: usize = 6;

/// Column width and cell positions.
///
/// The width only ever grows: a cell wider than the current width widens
/// every column to the cell's width plus one separating space.
///
/// # Example
///
/// ```
/// use benchview_console::GridLayout;
///
/// let layout = GridLayout::new();
/// assert_eq!(layout.y_pos(16), 1);
/// assert_eq!(layout.x_pos(16), 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    col_width: usize,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl GridLayout {
    pub fn new() -> Self {
        Self {
            col_width: INITIAL_COL_WIDTH,
        }
    }

    pub fn col_width(&self) -> usize {
        self.col_width
    }

    /// 1-based terminal column of the cell for `index`.
    pub fn x_pos(&self, index: usize) -> usize {
        INDENT + (index % NUMBER_COLS) * self.col_width + 1
    }

    /// Grid row (0 = top) of the cell for `index`.
    pub fn y_pos(&self, index: usize) -> usize {
        index / NUMBER_COLS
    }

    /// Number of lines a grid of `count` cells occupies.
    pub fn line_count(&self, count: usize) -> usize {
        count.div_ceil(NUMBER_COLS).max(1)
    }

    /// Widens the columns if `text` does not fit. Returns whether it grew.
    pub fn grow_to_fit(&mut self, text: &str) -> bool {
        let width = display_width(text);
        if width > self.col_width {
            self.col_width = width + 1;
            true
        } else {
            false
        }
    }

    /// Left-aligns `text` in a cell.
    pub fn pad(&self, text: &str) -> String {
        format!("{:<width$}", text, width = self.col_width)
    }

    /// The `#<index>` label that starts the first grid line.
    pub fn label(&self, subject_index: usize) -> String {
        format!("{:<width$}", format!("#{}", subject_index), width = INDENT)
    }
}

/// Width of `text` in terminal columns, counting one per character.
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}
