//! View model the tables render into
//!
//! Tables never touch the terminal directly: they clone a [`RowTemplate`] into a
//! [`RowView`], fill in cell text, tone and bar widths, then hand the row to a
//! [`ViewSink`]. The widget layer paints whatever the sink holds.

/// Colour class of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Positive,
    Negative,
    Bid,
    Ask,
}

impl Tone {
    /// Classify a rendered signed value by its text.
    ///
    /// Anything starting with `-` is negative, so a value that rounds to `-0.0`
    /// is still classed negative.
    pub fn from_signed_text(text: &str) -> Self {
        if text.starts_with('-') {
            Tone::Negative
        } else {
            Tone::Positive
        }
    }
}

/// A single table cell
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    pub text: String,
    pub tone: Tone,
    /// Depth bar width in percent of the cell, unclamped
    pub bar_width: Option<f64>,
}

/// A rendered row: its cells plus named auxiliary values kept alongside the row
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowView {
    cells: Vec<Cell>,
    data: Vec<(&'static str, f64)>,
}

impl RowView {
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, column: usize) -> Option<&Cell> {
        self.cells.get(column)
    }

    pub fn text(&self, column: usize) -> Option<&str> {
        self.cells.get(column).map(|c| c.text.as_str())
    }

    pub fn set_text(&mut self, column: usize, text: impl Into<String>) {
        if let Some(cell) = self.cells.get_mut(column) {
            cell.text = text.into();
        }
    }

    pub fn set_tone(&mut self, column: usize, tone: Tone) {
        if let Some(cell) = self.cells.get_mut(column) {
            cell.tone = tone;
        }
    }

    pub fn set_bar_width(&mut self, column: usize, percent: f64) {
        if let Some(cell) = self.cells.get_mut(column) {
            cell.bar_width = Some(percent);
        }
    }

    /// Attach (or overwrite) an auxiliary value
    pub fn set_data(&mut self, key: &'static str, value: f64) {
        match self.data.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.data.push((key, value)),
        }
    }

    pub fn data(&self, key: &str) -> Option<f64> {
        self.data.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }
}

/// Blueprint every row of a table is cloned from
#[derive(Debug, Clone, PartialEq)]
pub struct RowTemplate {
    headers: &'static [&'static str],
    tones: Vec<Tone>,
}

impl RowTemplate {
    pub fn new(headers: &'static [&'static str]) -> Self {
        Self {
            headers,
            tones: vec![Tone::Neutral; headers.len()],
        }
    }

    /// Set the default tone of a column
    pub fn with_tone(mut self, column: usize, tone: Tone) -> Self {
        if let Some(t) = self.tones.get_mut(column) {
            *t = tone;
        }
        self
    }

    pub fn headers(&self) -> &'static [&'static str] {
        self.headers
    }

    pub fn columns(&self) -> usize {
        self.headers.len()
    }

    /// Clone an empty row with one cell per column
    pub fn instantiate(&self) -> RowView {
        RowView {
            cells: self
                .tones
                .iter()
                .map(|tone| Cell {
                    tone: *tone,
                    ..Cell::default()
                })
                .collect(),
            data: Vec::new(),
        }
    }
}

/// Destination for rendered rows
pub trait ViewSink {
    /// Append a row to the end of the body
    fn append_row(&mut self, row: RowView);

    /// Rows appended so far, mutable so a table can re-walk them
    fn rows_mut(&mut self) -> &mut [RowView];

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory table body painted by the widget layer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableBody {
    rows: Vec<RowView>,
}

impl TableBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[RowView] {
        &self.rows
    }
}

impl ViewSink for TableBody {
    fn append_row(&mut self, row: RowView) {
        self.rows.push(row);
    }

    fn rows_mut(&mut self) -> &mut [RowView] {
        &mut self.rows
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}
