//! Table columns

use std::fmt;
use std::sync::Arc;

use crate::colorize::Colorizers;
use crate::pad::Alignment;
use crate::value::Value;
use crate::width::visible_width;

/// Placeholder shown for cells a shorter column does not have.
pub const PLACEHOLDER: &str = "N/A";

/// Renders a value into colored cell text.
pub type Formatter = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// [`Colorizers::auto_value`] on a specific colorizer set.
pub fn auto_formatter(colorizers: Arc<Colorizers>) -> Formatter {
    Arc::new(move |value| colorizers.auto_value(value))
}

fn global_formatter() -> Formatter {
    Arc::new(|value| Colorizers::global().auto_value(value))
}

/// One pushed value with its rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub raw: Value,
    pub rendered: String,
    /// Visible width of `rendered`
    pub width: usize,
}

/// A named column of colorized cells.
///
/// Values are rendered once, on push. The header and the `N/A`
/// placeholder go through the same formatter. Pushing onto one column from
/// several threads needs outside synchronization.
#[derive(Clone)]
pub struct TableColumn {
    name: String,
    header: String,
    alignment: Alignment,
    pad_char: char,
    cells: Vec<Cell>,
    max_width: usize,
    formatter: Formatter,
}

impl fmt::Debug for TableColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableColumn")
            .field("name", &self.name)
            .field("alignment", &self.alignment)
            .field("pad_char", &self.pad_char)
            .field("cells", &self.cells.len())
            .field("max_width", &self.max_width)
            .finish()
    }
}

impl TableColumn {
    /// Column using the global colorizers and the configured pad character.
    pub fn new(name: &str, alignment: Alignment) -> Self {
        let pad_char = Colorizers::global().config().format.table_pad_char;
        Self::custom(name, alignment, pad_char, global_formatter())
    }

    pub fn left(name: &str) -> Self {
        Self::new(name, Alignment::Left)
    }

    pub fn right(name: &str) -> Self {
        Self::new(name, Alignment::Right)
    }

    pub fn center(name: &str) -> Self {
        Self::new(name, Alignment::Center)
    }

    pub fn custom(name: &str, alignment: Alignment, pad_char: char, formatter: Formatter) -> Self {
        let header = formatter(&Value::Str(name.to_string()));
        let max_width = visible_width(&header);
        Self {
            name: name.to_string(),
            header,
            alignment,
            pad_char,
            cells: Vec::new(),
            max_width,
            formatter,
        }
    }

    pub fn push(&mut self, value: impl Into<Value>) -> &mut Self {
        let raw = value.into();
        let rendered = (self.formatter)(&raw);
        let width = visible_width(&rendered);
        self.max_width = self.max_width.max(width);
        self.cells.push(Cell {
            raw,
            rendered,
            width,
        });
        self
    }

    pub fn push_all<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        for value in values {
            self.push(value);
        }
        self
    }

    /// Drop all values, keeping name, alignment and formatter.
    pub fn reset(&mut self) {
        self.cells.clear();
        self.max_width = visible_width(&self.header);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn pad_char(&self) -> char {
        self.pad_char
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.cells.iter().map(|c| &c.raw)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Widest of the header and the pushed values.
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    pub(crate) fn header(&self) -> &str {
        &self.header
    }

    pub(crate) fn placeholder(&self) -> String {
        (self.formatter)(&Value::Str(PLACEHOLDER.to_string()))
    }

    /// Width when the table has `rows` data rows; leaves room for the
    /// placeholder if this column is shorter.
    pub(crate) fn width_for(&self, rows: usize) -> usize {
        if self.cells.len() < rows {
            self.max_width.max(visible_width(&self.placeholder()))
        } else {
            self.max_width
        }
    }

    pub(crate) fn pad(&self, s: &str, width: usize) -> String {
        self.alignment.pad(s, width, self.pad_char)
    }
}
