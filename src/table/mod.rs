//! Tables of colorized values
//!
//! A [`Table`] is a list of [`TableColumn`]s of possibly different lengths.
//! [`Table::rows`] lays them out with box-drawing borders;
//! [`Table::raw_data`] and the exports work on the unrendered values.

mod column;
mod export;
mod render;

pub use column::{auto_formatter, Cell, Formatter, TableColumn, PLACEHOLDER};
pub use export::ExportError;
pub use render::SEPARATOR;

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::value::Value;
use crate::width::strip_escapes;

#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<TableColumn>,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self { columns }
    }

    /// Two-column `Key | Value` table, one row per entry in key order.
    pub fn key_value(entries: BTreeMap<String, Value>) -> Self {
        let mut keys = TableColumn::left("Key");
        let mut values = TableColumn::left("Value");
        for (key, value) in entries {
            keys.push(key);
            values.push(value);
        }
        Self::new(vec![keys, values])
    }

    pub fn columns(&self) -> &[TableColumn] {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut [TableColumn] {
        &mut self.columns
    }

    pub fn push_column(&mut self, column: TableColumn) {
        self.columns.push(column);
    }

    /// Number of data rows: the length of the longest column.
    pub fn height(&self) -> usize {
        self.columns.iter().map(TableColumn::len).max().unwrap_or(0)
    }

    /// Header row followed by one row per data index, every row as wide
    /// as the column count.
    ///
    /// Missing cells are [`Value::Nil`]. String cells lose escapes and
    /// surrounding whitespace; separator cells (`---`) become empty, and a
    /// row made only of separators is left out. The table is not modified.
    pub fn raw_data(&self) -> Vec<Vec<Value>> {
        let height = self.height();
        if self.columns.iter().any(|c| c.len() < height) {
            debug!(rows = height, "filling short columns with nil");
        }

        let mut rows = Vec::with_capacity(height + 1);
        rows.push(
            self.columns
                .iter()
                .map(|c| Value::Str(c.name().to_string()))
                .collect(),
        );

        for index in 0..height {
            let mut only_separators = true;
            let row: Vec<Value> = self
                .columns
                .iter()
                .map(|column| match column.cells().get(index).map(|c| &c.raw) {
                    Some(Value::Str(s)) => {
                        let text = strip_escapes(s).trim().to_string();
                        if text == SEPARATOR {
                            Value::Str(String::new())
                        } else {
                            only_separators = false;
                            Value::Str(text)
                        }
                    }
                    Some(other) => {
                        only_separators = false;
                        other.clone()
                    }
                    None => {
                        only_separators = false;
                        Value::Nil
                    }
                })
                .collect();
            if !only_separators {
                rows.push(row);
            }
        }
        rows
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows().join("\n"))
    }
}
