//! Table command handler

use anyhow::{bail, Context, Result};
use std::io::{self, Read};

use huelog::{Alignment, Colorizers, Table, TableColumn};

use super::parse_value;
use crate::cli::{AlignArg, ExportFormat};

impl From<AlignArg> for Alignment {
    fn from(align: AlignArg) -> Self {
        match align {
            AlignArg::Left => Alignment::Left,
            AlignArg::Right => Alignment::Right,
            AlignArg::Center => Alignment::Center,
        }
    }
}

/// Build a table from delimited text: the first record names the columns,
/// each later record fills one row. Short records leave their trailing
/// columns shorter; surplus fields are ignored.
pub fn build_table(input: &str, delimiter: u8, alignment: Alignment) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(input.as_bytes());

    let colorizers = Colorizers::global();
    let mut columns: Vec<TableColumn> = reader
        .headers()
        .context("Failed to read header line")?
        .iter()
        .map(|name| TableColumn::new(name.trim(), alignment))
        .collect();

    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Failed to read row {}", line + 1))?;
        if record.len() > columns.len() {
            tracing::debug!(row = line + 1, fields = record.len(), "dropping surplus fields");
        }
        for (column, field) in columns.iter_mut().zip(record.iter()) {
            column.push(parse_value(field, colorizers.config()));
        }
    }

    Ok(Table::new(columns))
}

/// Render stdin as a table, or export it.
#[cfg(not(tarpaulin_include))]
pub fn handle(delimiter: char, export: Option<ExportFormat>, align: AlignArg) -> Result<()> {
    if !delimiter.is_ascii() {
        bail!("Delimiter must be a single ASCII character, got {:?}", delimiter);
    }
    let delimiter = delimiter as u8;

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;
    if input.trim().is_empty() {
        bail!("No input: expected a header line on stdin");
    }

    let table = build_table(&input, delimiter, align.into())?;
    let output = match export {
        None => table.to_string(),
        Some(ExportFormat::Csv) => table.to_csv(delimiter)?,
        Some(ExportFormat::Json) => table.to_json()?,
        Some(ExportFormat::Yaml) => table.to_yaml()?,
    };
    println!("{}", output.trim_end_matches('\n'));
    Ok(())
}
