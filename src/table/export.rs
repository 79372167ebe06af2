//! CSV, JSON and YAML exports of [`Table::raw_data`]

use super::Table;
use crate::value::Value;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML export failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("export produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

fn csv_field(value: &Value) -> String {
    match value {
        Value::Nil => String::new(),
        other => other.to_string(),
    }
}

impl Table {
    /// Delimited text, header first. Nil cells are empty.
    pub fn to_csv(&self, delimiter: u8) -> Result<String, ExportError> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(Vec::new());
        for row in self.raw_data() {
            writer.write_record(row.iter().map(csv_field))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))?;
        Ok(String::from_utf8(bytes)?)
    }

    /// JSON array of rows, header first.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string(&self.raw_data())?)
    }

    /// YAML sequence of rows, header first.
    pub fn to_yaml(&self) -> Result<String, ExportError> {
        Ok(serde_yaml::to_string(&self.raw_data())?)
    }
}
