//! Dataset loading. Dispatch by file extension.
//!
//! Supported formats:
//! * `.csv`  – header row with column names, one record per row
//! * `.json` – records-oriented array of flat objects, the default
//!   `df.to_json(orient="records")` layout
//!
//! Column names are trimmed here and nowhere else.

use std::path::Path;

use serde_json::Value as JsonValue;
use thiserror::Error;

use super::{CellValue, Dataset, Record};

/// Errors raised while loading a dataset file.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported dataset extension: .{0}")]
    UnsupportedExtension(String),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Row {row}: {message}")]
    MalformedRow { row: usize, message: String },
}

/// Load a dataset from a file, dispatching on the extension.
pub fn load_file(path: &Path) -> Result<Dataset, DatasetError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(DatasetError::UnsupportedExtension(other.to_string())),
    }
}

fn load_csv(path: &Path) -> Result<Dataset, DatasetError> {
    let mut reader = csv::Reader::from_path(path)?;

    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut records = Vec::new();
    for result in reader.records() {
        let raw = result?;
        let mut record = Record::new();
        for (idx, cell) in raw.iter().enumerate() {
            if let Some(column) = columns.get(idx) {
                record.insert(column.clone(), guess_cell_type(cell));
            }
        }
        records.push(record);
    }

    Ok(Dataset::new(columns, records))
}

fn load_json(path: &Path) -> Result<Dataset, DatasetError> {
    let text = std::fs::read_to_string(path)?;
    let root: JsonValue = serde_json::from_str(&text)?;

    let rows = root.as_array().ok_or(DatasetError::MalformedRow {
        row: 0,
        message: "expected a top-level JSON array of records".to_string(),
    })?;

    // Column order is first-seen key order across all records.
    let mut columns: Vec<String> = Vec::new();
    let mut records = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let obj = row.as_object().ok_or_else(|| DatasetError::MalformedRow {
            row: i,
            message: "expected a JSON object".to_string(),
        })?;

        let mut record = Record::new();
        for (key, value) in obj {
            let column = key.trim().to_string();
            if !columns.contains(&column) {
                columns.push(column.clone());
            }
            record.insert(column, json_to_cell(value));
        }
        records.push(record);
    }

    Ok(Dataset::new(columns, records))
}

fn json_to_cell(value: &JsonValue) -> CellValue {
    match value {
        JsonValue::String(s) => CellValue::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::String(other.to_string()),
    }
}

fn guess_cell_type(s: &str) -> CellValue {
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    if s == "true" || s == "false" {
        return CellValue::Bool(s == "true");
    }
    CellValue::String(s.to_string())
}
