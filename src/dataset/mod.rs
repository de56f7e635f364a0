//! The in-memory tabular dataset.
//!
//! Loaded once at process start and never mutated afterwards; request
//! handlers share it read-only behind an `Arc`. Column names are
//! whitespace-trimmed exactly once, at load time.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

mod loader;
mod value;

pub use loader::{load_file, DatasetError};
pub use value::CellValue;

/// One row of the dataset: column name → cell.
///
/// Serializes transparently as a JSON object so response tables carry the
/// row verbatim, untyped columns included.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    cells: BTreeMap<String, CellValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: CellValue) {
        self.cells.insert(column.into(), value);
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// The cell's text, if the column exists and holds a string.
    pub fn text(&self, column: &str) -> Option<&str> {
        self.cells.get(column).and_then(CellValue::as_str)
    }

    /// The cell as a number, if the column exists and is numeric.
    pub fn number(&self, column: &str) -> Option<f64> {
        self.cells.get(column).and_then(CellValue::as_f64)
    }

    /// The cell as a year (integer-like numeric).
    pub fn year(&self, column: &str) -> Option<i64> {
        self.cells.get(column).and_then(CellValue::as_year)
    }
}

/// Names of the well-known columns the analyses read.
///
/// Defaults match the production data file's headers.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ColumnSpec {
    /// Area name column (the primary filter key).
    pub area: String,
    /// Year column.
    pub year: String,
    /// Demand metric column (sales volume).
    pub demand: String,
    /// Price metric column (average unit rate).
    pub price: String,
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self {
            area: "final location".to_string(),
            year: "year".to_string(),
            demand: "total_sales - igr".to_string(),
            price: "flat - weighted average rate".to_string(),
        }
    }
}

/// The complete loaded dataset: ordered records plus the ordered list of
/// (trimmed) column names.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    columns: Vec<String>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Self { records, columns }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows whose `column` cell equals `value_lower`, compared
    /// case-insensitively. The needle must already be lowercased.
    pub fn rows_matching(&self, column: &str, value_lower: &str) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|rec| {
                rec.text(column)
                    .is_some_and(|t| t.to_lowercase() == value_lower)
            })
            .collect()
    }

    /// Sorted distinct text values of a column.
    pub fn distinct_text(&self, column: &str) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .records
            .iter()
            .filter_map(|rec| rec.text(column))
            .collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// Minimum and maximum year present in a column.
    pub fn year_span(&self, column: &str) -> Option<(i64, i64)> {
        let mut years = self.records.iter().filter_map(|rec| rec.year(column));
        let first = years.next()?;
        let (min, max) = years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));
        Some((min, max))
    }
}
