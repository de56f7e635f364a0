//! Dynamically typed cell values.
//!
//! Source files carry a mix of text, integer, and float columns that must
//! pass through to response tables verbatim, so cells are kept dynamically
//! typed and serialize untagged (as bare JSON scalars).

use serde::Serialize;

/// A single cell of the dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl CellValue {
    /// Interpret the cell as a number, widening integers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Interpret the cell as a year. Spreadsheet exports often carry year
    /// columns as floats, so integral floats are accepted too.
    pub fn as_year(&self) -> Option<i64> {
        match self {
            CellValue::Integer(i) => Some(*i),
            CellValue::Float(f) if f.is_finite() => Some(*f as i64),
            _ => None,
        }
    }

    /// The cell's text, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }
}
