//! Response payloads.
//!
//! The chart shape varies by branch and existing consumers depend on the
//! divergence: comparison emits `{labels, series}`, growth and profile
//! emit `{labels, values}`, and the fallback emits the union of all keys,
//! empty. Absent keys are omitted from the JSON, not serialized as null.

use serde::Serialize;

use crate::dataset::Record;

/// A fully assembled answer to one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub summary: String,
    pub chart: Chart,
    pub table: Vec<Record>,
}

/// One named value series of a multi-series chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedSeries {
    pub name: String,
    pub values: Vec<f64>,
}

/// Chart payload with branch-specific key presence.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Chart {
    pub labels: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<NamedSeries>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<f64>>,
}

impl Chart {
    /// Named series over shared labels (the comparison shape).
    pub fn multi(labels: Vec<String>, series: Vec<NamedSeries>) -> Self {
        Self {
            labels,
            series: Some(series),
            values: None,
        }
    }

    /// Empty multi-series chart.
    pub fn empty_multi() -> Self {
        Self::multi(Vec::new(), Vec::new())
    }

    /// One flat value list (the growth/profile shape).
    pub fn flat(labels: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            labels,
            series: None,
            values: Some(values),
        }
    }

    /// Empty flat chart.
    pub fn empty_flat() -> Self {
        Self::flat(Vec::new(), Vec::new())
    }

    /// Every key present and empty (the fallback shape).
    pub fn empty_union() -> Self {
        Self {
            labels: Vec::new(),
            series: Some(Vec::new()),
            values: Some(Vec::new()),
        }
    }
}
