//! The query analysis engine.
//!
//! `Analyzer` is the single entry point: classify the query, dispatch to
//! the matching branch, assemble an `Analysis`. Every path resolves to an
//! answer; unusable queries become clarification or fallback summaries,
//! never errors.

use std::sync::Arc;

mod aggregate;
mod compare;
mod growth;
mod profile;
mod response;

pub use aggregate::{mean_by_year, round2};
pub use response::{Analysis, Chart, NamedSeries};

use crate::dataset::{ColumnSpec, Dataset, Record};
use crate::query::{self, Intent};

/// Answers queries against a loaded dataset.
///
/// Holds the shared read-only dataset and the configured column names;
/// carries no per-request state, so one instance serves any number of
/// concurrent requests.
pub struct Analyzer {
    dataset: Arc<Dataset>,
    columns: ColumnSpec,
}

impl Analyzer {
    pub fn new(dataset: Arc<Dataset>, columns: ColumnSpec) -> Self {
        Self { dataset, columns }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn columns(&self) -> &ColumnSpec {
        &self.columns
    }

    /// Answer one raw query.
    pub fn answer(&self, raw_query: &str) -> Analysis {
        let normalized = query::normalize(raw_query);
        let intent = query::classify(&normalized, self.dataset.has_column(&self.columns.area));
        tracing::debug!(?intent, "classified query");

        match intent {
            Intent::Compare { first, second } => compare::run(self, &first, &second),
            Intent::MalformedCompare => compare::clarify(),
            Intent::PriceGrowth { area, window } => growth::run(self, &area, window),
            Intent::AreaProfile { area } => profile::run(self, &area),
            Intent::Unrecognized => fallback(),
        }
    }

    /// Rows whose area column matches `area_lower` case-insensitively.
    pub(crate) fn area_rows(&self, area_lower: &str) -> Vec<&Record> {
        self.dataset.rows_matching(&self.columns.area, area_lower)
    }
}

/// The fixed answer for queries no rule recognizes.
pub fn fallback() -> Analysis {
    Analysis {
        summary: "Sorry, I couldn't understand that query.".to_string(),
        chart: Chart::empty_union(),
        table: Vec::new(),
    }
}
