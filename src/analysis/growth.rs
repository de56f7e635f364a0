//! Windowed price growth for one area.

use inflector::Inflector;

use super::aggregate::{mean_by_year, round2};
use super::response::{Analysis, Chart};
use super::Analyzer;
use crate::dataset::Record;

/// The window is anchored at the area's most recent year, not the current
/// date: `cutoff = max_year - window + 1`.
pub(crate) fn run(analyzer: &Analyzer, area: &str, window: u32) -> Analysis {
    let columns = analyzer.columns();
    let rows = analyzer.area_rows(area);

    let Some(max_year) = rows.iter().filter_map(|r| r.year(&columns.year)).max() else {
        return no_data(area, window);
    };
    let cutoff = max_year - i64::from(window) + 1;

    let recent: Vec<&Record> = rows
        .into_iter()
        .filter(|r| r.year(&columns.year).is_some_and(|y| y >= cutoff))
        .collect();
    if recent.is_empty() {
        return no_data(area, window);
    }

    let means = mean_by_year(&recent, &columns.year, &columns.price);

    Analysis {
        summary: format!(
            "{} price growth over the last {} years ({}–{}).",
            area.to_title_case(),
            window,
            cutoff,
            max_year
        ),
        chart: Chart::flat(
            means.keys().map(|year| year.to_string()).collect(),
            means.values().map(|v| round2(*v)).collect(),
        ),
        // The raw surviving rows, not the aggregate.
        table: recent.into_iter().cloned().collect(),
    }
}

fn no_data(area: &str, window: u32) -> Analysis {
    Analysis {
        summary: format!(
            "No data for {} in the last {} years.",
            area.to_title_case(),
            window
        ),
        chart: Chart::empty_flat(),
        table: Vec::new(),
    }
}
