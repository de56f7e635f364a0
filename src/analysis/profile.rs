//! Single-area profile.

use inflector::Inflector;

use super::aggregate::{mean_by_year, round2};
use super::response::{Analysis, Chart};
use super::Analyzer;

pub(crate) fn run(analyzer: &Analyzer, area: &str) -> Analysis {
    let columns = analyzer.columns();
    let rows = analyzer.area_rows(area);
    if rows.is_empty() {
        return no_data(area);
    }

    let years: Vec<i64> = rows
        .iter()
        .filter_map(|r| r.year(&columns.year))
        .collect();
    let Some((&first_year, &last_year)) = years.iter().min().zip(years.iter().max()) else {
        return no_data(area);
    };

    let means = mean_by_year(&rows, &columns.year, &columns.price);

    Analysis {
        summary: format!(
            "{} has {} records from {}–{}. Average flat rate shows an upward trend.",
            area.to_title_case(),
            rows.len(),
            first_year,
            last_year
        ),
        chart: Chart::flat(
            means.keys().map(|year| year.to_string()).collect(),
            means.values().map(|v| round2(*v)).collect(),
        ),
        table: rows.into_iter().cloned().collect(),
    }
}

fn no_data(area: &str) -> Analysis {
    Analysis {
        summary: format!("No data found for {}.", area.to_title_case()),
        chart: Chart::empty_flat(),
        table: Vec::new(),
    }
}
