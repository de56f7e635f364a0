//! Two-area demand comparison.
//!
//! Both areas are aggregated to per-year demand means, then laid out over
//! the sorted union of their years so the two series share one x-axis. A
//! year one area lacks contributes 0 to that area's series, never a null.

use std::collections::{BTreeMap, BTreeSet};

use inflector::Inflector;

use super::aggregate::{mean_by_year, round2};
use super::response::{Analysis, Chart, NamedSeries};
use super::Analyzer;

pub(crate) fn run(analyzer: &Analyzer, first: &str, second: &str) -> Analysis {
    let columns = analyzer.columns();

    let first_means = mean_by_year(&analyzer.area_rows(first), &columns.year, &columns.demand);
    let second_means = mean_by_year(&analyzer.area_rows(second), &columns.year, &columns.demand);

    let years: Vec<i64> = first_means
        .keys()
        .chain(second_means.keys())
        .copied()
        .collect::<BTreeSet<i64>>()
        .into_iter()
        .collect();

    let Some((&min_year, &max_year)) = years.first().zip(years.last()) else {
        return no_data(first, second);
    };

    let values_over = |means: &BTreeMap<i64, f64>| -> Vec<f64> {
        years
            .iter()
            .map(|year| round2(means.get(year).copied().unwrap_or(0.0)))
            .collect()
    };

    let summary = format!(
        "Demand trends for {} vs {} from {} to {}.",
        first.to_title_case(),
        second.to_title_case(),
        min_year,
        max_year
    );

    Analysis {
        summary,
        chart: Chart::multi(
            years.iter().map(|year| year.to_string()).collect(),
            vec![
                NamedSeries {
                    name: first.to_title_case(),
                    values: values_over(&first_means),
                },
                NamedSeries {
                    name: second.to_title_case(),
                    values: values_over(&second_means),
                },
            ],
        ),
        table: Vec::new(),
    }
}

/// The answer for a "compare ..." query that did not name two areas.
pub(crate) fn clarify() -> Analysis {
    Analysis {
        summary: "Sorry, I couldn't parse those two areas. \
                  Please say: \"Compare A and B demand trends.\""
            .to_string(),
        chart: Chart::empty_multi(),
        table: Vec::new(),
    }
}

fn no_data(first: &str, second: &str) -> Analysis {
    Analysis {
        summary: format!(
            "No demand data found for {} or {}.",
            first.to_title_case(),
            second.to_title_case()
        ),
        chart: Chart::empty_multi(),
        table: Vec::new(),
    }
}
