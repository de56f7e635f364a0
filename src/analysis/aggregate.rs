//! Per-year aggregation shared by the analysis branches.

use std::collections::BTreeMap;

use crate::dataset::Record;

/// Mean of `value_column` per year, keyed ascending by year.
///
/// Cells that are missing or non-numeric are skipped; a year with no
/// numeric cells does not appear in the result.
pub fn mean_by_year(
    rows: &[&Record],
    year_column: &str,
    value_column: &str,
) -> BTreeMap<i64, f64> {
    let mut groups: BTreeMap<i64, (f64, u32)> = BTreeMap::new();

    for row in rows {
        let Some(year) = row.year(year_column) else {
            continue;
        };
        let Some(value) = row.number(value_column) else {
            continue;
        };
        let entry = groups.entry(year).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(year, (sum, count))| (year, sum / f64::from(count)))
        .collect()
}

/// Round to two decimal places.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
