#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arealens::analysis::Analyzer;
    use arealens::dataset::{CellValue, ColumnSpec, Dataset, Record};

    fn record(area: &str, year: i64, price: f64) -> Record {
        let mut rec = Record::new();
        rec.insert("final location", CellValue::String(area.to_string()));
        rec.insert("year", CellValue::Integer(year));
        rec.insert("flat - weighted average rate", CellValue::Float(price));
        rec
    }

    fn analyzer(records: Vec<Record>) -> Analyzer {
        let columns = vec![
            "final location".to_string(),
            "year".to_string(),
            "flat - weighted average rate".to_string(),
        ];
        Analyzer::new(
            Arc::new(Dataset::new(columns, records)),
            ColumnSpec::default(),
        )
    }

    #[test]
    fn test_window_is_anchored_at_the_latest_year() {
        let analyzer = analyzer(vec![
            record("Akurdi", 2018, 3500.0),
            record("Akurdi", 2019, 3600.0),
            record("Akurdi", 2020, 3700.0),
            record("Akurdi", 2021, 3800.0),
            record("Akurdi", 2022, 3900.0),
            record("Akurdi", 2023, 4000.0),
        ]);

        let result = analyzer.answer("Show price growth for Akurdi over last 3 years");

        // cutoff = 2023 - 3 + 1 = 2021
        assert_eq!(result.chart.labels, vec!["2021", "2022", "2023"]);
        assert_eq!(
            result.chart.values.as_ref().unwrap(),
            &[3800.0, 3900.0, 4000.0]
        );
        assert_eq!(
            result.summary,
            "Akurdi price growth over the last 3 years (2021–2023)."
        );
    }

    #[test]
    fn test_table_holds_raw_rows_within_the_window() {
        let analyzer = analyzer(vec![
            record("Akurdi", 2018, 3500.0),
            record("Akurdi", 2021, 3800.0),
            record("Akurdi", 2022, 3900.0),
            record("Akurdi", 2023, 4000.0),
        ]);

        let result = analyzer.answer("show price growth for akurdi over last 3 years");

        assert_eq!(result.table.len(), 3);
        for row in &result.table {
            let year = row.year("year").unwrap();
            assert!((2021..=2023).contains(&year));
        }
    }

    #[test]
    fn test_duplicate_years_are_averaged_but_kept_raw_in_the_table() {
        let analyzer = analyzer(vec![
            record("Akurdi", 2023, 4000.0),
            record("Akurdi", 2023, 4200.0),
        ]);

        let result = analyzer.answer("show price growth for akurdi over last 2 years");

        assert_eq!(result.chart.labels, vec!["2023"]);
        assert_eq!(result.chart.values.as_ref().unwrap(), &[4100.0]);
        assert_eq!(result.table.len(), 2);
    }

    #[test]
    fn test_window_larger_than_history_keeps_everything() {
        let analyzer = analyzer(vec![
            record("Akurdi", 2018, 3500.0),
            record("Akurdi", 2023, 4000.0),
        ]);

        let result = analyzer.answer("show price growth for akurdi over last 100 years");

        assert_eq!(result.chart.labels, vec!["2018", "2023"]);
        assert_eq!(result.table.len(), 2);
    }

    #[test]
    fn test_unknown_area_yields_no_data() {
        let analyzer = analyzer(vec![record("Akurdi", 2023, 4000.0)]);

        let result = analyzer.answer("show price growth for atlantis over last 3 years");

        assert_eq!(result.summary, "No data for Atlantis in the last 3 years.");
        assert!(result.chart.labels.is_empty());
        assert!(result.chart.values.as_ref().unwrap().is_empty());
        assert!(result.table.is_empty());
    }

    #[test]
    fn test_chart_json_has_values_but_no_series_key() {
        let analyzer = analyzer(vec![record("Akurdi", 2023, 4000.0)]);

        let result = analyzer.answer("show price growth for akurdi over last 2 years");
        let json = serde_json::to_value(&result).unwrap();

        let chart = json.get("chart").unwrap().as_object().unwrap();
        assert!(chart.contains_key("labels"));
        assert!(chart.contains_key("values"));
        assert!(!chart.contains_key("series"));
    }

    #[test]
    fn test_area_match_is_case_insensitive() {
        let analyzer = analyzer(vec![record("AKURDI", 2023, 4000.0)]);

        let result = analyzer.answer("Show price growth for Akurdi over last 2 years");

        assert_eq!(result.chart.values.as_ref().unwrap(), &[4000.0]);
    }
}
