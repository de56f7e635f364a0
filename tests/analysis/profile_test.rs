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
    fn test_summary_count_matches_table_length() {
        let analyzer = analyzer(vec![
            record("Wakad", 2019, 4800.0),
            record("Wakad", 2020, 5000.0),
            record("Wakad", 2021, 5200.0),
            record("Akurdi", 2020, 4000.0),
        ]);

        let result = analyzer.answer("Analyze Wakad");

        assert_eq!(
            result.summary,
            "Wakad has 3 records from 2019–2021. Average flat rate shows an upward trend."
        );
        assert_eq!(result.table.len(), 3);
    }

    #[test]
    fn test_chart_is_price_mean_per_year_ascending() {
        let analyzer = analyzer(vec![
            record("Wakad", 2021, 5200.0),
            record("Wakad", 2019, 4800.0),
            record("Wakad", 2019, 5000.0),
        ]);

        let result = analyzer.answer("analyze wakad");

        assert_eq!(result.chart.labels, vec!["2019", "2021"]);
        assert_eq!(result.chart.values.as_ref().unwrap(), &[4900.0, 5200.0]);
    }

    #[test]
    fn test_filter_is_lowercase_exact_match() {
        let analyzer = analyzer(vec![
            record("Wakad", 2020, 5000.0),
            record("WAKAD", 2021, 5200.0),
        ]);

        let result = analyzer.answer("Analyze WAKAD");

        assert_eq!(result.table.len(), 2);
    }

    #[test]
    fn test_analyze_token_is_stripped_wherever_it_appears() {
        let analyzer = analyzer(vec![record("Wakad", 2020, 5000.0)]);

        // Token order does not matter; only the leftover text does.
        let result = analyzer.answer("wakad analyze");

        assert_eq!(result.table.len(), 1);
    }

    #[test]
    fn test_unknown_area_yields_no_data() {
        let analyzer = analyzer(vec![record("Wakad", 2020, 5000.0)]);

        let result = analyzer.answer("analyze atlantis");

        assert_eq!(result.summary, "No data found for Atlantis.");
        assert!(result.chart.labels.is_empty());
        assert!(result.chart.values.as_ref().unwrap().is_empty());
        assert!(result.table.is_empty());
    }

    #[test]
    fn test_chart_json_has_values_but_no_series_key() {
        let analyzer = analyzer(vec![record("Wakad", 2020, 5000.0)]);

        let result = analyzer.answer("analyze wakad");
        let json = serde_json::to_value(&result).unwrap();

        let chart = json.get("chart").unwrap().as_object().unwrap();
        assert!(chart.contains_key("labels"));
        assert!(chart.contains_key("values"));
        assert!(!chart.contains_key("series"));
    }

    #[test]
    fn test_table_rows_pass_through_untyped_columns() {
        let mut rec = record("Wakad", 2020, 5000.0);
        rec.insert("zone", CellValue::String("west".to_string()));
        let analyzer = analyzer(vec![rec]);

        let result = analyzer.answer("analyze wakad");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["table"][0]["zone"], "west");
        assert_eq!(json["table"][0]["final location"], "Wakad");
    }
}
