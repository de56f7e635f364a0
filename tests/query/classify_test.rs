#[cfg(test)]
mod tests {
    use arealens::query::{classify, normalize, Intent};

    #[test]
    fn test_compare_rule_parses_two_areas() {
        let intent = classify("compare wakad and akurdi demand trends", true);
        assert_eq!(
            intent,
            Intent::Compare {
                first: "wakad".to_string(),
                second: "akurdi".to_string(),
            }
        );
    }

    #[test]
    fn test_compare_rule_handles_multi_word_areas() {
        let intent = classify("compare pimple saudagar and wakad demand trends", true);
        assert_eq!(
            intent,
            Intent::Compare {
                first: "pimple saudagar".to_string(),
                second: "wakad".to_string(),
            }
        );
    }

    #[test]
    fn test_malformed_compare_does_not_fall_through() {
        // Contains "last", "year" and "analyze", but the leading "compare"
        // claims the query: a failed parse resolves to a clarification
        // instead of reaching the later rules.
        let intent = classify("compare analyze over last 3 years", true);
        assert_eq!(intent, Intent::MalformedCompare);
    }

    #[test]
    fn test_growth_rule_parses_area_and_window() {
        let intent = classify("show price growth for akurdi over last 3 years", true);
        assert_eq!(
            intent,
            Intent::PriceGrowth {
                area: "akurdi".to_string(),
                window: 3,
            }
        );
    }

    #[test]
    fn test_growth_predicate_without_structure_falls_through_to_profile() {
        // "last" and "year" are present but the structural pattern is not,
        // so the single-area rule gets its chance.
        let intent = classify("last year analyze wakad", true);
        assert_eq!(
            intent,
            Intent::AreaProfile {
                area: "last year  wakad".to_string(),
            }
        );
    }

    #[test]
    fn test_growth_predicate_without_structure_falls_through_to_fallback() {
        let intent = classify("what happened last year", true);
        assert_eq!(intent, Intent::Unrecognized);
    }

    #[test]
    fn test_profile_strips_every_analyze_occurrence() {
        let intent = classify("analyze analyzeton", true);
        assert_eq!(
            intent,
            Intent::AreaProfile {
                area: "ton".to_string(),
            }
        );
    }

    #[test]
    fn test_profile_rule_requires_area_column() {
        let intent = classify("analyze wakad", false);
        assert_eq!(intent, Intent::Unrecognized);
    }

    #[test]
    fn test_unmatched_queries_are_unrecognized() {
        assert_eq!(classify("", true), Intent::Unrecognized);
        assert_eq!(classify("hello there", true), Intent::Unrecognized);
        assert_eq!(
            classify("what is the average price in wakad", true),
            Intent::Unrecognized
        );
    }

    #[test]
    fn test_normalize_then_classify() {
        let query = normalize("  Compare Wakad AND Akurdi demand trends  ");
        assert_eq!(
            classify(&query, true),
            Intent::Compare {
                first: "wakad".to_string(),
                second: "akurdi".to_string(),
            }
        );
    }
}
