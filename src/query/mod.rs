//! Query intent classification.
//!
//! Queries arrive as free text and are matched against an ordered list of
//! rules. Each rule has a coarse predicate (a cheap substring check) and a
//! structural parser. A failed structural parse either resolves the rule
//! (the comparison rule answers with a clarification) or explicitly falls
//! through to the next rule (the windowed-growth rule). First match wins;
//! no rule is retried.

use regex::Regex;
use std::sync::LazyLock;

/// Pattern for "compare <first> and <second> ... demand".
static COMPARE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"compare\s+(.+?)\s+and\s+(.+?)\s+demand").unwrap());

/// Pattern for "for <area> over last <n> years".
static WINDOW_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"for\s+(.+?)\s+over\s+last\s+(\d+)\s+years").unwrap());

/// The resolved intent of one query.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// "compare <first> and <second> demand trends"
    Compare { first: String, second: String },
    /// Led with "compare" but did not name two areas; answered with a
    /// clarification rather than falling through.
    MalformedCompare,
    /// "show price growth for <area> over last <window> years"
    PriceGrowth { area: String, window: u32 },
    /// "analyze <area>"
    AreaProfile { area: String },
    /// No rule matched.
    Unrecognized,
}

/// Normalize a raw query for classification: trim, then lowercase.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Classify a normalized query. `has_area_column` gates the single-area
/// rule: without the area column there is nothing to profile.
pub fn classify(query: &str, has_area_column: bool) -> Intent {
    if query.starts_with("compare") {
        return match COMPARE_PATTERN.captures(query) {
            Some(caps) => Intent::Compare {
                first: caps[1].to_string(),
                second: caps[2].to_string(),
            },
            None => Intent::MalformedCompare,
        };
    }

    if query.contains("last") && query.contains("year") {
        if let Some(caps) = WINDOW_PATTERN.captures(query) {
            if let Ok(window) = caps[2].parse::<u32>() {
                return Intent::PriceGrowth {
                    area: caps[1].to_string(),
                    window,
                };
            }
        }
        // Structural parse failed: later rules still get a chance.
    }

    if has_area_column && query.contains("analyze") {
        // Substring removal, not extraction: every literal "analyze" is
        // stripped, wherever it appears in the query.
        return Intent::AreaProfile {
            area: query.replace("analyze", "").trim().to_string(),
        };
    }

    Intent::Unrecognized
}
