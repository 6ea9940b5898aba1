// src/aggregate/mod.rs
//! Group-by-average over dataset rows. Every chart in the original front end
//! re-implemented this inline with slightly different validity rules; this
//! module is the single shared version, parameterized by column names, with
//! one cleaning policy for numeric text.

use crate::data::Row;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// Composite bucket key: primary grouping value plus period value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey {
    pub group: String,
    pub period: String,
}

/// Two-level mapping: grouping value → period value → arithmetic mean.
/// `BTreeMap` keeps grouping deterministic; any display ordering beyond
/// lexicographic is the caller's concern.
pub type ResultTable = BTreeMap<String, BTreeMap<String, f64>>;

static NON_NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9.\-]").expect("numeric cleanup pattern is valid"));

/// Parse a measure cell as f64, tolerating formatted text. Strips every
/// character except digits, `.` and `-` (currency symbols, thousands
/// separators, stray units) before the standard float parse. Returns `None`
/// for empty text, text with no digits, or a non-finite result.
pub fn parse_measure(raw: &str) -> Option<f64> {
    let cleaned = NON_NUMERIC.replace_all(raw, "");
    if !cleaned.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Single-pass reduction of `rows` into per-(group, period) means of the
/// `measure_col` values. A row with a missing grouping value, missing period
/// value, or a measure that fails [`parse_measure`] contributes to no bucket
/// and raises no error. A key with no valid rows never appears in the result.
pub fn group_mean(
    rows: &[Row],
    group_col: &str,
    period_col: &str,
    measure_col: &str,
) -> ResultTable {
    let mut buckets: BTreeMap<GroupKey, Vec<f64>> = BTreeMap::new();

    for row in rows {
        let group = match row.get(group_col) {
            Some(v) => v,
            None => continue,
        };
        let period = match row.get(period_col) {
            Some(v) => v,
            None => continue,
        };
        let measure = match row.get(measure_col).and_then(parse_measure) {
            Some(v) => v,
            None => continue,
        };
        buckets
            .entry(GroupKey {
                group: group.to_string(),
                period: period.to_string(),
            })
            .or_default()
            .push(measure);
    }

    let mut table = ResultTable::new();
    for (key, values) in buckets {
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        table.entry(key.group).or_default().insert(key.period, mean);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Row;

    fn row(city: &str, year: &str, rent: &str) -> Row {
        Row::from_pairs(&[("city", city), ("year", year), ("rent", rent)])
    }

    #[test]
    fn means_per_bucket() {
        let rows = vec![
            row("A", "2020", "100"),
            row("A", "2020", "200"),
            row("B", "2020", "50"),
        ];
        let table = group_mean(&rows, "city", "year", "rent");
        assert_eq!(table["A"]["2020"], 150.0);
        assert_eq!(table["B"]["2020"], 50.0);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn invalid_measure_rows_are_skipped() {
        let rows = vec![row("A", "2020", "100"), row("A", "2020", "abc")];
        let table = group_mean(&rows, "city", "year", "rent");
        assert_eq!(table["A"]["2020"], 100.0);
        assert_eq!(table["A"].len(), 1);
    }

    #[test]
    fn missing_group_or_period_rows_are_skipped() {
        let rows = vec![
            row("", "2020", "100"),
            row("A", "", "100"),
            row("A", "2021", "80"),
        ];
        let table = group_mean(&rows, "city", "year", "rent");
        assert_eq!(table.len(), 1);
        assert_eq!(table["A"].len(), 1);
        assert_eq!(table["A"]["2021"], 80.0);
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let table = group_mean(&[], "city", "year", "rent");
        assert!(table.is_empty());
    }

    #[test]
    fn single_valid_row_yields_single_bucket() {
        let rows = vec![row("A", "2020", "123.5")];
        let table = group_mean(&rows, "city", "year", "rent");
        assert_eq!(table.len(), 1);
        assert_eq!(table["A"]["2020"], 123.5);
    }

    #[test]
    fn aggregation_is_deterministic() {
        let rows = vec![
            row("B", "2021", "10"),
            row("A", "2020", "1"),
            row("B", "2021", "20"),
            row("A", "2021", "3"),
        ];
        let first = group_mean(&rows, "city", "year", "rent");
        let second = group_mean(&rows, "city", "year", "rent");
        assert_eq!(first, second);
        assert_eq!(
            first.keys().cloned().collect::<Vec<_>>(),
            vec!["A".to_string(), "B".to_string()]
        );
    }

    #[test]
    fn parse_measure_strips_formatting() {
        assert_eq!(parse_measure("1,200 €"), Some(1200.0));
        assert_eq!(parse_measure(" 42.5 "), Some(42.5));
        assert_eq!(parse_measure("-3.25%"), Some(-3.25));
        assert_eq!(parse_measure("abc"), None);
        assert_eq!(parse_measure(""), None);
        assert_eq!(parse_measure("€"), None);
    }

    #[test]
    fn missing_column_contributes_nothing() {
        let rows = vec![Row::from_pairs(&[("city", "A"), ("year", "2020")])];
        let table = group_mean(&rows, "city", "year", "rent");
        assert!(table.is_empty());
    }
}
