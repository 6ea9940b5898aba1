// src/charts/mod.rs
//! Render-configuration builders for the five visualizations. Each chart is
//! an immutable base configuration plus a pure function from (dataset,
//! filter params) to a fresh JSON document; nothing here mutates shared
//! state between renders. The documents follow the schema of the library
//! the original page fed them to: Vega-Lite for `heatmap` and `scatter`,
//! Plotly for `trends`, `bars` and `race`.

use crate::data::{columns, Row};

pub mod bars;
pub mod heatmap;
pub mod race;
pub mod scatter;
pub mod trends;

/// Line/area palette shared by the Plotly charts.
pub const PALETTE: [&str; 5] = ["#996835", "#b38b6d", "#d6ad60", "#ede3d5", "#122620"];

/// Current dropdown/filter state driving a render. `None` means the "all"
/// option is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub year: Option<String>,
    pub age_group: Option<String>,
}

impl Selection {
    pub fn matches(&self, row: &Row) -> bool {
        let year_ok = match &self.year {
            Some(y) => row.get(columns::YEAR) == Some(y.as_str()),
            None => true,
        };
        let age_ok = match &self.age_group {
            Some(a) => row.get(columns::AGE_GROUP) == Some(a.as_str()),
            None => true,
        };
        year_ok && age_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Row;

    fn row(year: &str, age: &str) -> Row {
        Row::from_pairs(&[(columns::YEAR, year), (columns::AGE_GROUP, age)])
    }

    #[test]
    fn default_selection_matches_everything() {
        assert!(Selection::default().matches(&row("2020", "18-25")));
    }

    #[test]
    fn selection_filters_by_year_and_age_group() {
        let sel = Selection {
            year: Some("2020".into()),
            age_group: Some("18-25".into()),
        };
        assert!(sel.matches(&row("2020", "18-25")));
        assert!(!sel.matches(&row("2021", "18-25")));
        assert!(!sel.matches(&row("2020", "26-35")));
    }
}
