// src/charts/trends.rs
//! Housing-ratio trend lines per city over the years, as a Plotly document
//! (one spline line+marker trace per selected city, area fill to zero).

use crate::aggregate::group_mean;
use crate::charts::PALETTE;
use crate::data::{columns, Dataset};
use once_cell::sync::Lazy;
use serde_json::{json, Value};

/// The multi-select in the original page caps the comparison at five cities;
/// extra selections are dropped, not an error.
pub const MAX_CITIES: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct TrendsParams {
    pub cities: Vec<String>,
}

static LAYOUT: Lazy<Value> = Lazy::new(|| {
    json!({
        "title": "Lakhatási arány (%) városonként (2020–2024)",
        "xaxis": {"title": "Év", "tickmode": "linear"},
        "yaxis": {"title": "Lakhatási arány (%)", "rangemode": "tozero"},
        "plot_bgcolor": "#ffffff",
        "paper_bgcolor": "#ffffff",
        "font": {"family": "Segoe UI, sans-serif", "color": "#122620"},
        "showlegend": true
    })
});

/// Build the trends document: mean housing ratio per (city, year), one trace
/// per selected city. Cities absent from the dataset produce no trace.
pub fn render_config(dataset: &Dataset, params: &TrendsParams) -> Value {
    let averages = group_mean(
        &dataset.rows,
        columns::CITY,
        columns::YEAR,
        columns::HOUSING_RATIO,
    );

    let traces: Vec<Value> = params
        .cities
        .iter()
        .take(MAX_CITIES)
        .filter_map(|city| averages.get(city).map(|per_year| (city, per_year)))
        .enumerate()
        .map(|(idx, (city, per_year))| {
            let color = PALETTE[idx % PALETTE.len()];
            let years: Vec<&String> = per_year.keys().collect();
            let values: Vec<f64> = per_year.values().copied().collect();
            json!({
                "x": years,
                "y": values,
                "name": city,
                "type": "scatter",
                "mode": "lines+markers",
                "line": {"shape": "spline", "width": 2, "color": color},
                "marker": {"color": color, "line": {"color": "#fff", "width": 1}},
                "fill": "tozeroy",
                "fillcolor": format!("{color}29"),
                "opacity": 0.18
            })
        })
        .collect();

    json!({ "data": traces, "layout": LAYOUT.clone() })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Város,Év,Lakhatási arány (%)
Bécs,2020,40
Bécs,2020,50
Bécs,2021,48
Budapest,2020,38
Prága,2020,44
";

    #[test]
    fn one_trace_per_selected_city_with_sorted_years() {
        let ds = Dataset::from_str(SAMPLE).unwrap();
        let params = TrendsParams {
            cities: vec!["Bécs".into(), "Budapest".into()],
        };
        let doc = render_config(&ds, &params);
        let data = doc["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["name"], "Bécs");
        assert_eq!(data[0]["x"], json!(["2020", "2021"]));
        assert_eq!(data[0]["y"], json!([45.0, 48.0]));
        assert_eq!(data[1]["y"], json!([38.0]));
    }

    #[test]
    fn selection_is_capped_at_five_cities() {
        let csv = "Város,Év,Lakhatási arány (%)\n".to_string()
            + &(0..7)
                .map(|i| format!("City{i},2020,40\n"))
                .collect::<String>();
        let ds = Dataset::from_str(&csv).unwrap();
        let params = TrendsParams {
            cities: (0..7).map(|i| format!("City{i}")).collect(),
        };
        let doc = render_config(&ds, &params);
        assert_eq!(doc["data"].as_array().unwrap().len(), MAX_CITIES);
    }

    #[test]
    fn unknown_city_produces_no_trace() {
        let ds = Dataset::from_str(SAMPLE).unwrap();
        let params = TrendsParams {
            cities: vec!["Atlantis".into()],
        };
        let doc = render_config(&ds, &params);
        assert!(doc["data"].as_array().unwrap().is_empty());
    }

    #[test]
    fn palette_cycles_by_trace_index() {
        let ds = Dataset::from_str(SAMPLE).unwrap();
        let params = TrendsParams {
            cities: vec!["Budapest".into(), "Bécs".into()],
        };
        let doc = render_config(&ds, &params);
        assert_eq!(doc["data"][0]["line"]["color"], PALETTE[0]);
        assert_eq!(doc["data"][1]["line"]["color"], PALETTE[1]);
    }
}
