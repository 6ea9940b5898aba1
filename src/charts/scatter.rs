// src/charts/scatter.rs
//! Income vs. rent scatter plot as a Vega-Lite document, filtered by the
//! year and age-group dropdowns. Points are row-level, not aggregated.

use crate::aggregate::parse_measure;
use crate::charts::Selection;
use crate::data::{columns, Dataset};
use once_cell::sync::Lazy;
use serde_json::{json, Value};

static BASE: Lazy<Value> = Lazy::new(|| {
    json!({
        "$schema": "https://vega.github.io/schema/vega-lite/v5.json",
        "width": 700,
        "height": 350,
        "background": "white",
        "padding": 15,
        "mark": {
            "type": "point",
            "filled": true,
            "stroke": "#ffffff",
            "strokeWidth": 1,
            "cursor": "pointer",
            "size": 40
        },
        "encoding": {
            "x": {
                "field": columns::INCOME,
                "type": "quantitative",
                "title": "Jövedelem (€/hó)",
                "axis": {"titleFontSize": 14, "labelFontSize": 12, "format": ",.0f",
                         "titleColor": "#122620", "gridColor": "#D6AD60", "gridOpacity": 0.2}
            },
            "y": {
                "field": columns::RENT,
                "type": "quantitative",
                "title": "Bérleti díj (€/hó)",
                "axis": {"titleFontSize": 14, "labelFontSize": 12, "format": ",.0f",
                         "titleColor": "#122620", "gridColor": "#D6AD60", "gridOpacity": 0.2}
            },
            "color": {
                "field": columns::CITY,
                "type": "nominal",
                "title": "Város",
                "scale": {"range": ["#8b6b4b", "#a27b5c", "#c4a484", "#d4b996", "#e5d5b5"]},
                "legend": {"titleFontSize": 14, "labelFontSize": 12, "titleColor": "#122620",
                           "labelColor": "#122620", "orient": "right", "offset": 0, "symbolSize": 30}
            },
            "tooltip": [
                {"field": columns::CITY, "title": "Város"},
                {"field": columns::INCOME, "title": "Jövedelem", "format": ",.0f"},
                {"field": columns::RENT, "title": "Bérleti díj", "format": ",.0f"},
                {"field": columns::AGE_GROUP, "title": "Korosztály"}
            ]
        },
        "config": {
            "axis": {"domain": false, "grid": true, "gridColor": "#D6AD60",
                     "gridOpacity": 0.2, "ticks": false},
            "view": {"stroke": null},
            "background": "white"
        }
    })
});

/// Build the scatter document for the current filter selection. Rows whose
/// income or rent does not parse are skipped rather than plotted at zero.
pub fn render_config(dataset: &Dataset, selection: &Selection) -> Value {
    let values: Vec<Value> = dataset
        .rows
        .iter()
        .filter(|row| selection.matches(row))
        .filter_map(|row| {
            let income = row.get(columns::INCOME).and_then(parse_measure)?;
            let rent = row.get(columns::RENT).and_then(parse_measure)?;
            Some(json!({
                (columns::CITY): row.get(columns::CITY),
                (columns::YEAR): row.get(columns::YEAR),
                (columns::AGE_GROUP): row.get(columns::AGE_GROUP),
                (columns::INCOME): income,
                (columns::RENT): rent,
            }))
        })
        .collect();

    let mut spec = BASE.clone();
    spec["data"] = json!({ "values": values });
    spec
}
