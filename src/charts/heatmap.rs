// src/charts/heatmap.rs
//! City × year heatmap of the housing cost ratio (rent as a percentage of
//! income), as a Vega-Lite document. The ratio is computed here per row
//! rather than delegated to a Vega transform, so the emitted document is
//! self-contained.

use crate::aggregate::parse_measure;
use crate::charts::Selection;
use crate::data::{columns, Dataset};
use once_cell::sync::Lazy;
use serde_json::{json, Value};

pub const RATIO_FIELD: &str = "Housing Cost Ratio";

static BASE: Lazy<Value> = Lazy::new(|| {
    json!({
        "$schema": "https://vega.github.io/schema/vega-lite/v5.json",
        "width": 800,
        "height": 600,
        "mark": {
            "type": "rect",
            "stroke": "#ffffff",
            "strokeWidth": 1,
            "cursor": "pointer"
        },
        "encoding": {
            "x": {
                "field": columns::YEAR,
                "type": "nominal",
                "title": "Year",
                "axis": {"labelAngle": 0, "titleFontSize": 14, "titleColor": "#122620"}
            },
            "y": {
                "field": columns::CITY,
                "type": "nominal",
                "title": "City",
                "axis": {"titleFontSize": 14, "titleColor": "#122620"}
            },
            "color": {
                "field": RATIO_FIELD,
                "type": "quantitative",
                "title": "Housing Cost Ratio (%)",
                "scale": {
                    "scheme": [
                        "#f8f9fa", "#f5f5f5", "#e9ecef", "#d4b996", "#c4a484",
                        "#b38b6d", "#a27b5c", "#8b6b4b", "#6c4a3c"
                    ],
                    "reverse": true
                },
                "legend": {"titleFontSize": 14, "titleColor": "#122620", "labelFontSize": 12}
            },
            "tooltip": [
                {"field": columns::CITY, "type": "nominal", "title": "City"},
                {"field": columns::YEAR, "type": "nominal", "title": "Year"},
                {"field": RATIO_FIELD, "type": "quantitative", "title": "Housing Cost Ratio (%)", "format": ".1f"},
                {"field": columns::RENT, "type": "quantitative", "title": "Rent (€/month)"},
                {"field": columns::INCOME, "type": "quantitative", "title": "Income (€/month)"},
                {"field": columns::AGE_GROUP, "type": "nominal", "title": "Age Group"},
                {"field": columns::PROPERTY_TYPE, "type": "nominal", "title": "Property Type"}
            ]
        },
        "config": {
            "view": {"stroke": null},
            "axis": {"domain": false, "grid": false, "ticks": false},
            "background": "transparent"
        }
    })
});

/// Build the heatmap document for the given age-group selection (the year
/// filter does not apply here; years are an axis). Rows without a parseable
/// rent or a parseable non-zero income carry no ratio and are skipped.
pub fn render_config(dataset: &Dataset, selection: &Selection) -> Value {
    let filter = Selection {
        year: None,
        age_group: selection.age_group.clone(),
    };

    let values: Vec<Value> = dataset
        .rows
        .iter()
        .filter(|row| filter.matches(row))
        .filter_map(|row| {
            let city = row.get(columns::CITY)?;
            let year = row.get(columns::YEAR)?;
            let rent = row.get(columns::RENT).and_then(parse_measure)?;
            let income = row.get(columns::INCOME).and_then(parse_measure)?;
            if income == 0.0 {
                return None;
            }
            Some(json!({
                (columns::CITY): city,
                (columns::YEAR): year,
                (columns::RENT): rent,
                (columns::INCOME): income,
                (columns::AGE_GROUP): row.get(columns::AGE_GROUP),
                (columns::PROPERTY_TYPE): row.get(columns::PROPERTY_TYPE),
                (RATIO_FIELD): rent / income * 100.0,
            }))
        })
        .collect();

    let mut spec = BASE.clone();
    spec["data"] = json!({ "values": values });
    spec
}
