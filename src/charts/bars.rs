// src/charts/bars.rs
//! Grouped bar chart: average dwelling size per property type, one bar
//! group per age group, as a Plotly document.

use crate::aggregate::group_mean;
use crate::data::{columns, Dataset};
use once_cell::sync::Lazy;
use serde_json::{json, Value};

const BAR_PALETTE: [&str; 8] = [
    "#997035", "#b38b6d", "#ccbca7", "#ede3d5", "#f5e6d3", "#d6ad60", "#8a6430", "#7c8558",
];

static LAYOUT: Lazy<Value> = Lazy::new(|| {
    json!({
        "title": {
            "text": "Átlagos lakásméret ingatlantípusonként és korcsoportonként",
            "font": {"family": "Segoe UI, Tahoma, Geneva, Verdana, sans-serif", "size": 20, "color": "#122620"}
        },
        "barmode": "group",
        "bargap": 0.15,
        "bargroupgap": 0.1,
        "xaxis": {"title": {"text": "Ingatlantípus"}},
        "yaxis": {"title": {"text": "Átlagos lakásméret (m²)"}},
        "plot_bgcolor": "#ffffff",
        "paper_bgcolor": "#ffffff",
        "margin": {"l": 60, "r": 30, "b": 80, "t": 80, "pad": 4},
        "showlegend": true,
        "legend": {"x": 0, "y": 1.1, "orientation": "h"}
    })
});

/// Build the grouped-bars document over the full dataset. Property types and
/// age groups are the sorted distinct values of their columns; a (type, age)
/// combination with no valid rows renders as a zero-height bar, matching the
/// original chart.
pub fn render_config(dataset: &Dataset) -> Value {
    let types = dataset.distinct_values(columns::PROPERTY_TYPE);
    let ages = dataset.distinct_values(columns::AGE_GROUP);
    let averages = group_mean(
        &dataset.rows,
        columns::PROPERTY_TYPE,
        columns::AGE_GROUP,
        columns::DWELLING_SIZE,
    );

    let traces: Vec<Value> = ages
        .iter()
        .enumerate()
        .map(|(idx, age)| {
            let means: Vec<f64> = types
                .iter()
                .map(|t| {
                    averages
                        .get(t)
                        .and_then(|per_age| per_age.get(age))
                        .copied()
                        .unwrap_or(0.0)
                })
                .collect();
            let labels: Vec<String> = means
                .iter()
                .map(|m| format!("{} m²", m.round() as i64))
                .collect();
            json!({
                "name": age,
                "type": "bar",
                "x": types,
                "y": means,
                "text": labels,
                "textposition": "auto",
                "hoverinfo": "x+y+name",
                "marker": {
                    "color": BAR_PALETTE[idx % BAR_PALETTE.len()],
                    "line": {"color": "#ffffff", "width": 1}
                }
            })
        })
        .collect();

    json!({ "data": traces, "layout": LAYOUT.clone() })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Ingatlantípus,Korosztály,Lakásméret (m²)
Lakás,18-25,50
Lakás,18-25,60
Ház,26-35,100
Lakás,26-35,70
";

    #[test]
    fn one_trace_per_age_group_over_all_types() {
        let ds = Dataset::from_str(SAMPLE).unwrap();
        let doc = render_config(&ds);
        let data = doc["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        // types sorted: Ház, Lakás
        assert_eq!(data[0]["name"], "18-25");
        assert_eq!(data[0]["x"], json!(["Ház", "Lakás"]));
        assert_eq!(data[0]["y"], json!([0.0, 55.0]));
        assert_eq!(data[1]["y"], json!([100.0, 70.0]));
    }

    #[test]
    fn missing_bucket_is_zero_filled_with_label() {
        let ds = Dataset::from_str(SAMPLE).unwrap();
        let doc = render_config(&ds);
        assert_eq!(doc["data"][0]["text"][0], "0 m²");
        assert_eq!(doc["data"][0]["text"][1], "55 m²");
    }

    #[test]
    fn empty_dataset_renders_no_traces() {
        let ds = Dataset::from_str("Ingatlantípus,Korosztály,Lakásméret (m²)\n").unwrap();
        let doc = render_config(&ds);
        assert!(doc["data"].as_array().unwrap().is_empty());
    }
}
