// src/charts/race.rs
//! Animated race bar: per year, the top cities by average rent as a
//! horizontal Plotly bar chart, one animation frame per year with
//! play/pause buttons.

use crate::aggregate::group_mean;
use crate::data::{columns, Dataset};
use serde_json::{json, Value};

#[derive(Debug, Clone)]
pub struct RaceParams {
    /// How many cities each frame keeps, highest mean rent first.
    pub top_n: usize,
}

impl Default for RaceParams {
    fn default() -> Self {
        RaceParams { top_n: 10 }
    }
}

fn frame_data(ranked: &[(String, f64)]) -> Value {
    let rents: Vec<f64> = ranked.iter().map(|(_, rent)| *rent).collect();
    let cities: Vec<&str> = ranked.iter().map(|(city, _)| city.as_str()).collect();
    json!([{
        "x": rents,
        "y": cities,
        "type": "bar",
        "orientation": "h",
        "marker": {"color": "rgba(0, 128, 255, 0.6)"}
    }])
}

/// Build the race document: mean rent per (year, city), one frame per year
/// in ascending order, each frame the `top_n` cities in descending rent
/// order. The initial data and axis range come from the first frame.
pub fn render_config(dataset: &Dataset, params: &RaceParams) -> Value {
    let averages = group_mean(&dataset.rows, columns::YEAR, columns::CITY, columns::RENT);

    let mut frames = Vec::with_capacity(averages.len());
    for (year, per_city) in &averages {
        let mut ranked: Vec<(String, f64)> = per_city
            .iter()
            .map(|(city, rent)| (city.clone(), *rent))
            .collect();
        // descending by rent, city name as tiebreaker for determinism
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(params.top_n);
        frames.push(json!({ "name": year, "data": frame_data(&ranked) }));
    }

    let first_year = averages.keys().next().cloned().unwrap_or_default();
    let first_data = frames
        .first()
        .map(|f| f["data"].clone())
        .unwrap_or_else(|| json!([]));
    let x_max = first_data[0]["x"]
        .as_array()
        .and_then(|xs| xs.iter().filter_map(Value::as_f64).reduce(f64::max))
        .unwrap_or(0.0);

    let layout = json!({
        "title": format!("Bérleti díjak ({first_year})"),
        "xaxis": {"title": "Átlagos bérleti díj (€/hó)", "range": [0.0, x_max * 1.1]},
        "yaxis": {"autorange": "reversed"},
        "updatemenus": [{
            "type": "buttons",
            "showactive": false,
            "buttons": [
                {
                    "label": "Lejátszás",
                    "method": "animate",
                    "args": [null, {
                        "fromcurrent": true,
                        "frame": {"duration": 1000},
                        "transition": {"duration": 300}
                    }]
                },
                {
                    "label": "Megállítás",
                    "method": "animate",
                    "args": [[null], {
                        "mode": "immediate",
                        "frame": {"duration": 0},
                        "transition": {"duration": 0}
                    }]
                }
            ]
        }]
    });

    json!({ "data": first_data, "layout": layout, "frames": frames })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Év,Város,Bérleti díj (€/hó)
2020,Bécs,900
2020,Bécs,1100
2020,Budapest,600
2020,Prága,700
2021,Budapest,650
2021,Bécs,1050
";

    #[test]
    fn one_frame_per_year_in_ascending_order() {
        let ds = Dataset::from_str(SAMPLE).unwrap();
        let doc = render_config(&ds, &RaceParams::default());
        let frames = doc["frames"].as_array().unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0]["name"], "2020");
        assert_eq!(frames[1]["name"], "2021");
    }

    #[test]
    fn frames_rank_cities_by_descending_mean_rent() {
        let ds = Dataset::from_str(SAMPLE).unwrap();
        let doc = render_config(&ds, &RaceParams::default());
        let frame = &doc["frames"][0]["data"][0];
        assert_eq!(frame["y"], json!(["Bécs", "Prága", "Budapest"]));
        assert_eq!(frame["x"], json!([1000.0, 700.0, 600.0]));
    }

    #[test]
    fn top_n_caps_each_frame() {
        let ds = Dataset::from_str(SAMPLE).unwrap();
        let doc = render_config(&ds, &RaceParams { top_n: 2 });
        let frame = &doc["frames"][0]["data"][0];
        assert_eq!(frame["y"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn initial_data_and_range_come_from_first_frame() {
        let ds = Dataset::from_str(SAMPLE).unwrap();
        let doc = render_config(&ds, &RaceParams::default());
        assert_eq!(doc["data"], doc["frames"][0]["data"]);
        assert_eq!(doc["layout"]["title"], "Bérleti díjak (2020)");
        let range = doc["layout"]["xaxis"]["range"].as_array().unwrap();
        assert!((range[1].as_f64().unwrap() - 1100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_dataset_yields_empty_frames() {
        let ds = Dataset::from_str("Év,Város,Bérleti díj (€/hó)\n").unwrap();
        let doc = render_config(&ds, &RaceParams::default());
        assert!(doc["frames"].as_array().unwrap().is_empty());
        assert_eq!(doc["data"], json!([]));
    }
}
