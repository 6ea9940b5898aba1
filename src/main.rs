use anyhow::Result;
use chrono::Utc;
use housingviz::{
    charts::{self, bars, heatmap, race, scatter, trends},
    config::Config,
    data::{columns, Dataset},
    fetch,
};
use reqwest::Client;
use serde_json::{json, Value};
use std::{fs, path::Path};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

fn write_doc(out_dir: &Path, name: &str, doc: &Value) -> Result<String> {
    let file_name = format!("{name}.json");
    let path = out_dir.join(&file_name);
    fs::write(&path, serde_json::to_vec_pretty(doc)?)?;
    info!("wrote {}", path.display());
    Ok(file_name)
}

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) load config ──────────────────────────────────────────────
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "housingviz.yaml".to_string());
    let config = Config::load(&config_path)?;
    let out_dir = Path::new(&config.out_dir);
    fs::create_dir_all(out_dir)?;

    // ─── 3) fetch the dataset ────────────────────────────────────────
    let url = Url::parse(&config.dataset_url)?;
    let client = Client::new();
    let csv_text = match fetch::fetch_csv(&client, &url).await {
        Ok(text) => text,
        Err(e) => {
            // the one hard failure: nothing to render, report and stop
            error!("fetching dataset failed: {:#}", e);
            return Ok(());
        }
    };

    // ─── 4) parse rows ───────────────────────────────────────────────
    let dataset = Dataset::from_str(&csv_text)?;
    info!(rows = dataset.rows.len(), "dataset loaded");

    // ─── 5) build the five chart documents ───────────────────────────
    let cities = if config.trends.cities.is_empty() {
        dataset
            .distinct_values(columns::CITY)
            .into_iter()
            .take(trends::MAX_CITIES)
            .collect()
    } else {
        config.trends.cities.clone()
    };
    let heatmap_sel = charts::Selection {
        year: None,
        age_group: config.heatmap.age_group.clone(),
    };
    let scatter_sel = charts::Selection {
        year: config.scatter.year.clone(),
        age_group: config.scatter.age_group.clone(),
    };

    let docs = [
        ("heatmap", heatmap::render_config(&dataset, &heatmap_sel)),
        (
            "trends",
            trends::render_config(&dataset, &trends::TrendsParams { cities }),
        ),
        ("bars", bars::render_config(&dataset)),
        (
            "race",
            race::render_config(
                &dataset,
                &race::RaceParams {
                    top_n: config.race.top_n,
                },
            ),
        ),
        ("scatter", scatter::render_config(&dataset, &scatter_sel)),
    ];

    // ─── 6) write documents + manifest ───────────────────────────────
    let mut written = Vec::with_capacity(docs.len());
    for (name, doc) in &docs {
        written.push(write_doc(out_dir, name, doc)?);
    }
    let manifest = json!({
        "generated_at": Utc::now().to_rfc3339(),
        "dataset_url": config.dataset_url,
        "rows": dataset.rows.len(),
        "charts": written,
    });
    fs::write(
        out_dir.join("manifest.json"),
        serde_json::to_vec_pretty(&manifest)?,
    )?;

    info!("all done");
    Ok(())
}
