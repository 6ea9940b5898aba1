// src/config/mod.rs
//! Run configuration, loaded from an optional YAML file. Every field has a
//! default, so running with no config file renders all five charts over the
//! published dataset with no filters applied.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

const DEFAULT_DATASET_URL: &str = "https://raw.githubusercontent.com/Andrea2002-06/Andrea2002-06.github.io/refs/heads/main/europai_lakhatasi_adatbazis.csv";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub dataset_url: String,
    pub out_dir: String,
    pub trends: TrendsConfig,
    pub race: RaceConfig,
    pub heatmap: FilterConfig,
    pub scatter: FilterConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrendsConfig {
    /// Cities to compare; empty means "take the first five alphabetically".
    pub cities: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RaceConfig {
    pub top_n: usize,
}

impl Default for RaceConfig {
    fn default() -> Self {
        RaceConfig { top_n: 10 }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// `None` is the "all" dropdown option.
    pub year: Option<String>,
    pub age_group: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dataset_url: DEFAULT_DATASET_URL.to_string(),
            out_dir: "charts".to_string(),
            trends: TrendsConfig::default(),
            race: RaceConfig::default(),
            heatmap: FilterConfig::default(),
            scatter: FilterConfig::default(),
        }
    }
}

impl Config {
    /// Load from `path` if it exists, otherwise fall back to the defaults.
    /// A present-but-invalid file is an error, not a silent fallback.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        serde_yaml::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))
    }
}
