// src/data/mod.rs
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::io::Read;
use tracing::{debug, warn};

pub mod columns;

/// One CSV record, keyed by header name. Cells stay as raw text; numeric
/// interpretation happens at aggregation time, not parse time.
#[derive(Debug, Clone)]
pub struct Row {
    fields: HashMap<String, String>,
}

impl Row {
    /// Look up a cell by column name. Absent columns and empty cells are
    /// both reported as `None`.
    pub fn get(&self, column: &str) -> Option<&str> {
        match self.fields.get(column) {
            Some(v) if !v.trim().is_empty() => Some(v.as_str()),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Row {
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// The dataset as loaded: header row plus every record that survived
/// parsing. Built once per load and never mutated afterwards.
#[derive(Debug)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Dataset {
    /// Parse CSV text into a `Dataset`. Records whose field count does not
    /// match the header row are dropped with a warning, matching the
    /// source's drop-don't-report policy for malformed lines.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_reader(reader);

        let headers: Vec<String> = rdr
            .headers()
            .context("reading CSV header row")?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        let mut dropped = 0usize;
        for record in rdr.records() {
            let record = match record {
                Ok(r) => r,
                Err(e) => {
                    dropped += 1;
                    warn!(error = %e, "dropping malformed CSV record");
                    continue;
                }
            };
            let fields = headers
                .iter()
                .cloned()
                .zip(record.iter().map(|v| v.trim().to_string()))
                .collect();
            rows.push(Row { fields });
        }

        debug!(rows = rows.len(), dropped, "parsed dataset");
        Ok(Dataset { headers, rows })
    }

    pub fn from_str(text: &str) -> Result<Self> {
        Self::from_reader(text.as_bytes())
    }

    /// Sorted unique non-empty values of one column. Used to populate the
    /// filter selections (cities, years, age groups).
    pub fn distinct_values(&self, column: &str) -> Vec<String> {
        let mut values: Vec<String> = self
            .rows
            .iter()
            .filter_map(|r| r.get(column))
            .map(|v| v.to_string())
            .collect();
        values.sort();
        values.dedup();
        values
    }
}
