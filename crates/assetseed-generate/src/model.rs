use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use assetseed_core::{Document, PROPERTY_MANUFACTURER};

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory the `asset-NNN.json` files are written to.
    pub out_dir: PathBuf,
    /// Number of documents to generate.
    pub count: usize,
    /// Number of region codes to draw from (`Region01`..`RegionNN`).
    pub region_count: usize,
    /// Fixed RNG seed; a fresh one is drawn when absent.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("data/semantic"),
            count: 100,
            region_count: 20,
            seed: None,
        }
    }
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub seed: u64,
    pub out_dir: PathBuf,
    pub documents_requested: usize,
    pub documents_written: usize,
    /// File names in write order.
    pub files: Vec<String>,
    pub bytes_written: u64,
    pub tags_total: u64,
    pub streams_total: u64,
    pub region_usage: BTreeMap<String, u64>,
    pub asset_type_usage: BTreeMap<String, u64>,
    pub manufacturer_usage: BTreeMap<String, u64>,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, seed: u64, out_dir: PathBuf, documents_requested: usize) -> Self {
        Self {
            run_id,
            started_at: Utc::now(),
            seed,
            out_dir,
            documents_requested,
            documents_written: 0,
            files: Vec::new(),
            bytes_written: 0,
            tags_total: 0,
            streams_total: 0,
            region_usage: BTreeMap::new(),
            asset_type_usage: BTreeMap::new(),
            manufacturer_usage: BTreeMap::new(),
            duration_ms: 0,
        }
    }

    pub fn record_document(&mut self, document: &Document, file_name: String, bytes: u64) {
        self.documents_written += 1;
        self.files.push(file_name);
        self.bytes_written += bytes;
        self.tags_total += document.tags.len() as u64;
        self.streams_total += document.streams.len() as u64;
        *self.region_usage.entry(document.region.clone()).or_insert(0) += 1;
        if let Some(asset_type) = document.asset_type() {
            *self
                .asset_type_usage
                .entry(asset_type.to_string())
                .or_insert(0) += 1;
        }
        if let Some(manufacturer) = document.metadata_value(PROPERTY_MANUFACTURER) {
            *self
                .manufacturer_usage
                .entry(manufacturer.to_string())
                .or_insert(0) += 1;
        }
    }
}
