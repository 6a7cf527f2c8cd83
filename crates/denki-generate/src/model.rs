use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Options for the generation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// CSV file the records are written to.
    pub out_path: PathBuf,
    /// Number of records to generate.
    pub rows: u32,
    /// Emit a progress event every this many rows.
    pub progress_every: u32,
    /// Seed for a repeatable run. Unseeded runs use the thread RNG.
    pub seed: Option<u64>,
    /// Upper bound for every generated date. Defaults to the local date.
    pub today: Option<NaiveDate>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from("electronics_data_utf8.csv"),
            rows: 10_000,
            progress_every: 1_000,
            seed: None,
            today: None,
        }
    }
}
