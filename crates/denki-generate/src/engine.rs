use std::path::PathBuf;
use std::time::Instant;

use chrono::{Local, NaiveDate};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use denki_core::InventoryRecord;

use crate::errors::GenerationError;
use crate::generators::InventoryGenerator;
use crate::model::GenerateOptions;
use crate::output::csv::write_inventory_csv;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_path: PathBuf,
    pub rows: u32,
    pub bytes_written: u64,
}

/// Entry point for generating the inventory CSV.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Generate every record in memory, then write the CSV once.
    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let records = self.generate_records()?;

        let out_path = self.options.out_path.clone();
        let bytes_written = write_inventory_csv(&out_path, &records)?;
        let duration_ms = start.elapsed().as_millis() as u64;

        info!(
            event = "generation_finished",
            rows = records.len(),
            path = %out_path.display(),
            bytes = bytes_written,
            duration_ms
        );

        Ok(GenerationResult {
            out_path,
            rows: self.options.rows,
            bytes_written,
        })
    }

    /// Draw `rows` records numbered from 1.
    pub fn generate_records(&self) -> Result<Vec<InventoryRecord>, GenerationError> {
        if self.options.progress_every == 0 {
            return Err(GenerationError::InvalidOptions(
                "progress_every must be greater than zero".to_string(),
            ));
        }

        let today = self.options.today.unwrap_or_else(local_today);
        let generator = InventoryGenerator::new(today);
        let mut rng: Box<dyn RngCore> = match self.options.seed {
            Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
            None => Box::new(rand::rng()),
        };

        info!(
            event = "generation_started",
            rows = self.options.rows,
            seed = ?self.options.seed,
            today = %today
        );

        let total = self.options.rows;
        let mut records = Vec::with_capacity(total as usize);
        for sequence in 1..=total {
            let record = generator.generate(sequence, rng.as_mut());
            record.validate()?;
            records.push(record);

            if sequence % self.options.progress_every == 0 {
                info!(event = "progress", done = sequence, total);
            }
        }

        Ok(records)
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
