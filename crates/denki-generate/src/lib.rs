//! Synthetic inventory data generation for denki.
//!
//! Records are drawn uniformly from the reference catalog in `denki-core` and
//! written as a quoted CSV file that the converter can read back.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use generators::InventoryGenerator;
pub use model::GenerateOptions;
