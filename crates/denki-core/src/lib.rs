//! Core contracts for the denki inventory tools.
//!
//! This crate defines the inventory record, the fixed CSV header, and the
//! reference tables shared by the generator and the SQL converter.

pub mod catalog;
pub mod error;
pub mod record;

pub use catalog::{Category, DEFAULT_ID, category, category_id, manufacturer_id};
pub use error::{Error, Result};
pub use record::{DATE_FORMAT, HEADER, InventoryRecord, StockStatus, columns};
