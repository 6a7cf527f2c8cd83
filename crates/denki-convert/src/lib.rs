//! CSV to SQL conversion for denki inventory files.
//!
//! The converter reads one inventory CSV, decodes it into name to value rows,
//! and renders four SQL insert documents plus an import script. A separate
//! repair step rewrites a legacy-encoded export as UTF-8.

pub mod encoding;
pub mod engine;
pub mod errors;
pub mod model;
pub mod output;
pub mod parser;
pub mod script;
pub mod sql;

pub use encoding::{TextEncoding, detect_and_decode};
pub use engine::{ConversionEngine, ConversionResult, locate_input, read_text, repair_encoding};
pub use errors::ConvertError;
pub use model::{
    ConversionReport, ConvertOptions, DocumentReport, EncodingRepair, REPAIRED_INPUT_NAME,
};
pub use parser::{ParsedTable, Row, decode_row, parse_line, parse_table};
pub use sql::{LookupDefaults, ShipmentKind, SqlDocument, SqlValue, escape_sql};
