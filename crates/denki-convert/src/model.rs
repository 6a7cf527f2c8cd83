use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::encoding::TextEncoding;
use crate::sql::LookupDefaults;

/// Default name of the UTF-8 copy written by an encoding repair. It is a
/// conversion candidate ahead of the unrepaired `electronics_data.csv`.
pub const REPAIRED_INPUT_NAME: &str = "electronics_data_fixed.csv";

/// Options for a conversion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Directory searched for the input file.
    pub input_dir: PathBuf,
    /// Candidate input names, highest priority first.
    pub candidates: Vec<String>,
    /// Decode with this encoding instead of sniffing the file name.
    pub encoding: Option<TextEncoding>,
    /// Directory receiving the SQL files and the import script.
    pub out_dir: PathBuf,
    /// Database selected at the top of every SQL file.
    pub database: String,
    /// Client invocation used by the import script.
    pub client_command: String,
    /// Schema file the import script runs first, relative to `out_dir`.
    pub schema_path: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            candidates: vec![
                "electronics_data_utf8.csv".to_string(),
                "electronics_data_sjis.csv".to_string(),
                REPAIRED_INPUT_NAME.to_string(),
                "electronics_data.csv".to_string(),
            ],
            encoding: None,
            out_dir: PathBuf::from("sql_import"),
            database: "electronics_inventory".to_string(),
            client_command: "mysql -u root -p".to_string(),
            schema_path: "../create-database-complete.sql".to_string(),
        }
    }
}

/// Rows written to one output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentReport {
    pub file_name: String,
    pub rows: usize,
}

/// What a conversion read, dropped, defaulted, and wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub input_path: PathBuf,
    pub encoding: TextEncoding,
    pub data_lines: usize,
    pub rows_decoded: usize,
    pub rows_skipped: usize,
    pub lookup_defaults: LookupDefaults,
    pub documents: Vec<DocumentReport>,
}

/// Outcome of rewriting a file of unknown encoding as UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodingRepair {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Encoding the input was read as.
    pub detected: TextEncoding,
    pub bytes_written: usize,
}
