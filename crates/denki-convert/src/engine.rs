use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::encoding::{TextEncoding, detect_and_decode};
use crate::errors::ConvertError;
use crate::model::{ConversionReport, ConvertOptions, DocumentReport, EncodingRepair};
use crate::output::write_file;
use crate::parser::parse_table;
use crate::script::{IMPORT_SCRIPT_NAME, ImportTarget, import_script};
use crate::sql::emit_documents;

/// Result of a conversion run.
#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub out_dir: PathBuf,
    /// Written files in import order, the script last.
    pub files: Vec<PathBuf>,
    pub report: ConversionReport,
}

/// Entry point for turning the inventory CSV into SQL files.
#[derive(Debug, Clone)]
pub struct ConversionEngine {
    options: ConvertOptions,
}

impl ConversionEngine {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    pub fn run(&self) -> Result<ConversionResult, ConvertError> {
        let options = &self.options;
        let input_path = locate_input(&options.input_dir, &options.candidates)?;
        let encoding = options.encoding.unwrap_or_else(|| {
            let name = input_path
                .file_name()
                .map(|name| name.to_string_lossy())
                .unwrap_or_default();
            TextEncoding::for_file_name(&name)
        });
        info!(
            event = "input_selected",
            path = %input_path.display(),
            encoding = %encoding
        );

        let text = read_text(&input_path, encoding)?;
        let table = parse_table(&text)?;
        info!(
            event = "header_parsed",
            columns = table.headers.len(),
            header = %table.headers.join(", ")
        );
        info!(
            event = "rows_parsed",
            data_lines = table.data_lines,
            rows = table.rows.len(),
            skipped = table.skipped_rows
        );
        if table.skipped_rows > 0 {
            warn!(
                event = "rows_skipped",
                skipped = table.skipped_rows,
                expected_fields = table.headers.len(),
                "rows with a mismatched field count were dropped"
            );
        }
        if table.rows.is_empty() {
            return Err(ConvertError::NoValidRows {
                skipped: table.skipped_rows,
            });
        }

        let (documents, lookup_defaults) = emit_documents(&table.rows, &options.database);
        if lookup_defaults.categories > 0 || lookup_defaults.manufacturers > 0 {
            warn!(
                event = "lookup_defaulted",
                categories = lookup_defaults.categories,
                manufacturers = lookup_defaults.manufacturers,
                "unmapped names were assigned the default id"
            );
        }

        let mut files = Vec::with_capacity(documents.len() + 1);
        for document in &documents {
            let path = options.out_dir.join(document.file_name);
            write_file(&path, document.contents.as_bytes())?;
            info!(event = "document_written", path = %path.display(), rows = document.rows);
            files.push(path);
        }

        let script = import_script(
            ImportTarget {
                client_command: &options.client_command,
                database: &options.database,
                schema_path: &options.schema_path,
            },
            &documents,
        );
        let script_path = options.out_dir.join(IMPORT_SCRIPT_NAME);
        write_file(&script_path, script.as_bytes())?;
        info!(event = "script_written", path = %script_path.display());
        files.push(script_path);

        let report = ConversionReport {
            input_path,
            encoding,
            data_lines: table.data_lines,
            rows_decoded: table.rows.len(),
            rows_skipped: table.skipped_rows,
            lookup_defaults,
            documents: documents
                .iter()
                .map(|document| DocumentReport {
                    file_name: document.file_name.to_string(),
                    rows: document.rows,
                })
                .collect(),
        };

        Ok(ConversionResult {
            out_dir: options.out_dir.clone(),
            files,
            report,
        })
    }
}

/// First candidate that exists in `dir`.
pub fn locate_input(dir: &Path, candidates: &[String]) -> Result<PathBuf, ConvertError> {
    candidates
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
        .ok_or_else(|| ConvertError::InputNotFound {
            candidates: candidates.to_vec(),
        })
}

/// Read and decode a whole file.
pub fn read_text(path: &Path, encoding: TextEncoding) -> Result<String, ConvertError> {
    let bytes = read_bytes(path)?;
    encoding.decode(&bytes).ok_or_else(|| ConvertError::Decode {
        path: path.to_path_buf(),
        encoding,
    })
}

/// Rewrite `input` as UTF-8 at `output`, detecting the source encoding.
///
/// The conversion itself never guesses; this is the explicit step for a
/// legacy-encoded export before converting it.
pub fn repair_encoding(input: &Path, output: &Path) -> Result<EncodingRepair, ConvertError> {
    let bytes = read_bytes(input)?;
    let (detected, text) =
        detect_and_decode(&bytes).ok_or_else(|| ConvertError::UnknownEncoding {
            path: input.to_path_buf(),
        })?;
    info!(event = "encoding_detected", path = %input.display(), encoding = %detected);

    write_file(output, text.as_bytes())?;
    Ok(EncodingRepair {
        input_path: input.to_path_buf(),
        output_path: output.to_path_buf(),
        detected,
        bytes_written: text.len(),
    })
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, ConvertError> {
    std::fs::read(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })
}
