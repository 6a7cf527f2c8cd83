use std::path::PathBuf;

use thiserror::Error;

use crate::encoding::TextEncoding;

/// Errors that stop a conversion run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("no input CSV found; looked for: {}", .candidates.join(", "))]
    InputNotFound { candidates: Vec<String> },
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {} as {encoding}", .path.display())]
    Decode {
        path: PathBuf,
        encoding: TextEncoding,
    },
    #[error("could not decode {} as any of utf8, shift_jis, euc_jp or iso_2022_jp", .path.display())]
    UnknownEncoding { path: PathBuf },
    #[error("insufficient CSV data: {lines} non-empty line(s), need a header and at least one row")]
    InsufficientData { lines: usize },
    #[error("no valid rows: all {skipped} data row(s) had a field count different from the header")]
    NoValidRows { skipped: usize },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
