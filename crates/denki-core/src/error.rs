use thiserror::Error;

/// Core error type shared across denki crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A record violates the stock or date invariants.
    #[error("invalid record #{sequence}: {message}")]
    InvalidRecord { sequence: u32, message: String },
}

/// Convenience alias for results returned by denki crates.
pub type Result<T> = std::result::Result<T, Error>;
