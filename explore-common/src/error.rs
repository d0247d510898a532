//! Common error types for Project Explore

use thiserror::Error;

/// Common result type for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy shared by the catalog, resolver and configuration layers
///
/// Lookup errors are never fatal: callers recover with a placeholder or a
/// not-found view. Only `Config`, `Io`, `Parse` and `Toml` can stop startup.
#[derive(Error, Debug)]
pub enum Error {
    /// Requested key absent from the static data
    #[error("Lookup miss: {0}")]
    LookupMiss(String),

    /// Tier, variant or language value outside its closed set
    #[error("Index out of range: {0}")]
    IndexOutOfRange(String),

    /// Configuration loading or catalog validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog document could not be parsed
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// TOML configuration file could not be parsed
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// True for the recoverable lookup family (`LookupMiss`, `IndexOutOfRange`)
    pub fn is_lookup(&self) -> bool {
        matches!(self, Error::LookupMiss(_) | Error::IndexOutOfRange(_))
    }
}
