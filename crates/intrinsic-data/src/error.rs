//! Error types for the data-loading layer.

use thiserror::Error;

use intrinsic_core::CoreError;

/// A specialized Result type for data-loading operations.
pub type DataResult<T> = Result<T, DataError>;

/// The error type for loading and configuration.
///
/// Load errors cover whole-file problems (unreadable file, unusable
/// header row). Individually malformed data rows are not errors; sources
/// log them at `warn` and skip them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    // ========== Files ==========
    /// Underlying file could not be read.
    #[error("I/O error: {0}")]
    Io(String),

    /// File content could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    // ========== Configuration ==========
    /// Configuration value rejected.
    #[error("Invalid config: {0}")]
    Config(String),

    // ========== Upstream Validation ==========
    /// A core record failed validation.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl DataError {
    /// Creates an I/O error from a message.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Creates a parse error from a message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates a config error from a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<std::io::Error> for DataError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for DataError {
    fn from(err: csv::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for DataError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
