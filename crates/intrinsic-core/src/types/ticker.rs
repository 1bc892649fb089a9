//! Company ticker identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Normalized company ticker symbol.
///
/// Tickers are trimmed and uppercased on construction so that map lookups
/// and joins across data sources agree on one spelling. Exchange suffixes
/// and class separators (`PETR4.SA`, `BRK-B`) pass through unchanged.
///
/// # Example
///
/// ```
/// use intrinsic_core::types::Ticker;
///
/// let ticker = Ticker::new(" aapl ").unwrap();
/// assert_eq!(ticker.as_str(), "AAPL");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Ticker(String);

impl Ticker {
    /// Creates a new validated ticker.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTicker`] if the symbol is empty after
    /// trimming.
    pub fn new(value: &str) -> CoreResult<Self> {
        let normalized = value.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(CoreError::invalid_ticker("empty symbol"));
        }
        Ok(Self(normalized))
    }

    /// Creates a ticker without the emptiness check (use with caution).
    #[must_use]
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_uppercase())
    }

    /// Returns the ticker as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Ticker {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<&str> for Ticker {
    fn from(s: &str) -> Self {
        Self::new_unchecked(s)
    }
}

impl From<String> for Ticker {
    fn from(s: String) -> Self {
        Self::new_unchecked(s)
    }
}
