//! Descriptive company reference data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Ticker;

/// Descriptive reference data for one company.
///
/// Everything beyond the ticker is optional; sources differ in what they
/// publish and screens render whatever is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Company ticker.
    pub ticker: Ticker,
    /// Legal or display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Country of domicile.
    #[serde(default)]
    pub country: Option<String>,
    /// Sector classification.
    #[serde(default)]
    pub sector: Option<String>,
    /// Industry classification.
    #[serde(default)]
    pub industry: Option<String>,
    /// Company website.
    #[serde(default)]
    pub website: Option<String>,
    /// Long business description.
    #[serde(default)]
    pub description: Option<String>,
    /// Date the profile was last refreshed at the source.
    #[serde(default)]
    pub last_updated: Option<NaiveDate>,
}

impl CompanyProfile {
    /// Creates an empty profile for a ticker.
    #[must_use]
    pub fn new(ticker: Ticker) -> Self {
        Self {
            ticker,
            name: None,
            country: None,
            sector: None,
            industry: None,
            website: None,
            description: None,
            last_updated: None,
        }
    }
}
