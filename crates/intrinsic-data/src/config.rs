//! Analysis configuration.
//!
//! A single TOML file wires the data layer together: where the CSV
//! exports live, how long cached snapshots stay fresh, and the valuation
//! assumptions applied when a request carries none. Every key has a
//! default, so an empty file (or no file at all) still yields a working
//! configuration. Assumptions are validated at load time rather than at
//! first use.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use intrinsic_core::ValuationAssumptions;

use crate::cache::DEFAULT_TTL;
use crate::error::{DataError, DataResult};

// =============================================================================
// DATA FILES
// =============================================================================

/// Locations of the CSV exports the sources load from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataFilesConfig {
    /// Statement history file.
    #[serde(default = "default_statements_file")]
    pub statements_file: PathBuf,

    /// Company profile file.
    #[serde(default = "default_profiles_file")]
    pub profiles_file: PathBuf,

    /// Market snapshot file.
    #[serde(default = "default_snapshots_file")]
    pub snapshots_file: PathBuf,

    /// Bond listing file.
    #[serde(default = "default_bonds_file")]
    pub bonds_file: PathBuf,
}

fn default_statements_file() -> PathBuf {
    PathBuf::from("data/statements.csv")
}

fn default_profiles_file() -> PathBuf {
    PathBuf::from("data/profiles.csv")
}

fn default_snapshots_file() -> PathBuf {
    PathBuf::from("data/snapshots.csv")
}

fn default_bonds_file() -> PathBuf {
    PathBuf::from("data/bonds.csv")
}

impl Default for DataFilesConfig {
    fn default() -> Self {
        Self {
            statements_file: default_statements_file(),
            profiles_file: default_profiles_file(),
            snapshots_file: default_snapshots_file(),
            bonds_file: default_bonds_file(),
        }
    }
}

// =============================================================================
// ANALYSIS CONFIG
// =============================================================================

/// Top-level configuration for the analysis data layer.
///
/// # Example
///
/// ```toml
/// cache_ttl_secs = 120
///
/// [data]
/// statements_file = "exports/statements.csv"
/// snapshots_file = "exports/snapshots.csv"
///
/// [valuation]
/// growth_rate_5y = 0.07
/// discount_rate = 0.12
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Data file locations.
    #[serde(default)]
    pub data: DataFilesConfig,

    /// How long cached snapshots stay fresh, in seconds.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Valuation assumptions applied when a request carries none.
    #[serde(default)]
    pub valuation: ValuationAssumptions,
}

fn default_cache_ttl_secs() -> u64 {
    DEFAULT_TTL.as_secs()
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            data: DataFilesConfig::default(),
            cache_ttl_secs: default_cache_ttl_secs(),
            valuation: ValuationAssumptions::default(),
        }
    }
}

impl AnalysisConfig {
    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> DataResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> DataResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        info!(path = %path.display(), "loaded analysis config");
        Ok(config)
    }

    /// Checks the cross-field constraints: a non-zero cache TTL and
    /// assumptions the valuation will accept.
    pub fn validate(&self) -> DataResult<()> {
        if self.cache_ttl_secs == 0 {
            return Err(DataError::config("cache_ttl_secs must be positive"));
        }
        self.valuation.validate()?;
        Ok(())
    }

    /// The snapshot cache TTL as a [`Duration`].
    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Sets the cache TTL in seconds.
    #[must_use]
    pub fn with_cache_ttl_secs(mut self, secs: u64) -> Self {
        self.cache_ttl_secs = secs;
        self
    }

    /// Sets the default valuation assumptions.
    #[must_use]
    pub fn with_valuation(mut self, assumptions: ValuationAssumptions) -> Self {
        self.valuation = assumptions;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataError;
    use intrinsic_core::CoreError;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cache_ttl(), Duration::from_secs(300));
        assert_eq!(config.data.statements_file, PathBuf::from("data/statements.csv"));
        assert_eq!(config.valuation, ValuationAssumptions::default());
    }

    #[test]
    fn test_empty_toml_is_the_default() {
        let config = AnalysisConfig::from_toml_str("").unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn test_full_document_parses() {
        let config = AnalysisConfig::from_toml_str(
            r#"
            cache_ttl_secs = 120

            [data]
            statements_file = "exports/statements.csv"
            profiles_file = "exports/profiles.csv"
            snapshots_file = "exports/snapshots.csv"
            bonds_file = "exports/bonds.csv"

            [valuation]
            growth_rate_5y = 0.07
            perpetuity_growth_rate = 0.025
            discount_rate = 0.12
            "#,
        )
        .unwrap();

        assert_eq!(config.cache_ttl_secs, 120);
        assert_eq!(config.data.bonds_file, PathBuf::from("exports/bonds.csv"));
        assert_eq!(config.valuation.growth_rate_5y, 0.07);
        assert_eq!(config.valuation.discount_rate, 0.12);
    }

    #[test]
    fn test_partial_tables_fall_back_per_key() {
        let config = AnalysisConfig::from_toml_str(
            r#"
            [data]
            snapshots_file = "exports/snapshots.csv"

            [valuation]
            discount_rate = 0.15
            "#,
        )
        .unwrap();

        assert_eq!(config.data.snapshots_file, PathBuf::from("exports/snapshots.csv"));
        assert_eq!(config.data.statements_file, PathBuf::from("data/statements.csv"));
        assert_eq!(config.valuation.discount_rate, 0.15);
        assert_eq!(config.valuation.growth_rate_5y, 0.05);
        assert_eq!(config.cache_ttl_secs, 300);
    }

    #[test]
    fn test_invalid_assumptions_rejected_on_load() {
        let result = AnalysisConfig::from_toml_str(
            r#"
            [valuation]
            discount_rate = 0.01
            perpetuity_growth_rate = 0.02
            "#,
        );
        assert!(matches!(
            result,
            Err(DataError::Core(CoreError::InvalidAssumptions { .. }))
        ));
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let result = AnalysisConfig::from_toml_str("cache_ttl_secs = 0");
        match result {
            Err(DataError::Config(message)) => assert!(message.contains("positive")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_toml_is_a_config_error() {
        let result = AnalysisConfig::from_toml_str("cache_ttl_secs = ");
        assert!(matches!(result, Err(DataError::Config(_))));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"cache_ttl_secs = 60\n").unwrap();

        let config = AnalysisConfig::from_path(&path).unwrap();
        assert_eq!(config.cache_ttl(), Duration::from_secs(60));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AnalysisConfig::from_path(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(DataError::Io(_))));
    }
}
