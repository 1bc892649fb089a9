//! # Intrinsic Data
//!
//! Data loading for the Intrinsic fundamental-analysis toolkit: CSV-backed
//! sources, snapshot caching, and configuration.
//!
//! The calculator crates never read files themselves; they consume the
//! source traits defined here:
//!
//! - [`sources::EquitySource`]: statement history and company profiles
//! - [`sources::SnapshotSource`]: point-in-time market data
//! - [`sources::BondSource`]: bond listings per issuer
//!
//! The bundled backends load spreadsheet-style CSV exports:
//! [`equity::CsvEquitySource`] normalizes provider header spellings through
//! an alias table, [`snapshot::CsvSnapshotSource`] holds one row of market
//! figures per ticker, and [`bonds::CsvBondSource`] dates listed maturities
//! against an as-of date. [`cache::CachedSnapshotSource`] wraps any
//! snapshot source with an expiring read-through cache, and
//! [`config::AnalysisConfig`] wires file locations, the cache TTL, and
//! default valuation assumptions from one TOML file.
//!
//! ## Design Philosophy
//!
//! - **Fallible loads, infallible lookups**: files are parsed up front at
//!   construction and `reload()`; after that every lookup is served from
//!   memory and an unknown ticker is an empty answer, not an error
//! - **Forgiving rows, strict files**: individually malformed rows are
//!   logged and skipped; a file whose header row is unusable is a load
//!   error
//! - **Zero-filled figures**: absent numeric cells become `0.0`, matching
//!   the core statement convention
//!
//! ## Quick Start
//!
//! ```rust
//! use intrinsic_core::Ticker;
//! use intrinsic_data::prelude::*;
//!
//! let config = AnalysisConfig::default();
//! // Sources over files that do not exist load as empty.
//! let snapshots = CsvSnapshotSource::new(&config.data.snapshots_file)?;
//! let cached = CachedSnapshotSource::new(snapshots, config.cache_ttl());
//! assert!(cached.snapshot(&Ticker::new("ACME")?).is_none());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod bonds;
pub mod cache;
pub mod config;
pub mod equity;
pub mod error;
pub mod snapshot;
pub mod sources;

pub use error::{DataError, DataResult};

/// Commonly used types and traits.
pub mod prelude {
    pub use crate::bonds::CsvBondSource;
    pub use crate::cache::{CachedSnapshotSource, ExpiringCache};
    pub use crate::config::{AnalysisConfig, DataFilesConfig};
    pub use crate::equity::CsvEquitySource;
    pub use crate::error::{DataError, DataResult};
    pub use crate::snapshot::CsvSnapshotSource;
    pub use crate::sources::{BondListing, BondSource, EquitySource, SnapshotSource};
}
