//! # Intrinsic Bonds
//!
//! Bond instrument modelling and yield estimation for the Intrinsic
//! fundamental-analysis toolkit.
//!
//! A [`instrument::BondInstrument`] captures a market listing (face value,
//! coupon, remaining life, payment frequency, quoted price). The
//! [`ytm::YtmSolver`] inverts the present-value formula in
//! [`pricing`] to recover the annual yield implied by the quote, and
//! reports how the search ended through [`ytm::YtmStatus`] rather than
//! failing: matured bonds yield exactly zero, quotes no admissible rate
//! can reproduce come back as a sentinel, and an exhausted iteration
//! budget returns the best rate found.
//!
//! ## Quick Start
//!
//! ```
//! use intrinsic_bonds::prelude::*;
//!
//! // A 5-year semi-annual 5% bond quoted below par
//! let bond = BondInstrument::builder()
//!     .annual_coupon_rate(0.05)
//!     .years_to_maturity(5.0)
//!     .observed_price(95.0)
//!     .build()?;
//!
//! let result = YtmSolver::new().solve(&bond);
//! assert!(result.is_converged());
//! assert!(result.rate > 0.05);
//! # Ok::<(), intrinsic_bonds::BondError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod instrument;
pub mod pricing;
pub mod ytm;

pub use error::{BondError, BondResult};

/// Commonly used types and functions.
pub mod prelude {
    pub use crate::error::{BondError, BondResult};
    pub use crate::instrument::{BondInstrument, BondInstrumentBuilder};
    pub use crate::pricing::{current_yield, price_at_yield};
    pub use crate::ytm::{
        estimate_ytm, YtmMethod, YtmResult, YtmSolver, YtmStatus, UNDEFINED_YIELD,
    };
}
