//! # Intrinsic Math
//!
//! Scalar root-finding for the Intrinsic fundamental-analysis toolkit.
//!
//! This crate provides:
//!
//! - **Solvers**: bracketed bisection with a small configuration surface,
//!   used by the bond yield estimator
//!
//! ## Design Philosophy
//!
//! - **Reliability over speed**: present value is monotone in the discount
//!   rate, so a guaranteed bracketing method beats a faster method that
//!   can diverge
//! - **Plain `f64`**: solver inputs and outputs are ordinary floating point
//! - **Explicit failure**: budget exhaustion and bad brackets are typed
//!   errors, never silent approximations

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{bisection, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
