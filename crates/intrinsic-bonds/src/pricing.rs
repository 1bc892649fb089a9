//! Present-value pricing for fixed-coupon bonds.
//!
//! Prices discount every remaining coupon and the face value at a flat
//! per-period rate. This is the same formula the yield search inverts.

use crate::error::{BondError, BondResult};
use crate::instrument::BondInstrument;

/// Discounts a fixed coupon stream plus redemption at a flat per-period
/// rate. The caller guarantees `per_period_rate > -1`.
pub(crate) fn discounted_price(
    coupon: f64,
    face: f64,
    periods: u32,
    per_period_rate: f64,
) -> f64 {
    let base = 1.0 + per_period_rate;
    let mut price = 0.0;
    for t in 1..=periods {
        price += coupon / base.powi(t as i32);
    }
    price + face / base.powi(periods as i32)
}

/// Computes the present value of the instrument at the given annual rate.
///
/// A matured instrument prices at its face value regardless of the rate.
///
/// # Errors
///
/// Returns [`BondError::DegenerateRate`] when the per-period rate is at or
/// below -1, where the discounting formula stops being meaningful.
pub fn price_at_yield(instrument: &BondInstrument, annual_rate: f64) -> BondResult<f64> {
    let per_period = annual_rate / f64::from(instrument.payments_per_year());
    if per_period <= -1.0 {
        return Err(BondError::degenerate_rate(per_period));
    }

    Ok(discounted_price(
        instrument.coupon_payment(),
        instrument.face_value(),
        instrument.num_periods(),
        per_period,
    ))
}

/// Annual coupon income divided by the observed price.
///
/// Ignores time to maturity and redemption gains, so it is only a coarse
/// screen next to the full yield search.
#[must_use]
pub fn current_yield(instrument: &BondInstrument) -> f64 {
    instrument.annual_coupon_rate() * instrument.face_value() / instrument.observed_price()
}
