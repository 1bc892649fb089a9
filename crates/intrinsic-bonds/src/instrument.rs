//! Bond instrument definition.
//!
//! A [`BondInstrument`] captures the handful of numbers a market listing
//! provides: face value, coupon, remaining life, payment frequency, and the
//! quoted price. Instruments are built fresh for each evaluation and are
//! immutable for the duration of a solve.

use crate::error::{BondError, BondResult};

/// Default face value when a listing does not quote one.
pub const DEFAULT_FACE_VALUE: f64 = 100.0;

/// Default payment frequency (semi-annual).
pub const DEFAULT_PAYMENTS_PER_YEAR: u32 = 2;

/// A fixed-coupon bond as quoted on a market listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondInstrument {
    face_value: f64,
    annual_coupon_rate: f64,
    years_to_maturity: f64,
    payments_per_year: u32,
    observed_price: f64,
}

impl BondInstrument {
    /// Creates a validated instrument.
    ///
    /// # Errors
    ///
    /// Returns [`BondError::InvalidSpec`] when the face value or observed
    /// price is not positive, or the payment frequency is zero. Zero or
    /// negative years to maturity are accepted; the instrument is then
    /// treated as matured.
    pub fn new(
        face_value: f64,
        annual_coupon_rate: f64,
        years_to_maturity: f64,
        payments_per_year: u32,
        observed_price: f64,
    ) -> BondResult<Self> {
        if face_value <= 0.0 {
            return Err(BondError::invalid_spec("face value must be positive"));
        }
        if payments_per_year == 0 {
            return Err(BondError::invalid_spec(
                "payments per year must be at least 1",
            ));
        }
        if observed_price <= 0.0 {
            return Err(BondError::invalid_spec("observed price must be positive"));
        }

        Ok(Self {
            face_value,
            annual_coupon_rate,
            years_to_maturity,
            payments_per_year,
            observed_price,
        })
    }

    /// Returns a builder for constructing an instrument.
    #[must_use]
    pub fn builder() -> BondInstrumentBuilder {
        BondInstrumentBuilder::new()
    }

    /// Redemption value paid at maturity.
    #[must_use]
    pub fn face_value(&self) -> f64 {
        self.face_value
    }

    /// Annual coupon rate as a decimal (0.05 = 5%).
    #[must_use]
    pub fn annual_coupon_rate(&self) -> f64 {
        self.annual_coupon_rate
    }

    /// Remaining life in years.
    #[must_use]
    pub fn years_to_maturity(&self) -> f64 {
        self.years_to_maturity
    }

    /// Coupon payments per year.
    #[must_use]
    pub fn payments_per_year(&self) -> u32 {
        self.payments_per_year
    }

    /// The quoted market price.
    #[must_use]
    pub fn observed_price(&self) -> f64 {
        self.observed_price
    }

    /// Coupon amount paid each period.
    #[must_use]
    pub fn coupon_payment(&self) -> f64 {
        self.annual_coupon_rate / f64::from(self.payments_per_year) * self.face_value
    }

    /// Number of coupon periods remaining, rounded to the nearest whole
    /// period. A bond inside its final period still has one payment left;
    /// a matured bond has none.
    #[must_use]
    pub fn num_periods(&self) -> u32 {
        if self.is_matured() {
            return 0;
        }
        let periods = (self.years_to_maturity * f64::from(self.payments_per_year)).round();
        (periods as u32).max(1)
    }

    /// Whether the bond has already matured.
    #[must_use]
    pub fn is_matured(&self) -> bool {
        self.years_to_maturity <= 0.0
    }
}

/// Builder for [`BondInstrument`].
///
/// The coupon rate, remaining life, and observed price are required; face
/// value and payment frequency fall back to listing conventions.
#[derive(Debug, Clone, Default)]
pub struct BondInstrumentBuilder {
    face_value: Option<f64>,
    annual_coupon_rate: Option<f64>,
    years_to_maturity: Option<f64>,
    payments_per_year: Option<u32>,
    observed_price: Option<f64>,
}

impl BondInstrumentBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the face value.
    #[must_use]
    pub fn face_value(mut self, face_value: f64) -> Self {
        self.face_value = Some(face_value);
        self
    }

    /// Sets the annual coupon rate as a decimal.
    #[must_use]
    pub fn annual_coupon_rate(mut self, rate: f64) -> Self {
        self.annual_coupon_rate = Some(rate);
        self
    }

    /// Sets the remaining life in years.
    #[must_use]
    pub fn years_to_maturity(mut self, years: f64) -> Self {
        self.years_to_maturity = Some(years);
        self
    }

    /// Sets the number of coupon payments per year.
    #[must_use]
    pub fn payments_per_year(mut self, payments: u32) -> Self {
        self.payments_per_year = Some(payments);
        self
    }

    /// Sets the quoted market price.
    #[must_use]
    pub fn observed_price(mut self, price: f64) -> Self {
        self.observed_price = Some(price);
        self
    }

    /// Builds the instrument.
    ///
    /// # Errors
    ///
    /// Returns [`BondError::MissingField`] when a required field was not
    /// provided, or [`BondError::InvalidSpec`] when a value fails
    /// validation.
    pub fn build(self) -> BondResult<BondInstrument> {
        let annual_coupon_rate = self
            .annual_coupon_rate
            .ok_or_else(|| BondError::missing_field("annual_coupon_rate"))?;
        let years_to_maturity = self
            .years_to_maturity
            .ok_or_else(|| BondError::missing_field("years_to_maturity"))?;
        let observed_price = self
            .observed_price
            .ok_or_else(|| BondError::missing_field("observed_price"))?;

        let face_value = self.face_value.unwrap_or(DEFAULT_FACE_VALUE);
        let payments_per_year = self.payments_per_year.unwrap_or(DEFAULT_PAYMENTS_PER_YEAR);

        BondInstrument::new(
            face_value,
            annual_coupon_rate,
            years_to_maturity,
            payments_per_year,
            observed_price,
        )
    }
}
