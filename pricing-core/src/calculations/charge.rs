//! Tax-inclusive charge calculation for course enrollment.
//!
//! Given a course's listed price in major currency units, the calculator
//! produces the tax amount, the total to charge and the amount a payment
//! gateway expects in currency subunits.
//!
//! # Calculation Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Listed price (rupees), must be non-negative and a whole number of paise |
//! | 2    | GST: Step 1 × tax rate, rounded half-up to a whole rupee |
//! | 3    | Total: Step 1 + Step 2 |
//! | 4    | Gateway amount: Step 3 × subunit factor (paise) |
//!
//! # Rounding
//!
//! GST is rounded to the nearest whole major unit with ties rounding away
//! from zero (539.82 → 540, 0.5 → 1). Listed prices must already be a whole
//! number of subunits, so the gateway amount is always exact; a price such
//! as `10.005` INR is rejected rather than truncated.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pricing_core::{ChargeCalculator, PricingConfig};
//!
//! let calculator = ChargeCalculator::new(PricingConfig::default());
//! let result = calculator.compute_charge_amount(dec!(2999)).unwrap();
//!
//! assert_eq!(result.gst_amount, dec!(540));
//! assert_eq!(result.total_amount, dec!(3539));
//! assert_eq!(result.gateway_amount, 353900);
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::common::{fits_subunit, round_to_whole_units};
use crate::models::{PricingConfig, TaxComputation};

/// Errors that can occur during charge calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// The price is negative, non-finite, finer than one subunit, or too
    /// large to express in subunits.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// The tax rate percentage must be between 0 and 100.
    #[error("tax rate percentage must be between 0 and 100, got {0}")]
    InvalidTaxRate(Decimal),

    /// The subunit factor must be positive.
    #[error("subunit factor must be positive, got {0}")]
    InvalidSubunitFactor(u32),
}

/// Calculator for tax-inclusive course charges.
///
/// Holds no state besides its configuration, so one instance can be shared
/// freely between callers and threads.
#[derive(Debug, Clone, Default)]
pub struct ChargeCalculator {
    config: PricingConfig,
}

impl ChargeCalculator {
    /// Creates a new calculator with the given configuration.
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    /// The configuration every charge is computed with.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Computes the charge for a listed price.
    ///
    /// This is the main entry point. It validates the configuration and the
    /// price, then performs each calculation step and returns the result.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidAmount`] if `base_price` is negative,
    /// is not a whole number of subunits, or overflows the gateway amount.
    /// Returns the matching [`PricingError`] variant if the configuration is
    /// invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use pricing_core::{ChargeCalculator, PricingConfig, PricingError};
    ///
    /// let calculator = ChargeCalculator::new(PricingConfig::default());
    ///
    /// let result = calculator.compute_charge_amount(dec!(1000)).unwrap();
    /// assert_eq!(result.gst_amount, dec!(180));
    /// assert_eq!(result.gateway_amount, 118000);
    ///
    /// let err = calculator.compute_charge_amount(dec!(-1)).unwrap_err();
    /// assert!(matches!(err, PricingError::InvalidAmount(_)));
    /// ```
    pub fn compute_charge_amount(
        &self,
        base_price: Decimal,
    ) -> Result<TaxComputation, PricingError> {
        self.config.validate()?;
        self.check_base_price(base_price)?;
        // Drops the sign of a negative zero so results never show "-0".
        let base_price = if base_price.is_zero() {
            Decimal::ZERO
        } else {
            base_price
        };

        let gst_amount = self.gst_amount(base_price)?;
        let total_amount = base_price
            .checked_add(gst_amount)
            .ok_or_else(|| overflow(base_price))?;
        let gateway_amount = self.gateway_amount(total_amount)?;

        debug!(
            base_amount = %base_price,
            gst_amount = %gst_amount,
            total_amount = %total_amount,
            gateway_amount,
            currency = %self.config.currency_code,
            "computed charge amount"
        );

        Ok(TaxComputation {
            base_amount: base_price,
            gst_amount,
            total_amount,
            gateway_amount,
            currency: self.config.currency_code.clone(),
        })
    }

    /// Computes the charge for a floating-point price.
    ///
    /// `NaN` and infinities are rejected. Finite values are converted to the
    /// shortest decimal that round-trips, so `10.1_f64` becomes `10.1`.
    /// Float noise is kept: `0.1 + 0.2` is `0.30000000000000004`, which is
    /// finer than one subunit and therefore rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use pricing_core::{ChargeCalculator, PricingError};
    ///
    /// let calculator = ChargeCalculator::default();
    ///
    /// assert_eq!(calculator.compute_charge_amount_f64(1250.0).unwrap().gateway_amount, 147500);
    /// assert!(matches!(
    ///     calculator.compute_charge_amount_f64(f64::NAN),
    ///     Err(PricingError::InvalidAmount(_))
    /// ));
    /// ```
    pub fn compute_charge_amount_f64(
        &self,
        base_price: f64,
    ) -> Result<TaxComputation, PricingError> {
        if !base_price.is_finite() {
            warn!(base_price, "rejected non-finite price");
            return Err(PricingError::InvalidAmount(format!(
                "price must be finite, got {base_price}"
            )));
        }
        let price = Decimal::from_str(&base_price.to_string()).map_err(|_| {
            PricingError::InvalidAmount(format!("price {base_price} is out of range"))
        })?;
        self.compute_charge_amount(price)
    }

    /// Rejects prices that are not valid monetary values.
    ///
    /// A zero price is allowed but logged, since checkout should never ask
    /// for one.
    fn check_base_price(
        &self,
        base_price: Decimal,
    ) -> Result<(), PricingError> {
        if base_price.is_sign_negative() && !base_price.is_zero() {
            warn!(base_price = %base_price, "rejected negative price");
            return Err(PricingError::InvalidAmount(format!(
                "price must be non-negative, got {base_price}"
            )));
        }
        if !fits_subunit(base_price, self.config.subunit_factor) {
            warn!(
                base_price = %base_price,
                subunit_factor = self.config.subunit_factor,
                "rejected price finer than one subunit"
            );
            return Err(PricingError::InvalidAmount(format!(
                "price {base_price} is not a whole number of {} subunits",
                self.config.currency_code
            )));
        }
        if base_price.is_zero() {
            warn!("price is zero; nothing will be charged");
        }
        Ok(())
    }

    /// Tax on the listed price, rounded to a whole major unit.
    fn gst_amount(
        &self,
        base_price: Decimal,
    ) -> Result<Decimal, PricingError> {
        let tax = base_price
            .checked_mul(self.config.tax_rate())
            .ok_or_else(|| overflow(base_price))?;
        Ok(round_to_whole_units(tax))
    }

    /// Total expressed in integer subunits.
    fn gateway_amount(
        &self,
        total_amount: Decimal,
    ) -> Result<u64, PricingError> {
        total_amount
            .checked_mul(Decimal::from(self.config.subunit_factor))
            .and_then(|scaled| scaled.to_u64())
            .ok_or_else(|| overflow(total_amount))
    }
}

fn overflow(amount: Decimal) -> PricingError {
    warn!(amount = %amount, "amount overflows gateway subunits");
    PricingError::InvalidAmount(format!("amount {amount} is too large"))
}

/// Computes the charge for a listed price with the default Indian GST
/// configuration (18%, INR, paise).
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use pricing_core::compute_charge_amount;
///
/// let result = compute_charge_amount(dec!(1250)).unwrap();
///
/// assert_eq!(result.gst_amount, dec!(225));
/// assert_eq!(result.total_amount, dec!(1475));
/// assert_eq!(result.gateway_amount, 147500);
/// ```
pub fn compute_charge_amount(base_price: Decimal) -> Result<TaxComputation, PricingError> {
    ChargeCalculator::default().compute_charge_amount(base_price)
}
