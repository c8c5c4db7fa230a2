use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::PricingError;
use crate::models::CurrencyCode;

/// Jurisdiction parameters for charge calculations.
///
/// Missing keys in a deserialized config fall back to the Indian GST
/// defaults: 18% tax, INR, 100 paise per rupee. Unknown keys are rejected
/// so a misspelled option cannot silently fall back to a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingConfig {
    /// Tax rate as a percentage, e.g. `18` for 18% GST.
    pub tax_rate_percent: Decimal,

    /// Currency the listed prices and the gateway amount are denominated in.
    pub currency_code: CurrencyCode,

    /// Number of subunits in one major unit (100 paise per rupee).
    pub subunit_factor: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate_percent: Decimal::from(18),
            currency_code: CurrencyCode::inr(),
            subunit_factor: 100,
        }
    }
}

impl PricingConfig {
    /// The tax rate as a fraction (`0.18` for 18%).
    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate_percent / Decimal::ONE_HUNDRED
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError`] if:
    /// - `tax_rate_percent` is not in [0, 100]
    /// - `subunit_factor` is zero
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use pricing_core::{PricingConfig, PricingError};
    ///
    /// let config = PricingConfig {
    ///     tax_rate_percent: dec!(-5),
    ///     ..PricingConfig::default()
    /// };
    ///
    /// assert_eq!(config.validate(), Err(PricingError::InvalidTaxRate(dec!(-5))));
    /// ```
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.tax_rate_percent < Decimal::ZERO || self.tax_rate_percent > Decimal::ONE_HUNDRED {
            return Err(PricingError::InvalidTaxRate(self.tax_rate_percent));
        }
        if self.subunit_factor == 0 {
            return Err(PricingError::InvalidSubunitFactor(self.subunit_factor));
        }
        Ok(())
    }
}
