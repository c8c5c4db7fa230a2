use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::CurrencyCode;

/// Result of a charge calculation for one listed price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxComputation {
    /// The listed price, unchanged.
    pub base_amount: Decimal,

    /// Tax on the listed price, rounded to a whole major unit.
    pub gst_amount: Decimal,

    /// `base_amount + gst_amount`.
    pub total_amount: Decimal,

    /// `total_amount` expressed in currency subunits (paise for INR).
    pub gateway_amount: u64,

    pub currency: CurrencyCode,
}

/// Payload handed to a payment gateway when creating an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayPayment {
    /// Amount in integer subunits.
    pub amount: u64,
    pub currency: String,
}

impl TaxComputation {
    pub fn gateway_payment(&self) -> GatewayPayment {
        GatewayPayment {
            amount: self.gateway_amount,
            currency: self.currency.as_str().to_string(),
        }
    }
}
