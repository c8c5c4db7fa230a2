mod course;
mod currency_code;
mod pricing_config;
mod tax_computation;

pub use course::Course;
pub use currency_code::{CurrencyCode, CurrencyCodeError};
pub use pricing_config::PricingConfig;
pub use tax_computation::{GatewayPayment, TaxComputation};
