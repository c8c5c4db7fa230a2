//! Charge calculation for course enrollments.
//!
//! This module turns a listed course price into the tax-inclusive amount to
//! charge and the subunit amount submitted to a payment gateway.

pub mod charge;
pub mod common;

pub use charge::{ChargeCalculator, PricingError, compute_charge_amount};
