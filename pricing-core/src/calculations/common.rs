//! Common utility functions for charge calculations.
//!
//! This module provides the rounding and precision checks shared by the
//! calculator and its callers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to `dp` decimal places using half-up rounding.
///
/// Values exactly at the midpoint are rounded away from zero, so for the
/// non-negative amounts handled here this is classic half-up rounding.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pricing_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(539.82), 0), dec!(540));
/// assert_eq!(round_half_up(dec!(0.5), 0), dec!(1));
/// assert_eq!(round_half_up(dec!(123.455), 2), dec!(123.46));
/// ```
pub fn round_half_up(
    value: Decimal,
    dp: u32,
) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a decimal value to a whole major currency unit (half-up).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pricing_core::calculations::common::round_to_whole_units;
///
/// assert_eq!(round_to_whole_units(dec!(224.99)), dec!(225));
/// assert_eq!(round_to_whole_units(dec!(180.49)), dec!(180));
/// ```
pub fn round_to_whole_units(value: Decimal) -> Decimal {
    round_half_up(value, 0)
}

/// Returns true if `value` is a whole number of subunits.
///
/// With `subunit_factor` 100, `10.25` fits but `10.255` does not.
pub fn fits_subunit(
    value: Decimal,
    subunit_factor: u32,
) -> bool {
    value
        .checked_mul(Decimal::from(subunit_factor))
        .is_some_and(|scaled| scaled.fract().is_zero())
}
