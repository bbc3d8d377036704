//! Common utility functions for offer calculations.
//!
//! Shared rounding and clamping helpers used across the worksheet modules.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use oic_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a decimal value to the nearest whole dollar, halves away from zero.
///
/// Box amounts on the offer worksheets are whole dollars.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use oic_core::calculations::common::round_whole_dollar;
///
/// assert_eq!(round_whole_dollar(dec!(1234.49)), dec!(1234));
/// assert_eq!(round_whole_dollar(dec!(1234.50)), dec!(1235));
/// ```
pub fn round_whole_dollar(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Sums amounts, saturating at the `Decimal` bounds instead of overflowing.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use oic_core::calculations::common::saturating_sum;
///
/// assert_eq!(saturating_sum([dec!(1.50), dec!(2.25)]), dec!(3.75));
/// assert_eq!(saturating_sum([Decimal::MAX, dec!(1)]), Decimal::MAX);
/// ```
pub fn saturating_sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values
        .into_iter()
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Clamps a caller-supplied amount to zero when negative.
///
/// Inputs are validated before they reach the engine, so a negative value
/// here is logged rather than rejected.
pub fn non_negative(
    field: &'static str,
    value: Decimal,
) -> Decimal {
    if value < Decimal::ZERO {
        warn!(field, value = %value, "negative amount treated as zero");
        return Decimal::ZERO;
    }
    value
}
