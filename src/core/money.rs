//! Exact money arithmetic in minor units (cents).
//!
//! Control sums are never accumulated as decimals or floats: both operands
//! are converted to `i64` cents, added, and converted back once.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use super::error::SepaError;

/// Number of fractional digits carried by a minor unit.
pub const MINOR_UNIT_SCALE: u32 = 2;

/// Number of digits after the decimal point in the canonical form of `amount`.
///
/// Trailing zeros do not count: `144.20` has one decimal, `123.0` none.
pub fn decimals_number(amount: Decimal) -> u32 {
    amount.normalize().scale()
}

/// Convert an amount to integer minor units, rounding half away from zero
/// to two decimals first.
pub fn to_minor_units(amount: Decimal) -> Result<i64, SepaError> {
    amount
        .round_dp_with_strategy(MINOR_UNIT_SCALE, RoundingStrategy::MidpointAwayFromZero)
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|cents| cents.to_i64())
        .ok_or_else(|| SepaError::Conversion(format!("{amount} does not fit in minor units")))
}

/// Convert integer minor units back to an amount with two decimals.
pub fn to_amount(minor_units: i64) -> Decimal {
    Decimal::new(minor_units, MINOR_UNIT_SCALE)
}

/// `sum + amount`, computed in minor-unit space.
pub fn add_amounts(sum: Decimal, amount: Decimal) -> Result<Decimal, SepaError> {
    let total = to_minor_units(sum)?
        .checked_add(to_minor_units(amount)?)
        .ok_or_else(|| SepaError::Conversion(format!("{sum} + {amount} overflows")))?;
    Ok(to_amount(total))
}

/// Accept a float-typed amount at the API boundary.
///
/// The float is read through its shortest round-trippable decimal
/// rendering, so `76.3_f64` becomes exactly `76.3`.
pub fn amount_from_f64(value: f64) -> Result<Decimal, SepaError> {
    if !value.is_finite() {
        return Err(SepaError::Conversion(format!("{value} is not a finite amount")));
    }
    Decimal::from_str(&value.to_string())
        .map_err(|e| SepaError::Conversion(format!("{value} is out of range: {e}")))
}

/// Render an amount the way it appears in `CtrlSum` and `InstdAmt`:
/// no trailing zeros, no exponent.
pub fn format_amount(amount: Decimal) -> String {
    amount.normalize().to_string()
}
