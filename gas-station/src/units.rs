//! Unit conversion
//!
//! The gas station reports prices in tenths of gwei. Converting to wei:
//! ```text
//! raw / 10 => gwei => gwei * 1e9 => wei
//! simplifies to: raw * 1e8 => wei
//! ```
//!
//! The conversion is exact. The raw float is read as the shortest decimal that
//! round-trips to it (what the gas station wrote, e.g. `12.5` or `1e-30`), and
//! the multiplication happens on that decimal with unbounded integers. A value
//! with more fractional digits than the factor can absorb (e.g. `0.123456789`)
//! is rejected, never rounded.

use crate::{
    error::{GasPriceError, Result},
    types::Wei,
};
use num_bigint::BigUint;
use num_traits::Zero;

/// Power of ten taking tenths of gwei to wei
pub const CONVERSION_EXPONENT: u32 = 8;

/// Tenths of gwei to wei
pub const CONVERSION_FACTOR: u64 = 10u64.pow(CONVERSION_EXPONENT);

/// Convert a raw gas station quote into wei.
///
/// With `raw = digits * 10^exponent`, the result is
/// `digits * 10^(exponent + 8)`, which must be a whole number.
pub fn to_wei(raw: f64) -> Result<Wei> {
    if !raw.is_finite() {
        return Err(GasPriceError::NonIntegralConversion(raw));
    }
    if raw < 0.0 {
        return Err(GasPriceError::NegativeQuote(raw));
    }

    let (digits, exponent) =
        decimal_parts(raw.abs()).ok_or(GasPriceError::NonIntegralConversion(raw))?;
    let shift = exponent + CONVERSION_EXPONENT as i32;

    if shift >= 0 {
        return Ok(digits * pow10(shift.unsigned_abs()));
    }

    let divisor = pow10(shift.unsigned_abs());
    if !(&digits % &divisor).is_zero() {
        return Err(GasPriceError::NonIntegralConversion(raw));
    }

    Ok(digits / divisor)
}

/// Split a non-negative finite float into `(digits, exponent)` with
/// `value == digits * 10^exponent`, using its shortest round-trip digits.
fn decimal_parts(value: f64) -> Option<(BigUint, i32)> {
    // `{:e}` prints the shortest round-trip form, e.g. "1.25e1", "1e-30"
    let text = format!("{:e}", value);
    let (mantissa, exponent) = text.split_once('e')?;
    let exponent: i32 = exponent.parse().ok()?;

    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits = BigUint::parse_bytes(format!("{whole}{fraction}").as_bytes(), 10)?;

    Some((digits, exponent - fraction.len() as i32))
}

fn pow10(exponent: u32) -> BigUint {
    BigUint::from(10u32).pow(exponent)
}
