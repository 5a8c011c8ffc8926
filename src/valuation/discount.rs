//! Present-value discounting
//!
//! `pv = value / (1 + rate)^years`

use crate::error::{Result, ValuationError};

/// Discount a nominal future value to present value:
///
/// `value / (1 + rate)^years`
///
/// Fails with `InvalidDiscountRate` when `1 + rate <= 0`: rate = -1 is a
/// division by zero, and rates below -1 put a fractional power over a
/// negative base. Negative `years` is permitted and inflates the value.
pub fn discount(value: f64, rate: f64, years: f64) -> Result<f64> {
    if 1.0 + rate <= 0.0 {
        return Err(ValuationError::InvalidDiscountRate { rate });
    }
    Ok(value / (1.0 + rate).powf(years))
}
