//! Blending of revenue-multiple and EBITDA-multiple valuations
//!
//! Blending two independently derived valuations hedges a mis-specified
//! multiple on either side; the weight is an explicit assumption.

use crate::error::{Result, ValuationError};

/// Weighted combination of the two per-segment valuations.
///
/// Convention, fixed here for the whole crate: `weight` is the EBITDA
/// share, so
///
/// `blend = revenue_valuation * (1 - weight) + ebitda_valuation * weight`
///
/// `weight` must lie in `[0, 1]`; out-of-range weights fail with
/// `InvalidWeight` rather than extrapolating.
pub fn blend(revenue_valuation: f64, ebitda_valuation: f64, weight: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&weight) {
        return Err(ValuationError::InvalidWeight { weight });
    }
    Ok(revenue_valuation * (1.0 - weight) + ebitda_valuation * weight)
}
