//! Market-multiple valuation

/// Implied value of a financial metric under a market multiple:
/// `metric * multiple`.
///
/// Total over the reals. A negative metric yields a negative implied
/// value, a legitimate signal that the segment is not yet
/// terminal-value-positive.
pub fn implied_value(metric: f64, multiple: f64) -> f64 {
    metric * multiple
}
