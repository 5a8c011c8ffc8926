//! Segment and projection data structures
//!
//! Pure data: the engine consumes these by reference and holds no state
//! between invocations.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValuationError};

/// One forecast period for a segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodProjection {
    /// Calendar year of the period
    pub period: i32,
    pub revenue: f64,
    pub ebitda: f64,
}

/// Ordered revenue/EBITDA forecast over a fixed horizon
///
/// Periods are contiguous and strictly increasing; this is enforced at
/// construction. Negative EBITDA in early periods is legal and expected
/// (pre-revenue burn).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSet {
    periods: Vec<PeriodProjection>,
}

impl ProjectionSet {
    /// Create a projection set, validating period ordering
    pub fn new(periods: Vec<PeriodProjection>) -> Result<Self> {
        for pair in periods.windows(2) {
            let expected = pair[0].period + 1;
            if pair[1].period != expected {
                return Err(ValuationError::NonContiguousPeriods {
                    expected,
                    found: pair[1].period,
                });
            }
        }
        Ok(Self { periods })
    }

    pub fn periods(&self) -> &[PeriodProjection] {
        &self.periods
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Final forecast period, the source of terminal values
    pub fn terminal(&self) -> Result<&PeriodProjection> {
        self.periods.last().ok_or(ValuationError::EmptyProjection)
    }

    /// Forecast span in years: terminal period minus first period
    ///
    /// A single-period forecast has a zero-year horizon (the terminal
    /// value is already stated as of the first period).
    pub fn horizon_years(&self) -> Result<f64> {
        let first = self.periods.first().ok_or(ValuationError::EmptyProjection)?;
        let last = self.periods.last().ok_or(ValuationError::EmptyProjection)?;
        Ok((last.period - first.period) as f64)
    }
}

/// One approval-gated revenue segment with its valuation assumptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub name: String,

    /// Revenue/EBITDA forecast over the modeled horizon
    pub projections: ProjectionSet,

    /// Months between the approval event and this segment's revenue start
    pub adoption_lag_months: u32,

    /// Annual discount rate (fraction, e.g. 0.5 = 50%)
    pub discount_rate: f64,

    /// Multiple applied to terminal revenue
    pub revenue_multiple: f64,

    /// Multiple applied to terminal EBITDA
    pub ebitda_multiple: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn periods(years: &[(i32, f64, f64)]) -> Vec<PeriodProjection> {
        years
            .iter()
            .map(|&(period, revenue, ebitda)| PeriodProjection {
                period,
                revenue,
                ebitda,
            })
            .collect()
    }

    #[test]
    fn test_contiguous_periods_accepted() {
        let set = ProjectionSet::new(periods(&[
            (2025, 0.0, -3_804_274.0),
            (2026, 5_248_050.0, 259_896.0),
            (2027, 20_719_845.0, 10_043_270.0),
        ]))
        .unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(set.horizon_years().unwrap(), 2.0);
        assert_eq!(set.terminal().unwrap().period, 2027);
    }

    #[test]
    fn test_gap_rejected() {
        let err = ProjectionSet::new(periods(&[(2025, 0.0, 0.0), (2027, 1.0, 1.0)])).unwrap_err();
        assert_eq!(
            err,
            ValuationError::NonContiguousPeriods {
                expected: 2026,
                found: 2027
            }
        );
    }

    #[test]
    fn test_decreasing_rejected() {
        let err = ProjectionSet::new(periods(&[(2026, 0.0, 0.0), (2025, 1.0, 1.0)])).unwrap_err();
        assert!(matches!(err, ValuationError::NonContiguousPeriods { .. }));
    }

    #[test]
    fn test_empty_projection() {
        let set = ProjectionSet::new(vec![]).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.terminal().unwrap_err(), ValuationError::EmptyProjection);
        assert_eq!(
            set.horizon_years().unwrap_err(),
            ValuationError::EmptyProjection
        );
    }

    #[test]
    fn test_single_period_horizon() {
        let set = ProjectionSet::new(periods(&[(2029, 100.0, 50.0)])).unwrap();
        assert_eq!(set.horizon_years().unwrap(), 0.0);
    }
}
