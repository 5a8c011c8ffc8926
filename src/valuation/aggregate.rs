//! Aggregation of segment valuations into a portfolio value

use serde::{Deserialize, Serialize};

use super::engine::{value_segment, ValuationResult};
use super::timing::ValuationTiming;
use crate::error::Result;
use crate::segment::Segment;

/// Ordered segment valuations plus their pre-money sum
///
/// Built fresh on every recomputation; a new assumption set produces a new
/// `PortfolioValuation`, nothing is mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioValuation {
    pub segments: Vec<ValuationResult>,

    /// Sum of blended segment values
    pub pre_money_value: f64,
}

impl PortfolioValuation {
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

/// Sum blended segment values into a pre-money valuation.
///
/// Input order is preserved for reporting; it does not affect the sum.
/// An empty input is a zero-value, zero-segment portfolio, not an error.
pub fn aggregate(segments: Vec<ValuationResult>) -> PortfolioValuation {
    let pre_money_value = segments.iter().map(|r| r.blended_value).sum();
    PortfolioValuation {
        segments,
        pre_money_value,
    }
}

/// Value every segment and aggregate.
///
/// The first failing segment aborts the whole computation; no partial
/// portfolio is returned.
pub fn value_portfolio(
    segments: &[Segment],
    timing: &ValuationTiming,
    blend_weight: f64,
) -> Result<PortfolioValuation> {
    let results = segments
        .iter()
        .map(|segment| value_segment(segment, timing, blend_weight))
        .collect::<Result<Vec<_>>>()?;
    Ok(aggregate(results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValuationError;
    use crate::segment::ScenarioParams;
    use approx::assert_relative_eq;

    fn result(segment: &str, blended_value: f64) -> ValuationResult {
        ValuationResult {
            segment: segment.to_string(),
            revenue_npv: blended_value,
            ebitda_npv: blended_value,
            blended_value,
            years_to_terminal: 4.0,
        }
    }

    #[test]
    fn test_empty_aggregate() {
        let portfolio = aggregate(vec![]);
        assert_eq!(portfolio.segment_count(), 0);
        assert_eq!(portfolio.pre_money_value, 0.0);
    }

    #[test]
    fn test_sum_and_order_preserved() {
        let portfolio = aggregate(vec![
            result("Domestic", 92_000_000.0),
            result("International", 69_000_000.0),
            result("RPM", 12_000_000.0),
        ]);

        assert_eq!(portfolio.segment_count(), 3);
        assert_eq!(portfolio.segments[0].segment, "Domestic");
        assert_eq!(portfolio.segments[2].segment, "RPM");
        assert_relative_eq!(portfolio.pre_money_value, 173_000_000.0);
    }

    #[test]
    fn test_sum_is_order_independent() {
        let forward = aggregate(vec![
            result("A", 92_445_626.9),
            result("B", 69_787_201.5),
            result("C", 12_404_462.3),
        ]);
        let reversed = aggregate(vec![
            result("C", 12_404_462.3),
            result("B", 69_787_201.5),
            result("A", 92_445_626.9),
        ]);

        assert_relative_eq!(
            forward.pre_money_value,
            reversed.pre_money_value,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_default_scenario_portfolio() {
        // Full three-segment scenario with the canonical assumptions,
        // valued as of the approval date
        let params = ScenarioParams::default();
        let segments = params.build_segments().unwrap();
        let timing = params.timing(params.approval_date);

        let portfolio = value_portfolio(&segments, &timing, params.blend_weight).unwrap();
        assert_eq!(portfolio.segment_count(), 3);

        // Domestic: 4 years at 50%
        let domestic = (94_295_745.0 * 4.0 / 1.5_f64.powf(4.0)
            + 55_882_649.0 * 10.0 / 1.5_f64.powf(4.0))
            / 2.0;
        // International: 12-month lag, 5 years at 60%
        let international = (140_999_280.0 * 4.0 / 1.6_f64.powf(5.0)
            + 89_954_378.0 * 10.0 / 1.6_f64.powf(5.0))
            / 2.0;
        // RPM: 12-month lag, 5 years at 70%
        let rpm = (37_897_007.0 * 4.0 / 1.7_f64.powf(5.0)
            + 20_067_330.0 * 10.0 / 1.7_f64.powf(5.0))
            / 2.0;

        assert_relative_eq!(portfolio.segments[0].blended_value, domestic, max_relative = 1e-12);
        assert_relative_eq!(
            portfolio.segments[1].blended_value,
            international,
            max_relative = 1e-12
        );
        assert_relative_eq!(portfolio.segments[2].blended_value, rpm, max_relative = 1e-12);
        assert_relative_eq!(
            portfolio.pre_money_value,
            domestic + international + rpm,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_failure_aborts_whole_portfolio() {
        let params = ScenarioParams {
            discount_rate_rpm: -1.0,
            ..Default::default()
        };
        let segments = params.build_segments().unwrap();
        let timing = params.timing(params.approval_date);

        let err = value_portfolio(&segments, &timing, params.blend_weight).unwrap_err();
        assert!(err.to_string().contains("RPM"));
        assert!(matches!(
            err.root_cause(),
            ValuationError::InvalidDiscountRate { .. }
        ));
    }
}
