//! Per-segment valuation
//!
//! Terminal revenue and EBITDA are carried to implied values under their
//! multiples, each discounted over the segment's years-to-terminal, then
//! blended into one segment value.

use serde::{Deserialize, Serialize};

use super::blend::blend;
use super::discount::discount;
use super::multiple::implied_value;
use super::timing::ValuationTiming;
use crate::error::Result;
use crate::segment::Segment;

/// Valuation of one segment, suitable for tabular display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    pub segment: String,

    /// Terminal revenue x revenue multiple, discounted to the as-of date
    pub revenue_npv: f64,

    /// Terminal EBITDA x EBITDA multiple, discounted to the as-of date
    pub ebitda_npv: f64,

    /// Weighted combination of the two NPVs
    pub blended_value: f64,

    /// Discounting horizon used, kept for reporting
    pub years_to_terminal: f64,
}

/// Value one segment as of the timing's as-of date.
///
/// `blend_weight` is the EBITDA share of the blended value. Failures are
/// wrapped with the segment name so the caller can point at the offending
/// input.
pub fn value_segment(
    segment: &Segment,
    timing: &ValuationTiming,
    blend_weight: f64,
) -> Result<ValuationResult> {
    value_segment_inner(segment, timing, blend_weight)
        .map_err(|e| e.in_segment(&segment.name))
}

fn value_segment_inner(
    segment: &Segment,
    timing: &ValuationTiming,
    blend_weight: f64,
) -> Result<ValuationResult> {
    let terminal = segment.projections.terminal()?;
    let horizon = segment.projections.horizon_years()?;
    let years = timing.years_to_terminal(horizon, segment.adoption_lag_months);

    let revenue_npv = discount(
        implied_value(terminal.revenue, segment.revenue_multiple),
        segment.discount_rate,
        years,
    )?;
    let ebitda_npv = discount(
        implied_value(terminal.ebitda, segment.ebitda_multiple),
        segment.discount_rate,
        years,
    )?;
    let blended_value = blend(revenue_npv, ebitda_npv, blend_weight)?;

    log::debug!(
        "segment '{}': years_to_terminal={:.4}, revenue_npv={:.2}, ebitda_npv={:.2}, blended={:.2}",
        segment.name,
        years,
        revenue_npv,
        ebitda_npv,
        blended_value
    );

    Ok(ValuationResult {
        segment: segment.name.clone(),
        revenue_npv,
        ebitda_npv,
        blended_value,
        years_to_terminal: years,
    })
}
