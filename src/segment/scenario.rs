//! Scenario parameters and the canonical forecast template
//!
//! `ScenarioParams` is the full assumption set an interactive front end
//! would collect, with the standard pricing defaults baked in so a partial
//! JSON file (or none at all) yields the canonical scenario. The built-in
//! forecast template carries the 2025-2029 revenue/EBITDA projections for
//! the three modeled segments.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::data::{PeriodProjection, ProjectionSet, Segment};
use crate::error::Result;
use crate::returns::InvestmentTerms;
use crate::valuation::{ValuationTiming, DEFAULT_BLEND_WEIGHT};

/// Full assumption set for one valuation scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioParams {
    /// Regulatory approval date shared by all segments
    #[serde(default = "default_approval_date")]
    pub approval_date: NaiveDate,

    /// Valuation as-of date; `None` means the caller supplies one
    /// (typically "today", chosen once per computation)
    #[serde(default)]
    pub as_of_date: Option<NaiveDate>,

    /// Months from approval to domestic hospital revenue start (0-24 typical)
    #[serde(default)]
    pub domestic_lag_months: u32,

    /// Months from approval to international hospital revenue start
    #[serde(default = "default_twelve")]
    pub international_lag_months: u32,

    /// Months from approval to RPM market revenue start
    #[serde(default = "default_twelve")]
    pub rpm_lag_months: u32,

    /// Terminal revenue multiple, applied to every segment
    #[serde(default = "default_revenue_multiple")]
    pub revenue_multiple: f64,

    /// Terminal EBITDA multiple, applied to every segment
    #[serde(default = "default_ebitda_multiple")]
    pub ebitda_multiple: f64,

    #[serde(default = "default_rate_domestic")]
    pub discount_rate_domestic: f64,

    #[serde(default = "default_rate_international")]
    pub discount_rate_international: f64,

    #[serde(default = "default_rate_rpm")]
    pub discount_rate_rpm: f64,

    /// EBITDA share of the blended segment value
    #[serde(default = "default_blend_weight")]
    pub blend_weight: f64,

    /// New-money investment amount (default: $5M)
    #[serde(default = "default_investment")]
    pub investment: f64,

    /// Years from investment to exit (default: 5)
    #[serde(default = "default_holding_years")]
    pub holding_years: f64,
}

fn default_approval_date() -> NaiveDate {
    // Expected FDA approval per the base pricing deck
    NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
}
fn default_twelve() -> u32 { 12 }
fn default_revenue_multiple() -> f64 { 4.0 }
fn default_ebitda_multiple() -> f64 { 10.0 }
fn default_rate_domestic() -> f64 { 0.5 }
fn default_rate_international() -> f64 { 0.6 }
fn default_rate_rpm() -> f64 { 0.7 }
fn default_blend_weight() -> f64 { DEFAULT_BLEND_WEIGHT }
fn default_investment() -> f64 { 5_000_000.0 }
fn default_holding_years() -> f64 { 5.0 }

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            approval_date: default_approval_date(),
            as_of_date: None,
            domestic_lag_months: 0,
            international_lag_months: 12,
            rpm_lag_months: 12,
            revenue_multiple: 4.0,
            ebitda_multiple: 10.0,
            discount_rate_domestic: 0.5,
            discount_rate_international: 0.6,
            discount_rate_rpm: 0.7,
            blend_weight: DEFAULT_BLEND_WEIGHT,
            investment: 5_000_000.0,
            holding_years: 5.0,
        }
    }
}

impl ScenarioParams {
    /// Timing inputs for the engine; `fallback_as_of` is used when the
    /// scenario does not pin its own as-of date
    pub fn timing(&self, fallback_as_of: NaiveDate) -> ValuationTiming {
        ValuationTiming {
            approval_date: self.approval_date,
            as_of_date: self.as_of_date.unwrap_or(fallback_as_of),
        }
    }

    pub fn investment_terms(&self) -> InvestmentTerms {
        InvestmentTerms {
            investment: self.investment,
            holding_years: self.holding_years,
        }
    }

    /// Assemble segments from the built-in forecast template
    pub fn build_segments(&self) -> Result<Vec<Segment>> {
        self.build_segments_from(&canonical_forecast())
    }

    /// Assemble segments from an externally supplied forecast
    ///
    /// Per-segment assumptions (lag, rate) are matched by segment name;
    /// unrecognized names fall back to the domestic assumptions.
    pub fn build_segments_from(&self, forecast: &[SegmentForecast]) -> Result<Vec<Segment>> {
        forecast
            .iter()
            .map(|sf| {
                let (lag, rate) = self.assumptions_for(&sf.name);
                let projections = ProjectionSet::new(sf.periods.clone())
                    .map_err(|e| e.in_segment(&sf.name))?;
                Ok(Segment {
                    name: sf.name.clone(),
                    projections,
                    adoption_lag_months: lag,
                    discount_rate: rate,
                    revenue_multiple: self.revenue_multiple,
                    ebitda_multiple: self.ebitda_multiple,
                })
            })
            .collect()
    }

    fn assumptions_for(&self, name: &str) -> (u32, f64) {
        match name {
            "International" => (self.international_lag_months, self.discount_rate_international),
            "RPM" => (self.rpm_lag_months, self.discount_rate_rpm),
            _ => (self.domestic_lag_months, self.discount_rate_domestic),
        }
    }
}

/// A named forecast, not yet bound to valuation assumptions
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentForecast {
    pub name: String,
    pub periods: Vec<PeriodProjection>,
}

/// The base 2025-2029 forecast for the three modeled segments
pub fn canonical_forecast() -> Vec<SegmentForecast> {
    let rows = |data: &[(i32, f64, f64)]| {
        data.iter()
            .map(|&(period, revenue, ebitda)| PeriodProjection {
                period,
                revenue,
                ebitda,
            })
            .collect()
    };

    vec![
        SegmentForecast {
            name: "Domestic".to_string(),
            periods: rows(&[
                (2025, 0.0, -3_804_274.0),
                (2026, 5_248_050.0, 259_896.0),
                (2027, 20_719_845.0, 10_043_270.0),
                (2028, 46_512_630.0, 25_254_228.0),
                (2029, 94_295_745.0, 55_882_649.0),
            ]),
        },
        SegmentForecast {
            name: "International".to_string(),
            periods: rows(&[
                (2025, 0.0, -3_494_274.0),
                (2026, 0.0, -3_781_015.0),
                (2027, 14_680_170.0, 5_375_248.0),
                (2028, 64_305_788.0, 38_243_566.0),
                (2029, 140_999_280.0, 89_954_378.0),
            ]),
        },
        SegmentForecast {
            name: "RPM".to_string(),
            periods: rows(&[
                (2025, 0.0, -1_730_000.0),
                (2026, 0.0, -3_375_000.0),
                (2027, 689_227.0, -1_975_933.0),
                (2028, 14_785_271.0, 6_261_403.0),
                (2029, 37_897_007.0, 20_067_330.0),
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenario_segments() {
        let params = ScenarioParams::default();
        let segments = params.build_segments().unwrap();

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].name, "Domestic");
        assert_eq!(segments[0].adoption_lag_months, 0);
        assert_eq!(segments[0].discount_rate, 0.5);
        assert_eq!(segments[1].name, "International");
        assert_eq!(segments[1].adoption_lag_months, 12);
        assert_eq!(segments[1].discount_rate, 0.6);
        assert_eq!(segments[2].name, "RPM");
        assert_eq!(segments[2].discount_rate, 0.7);

        // All segments share the terminal multiples
        for segment in &segments {
            assert_eq!(segment.revenue_multiple, 4.0);
            assert_eq!(segment.ebitda_multiple, 10.0);
            assert_eq!(segment.projections.horizon_years().unwrap(), 4.0);
        }

        let terminal = segments[0].projections.terminal().unwrap();
        assert_eq!(terminal.revenue, 94_295_745.0);
        assert_eq!(terminal.ebitda, 55_882_649.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let params: ScenarioParams =
            serde_json::from_str(r#"{"revenue_multiple": 6.0, "domestic_lag_months": 6}"#)
                .unwrap();

        assert_eq!(params.revenue_multiple, 6.0);
        assert_eq!(params.domestic_lag_months, 6);
        // Everything else falls back to the standard pricing defaults
        assert_eq!(params.ebitda_multiple, 10.0);
        assert_eq!(params.international_lag_months, 12);
        assert_eq!(params.investment, 5_000_000.0);
        assert_eq!(
            params.approval_date,
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
        );
        assert!(params.as_of_date.is_none());
    }

    #[test]
    fn test_timing_fallback() {
        let params = ScenarioParams::default();
        let today = NaiveDate::from_ymd_opt(2026, 6, 30).unwrap();

        let timing = params.timing(today);
        assert_eq!(timing.as_of_date, today);

        let pinned = ScenarioParams {
            as_of_date: Some(params.approval_date),
            ..params
        };
        assert_eq!(pinned.timing(today).as_of_date, pinned.approval_date);
    }
}
