//! Valuation timing: approval date, as-of date, years to terminal value
//!
//! The as-of date is an explicit input. Nothing in the engine reads a wall
//! clock, so repeating a computation over the same inputs gives the same
//! answer regardless of when it runs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Average days per calendar year, including leap years
pub const DAYS_PER_YEAR: f64 = 365.25;

/// The two dates every time-dependent calculation hangs off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationTiming {
    /// Regulatory approval date shared across segments
    pub approval_date: NaiveDate,

    /// The model's "as-of" date; all discounting is to this date
    pub as_of_date: NaiveDate,
}

impl ValuationTiming {
    /// Years from the approval date to the as-of date
    ///
    /// Negative when approval lies in the future.
    pub fn elapsed_since_approval_years(&self) -> f64 {
        let days = self
            .as_of_date
            .signed_duration_since(self.approval_date)
            .num_days();
        days as f64 / DAYS_PER_YEAR
    }

    /// Discounting horizon for a segment's terminal value:
    /// forecast span + elapsed time since approval + adoption lag.
    ///
    /// An approval date far enough past the as-of date drives this
    /// negative, which inflates the nominal value under discounting.
    /// That is left to the caller to clamp if undesired; the engine
    /// never clamps silently.
    pub fn years_to_terminal(&self, horizon_years: f64, adoption_lag_months: u32) -> f64 {
        horizon_years + self.elapsed_since_approval_years() + adoption_lag_months as f64 / 12.0
    }
}
