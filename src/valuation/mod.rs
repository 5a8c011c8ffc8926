//! Valuation engine: discounting, multiples, blending, aggregation

mod aggregate;
mod blend;
mod discount;
mod engine;
mod multiple;
mod timing;

pub use aggregate::{aggregate, value_portfolio, PortfolioValuation};
pub use blend::blend;
pub use discount::discount;
pub use engine::{value_segment, ValuationResult};
pub use multiple::implied_value;
pub use timing::{ValuationTiming, DAYS_PER_YEAR};

/// Default EBITDA share of the blended segment value (simple average)
pub const DEFAULT_BLEND_WEIGHT: f64 = 0.5;
