//! Sum-of-the-parts enterprise valuation engine
//!
//! Values a company built from independent, approval-gated revenue segments
//! (e.g. Domestic, International, RPM). Each segment carries a multi-year
//! revenue/EBITDA forecast, an adoption lag behind the shared approval
//! event, a discount rate, and a pair of market multiples. The engine
//! discounts each segment's terminal revenue-multiple and EBITDA-multiple
//! values to the as-of date, blends them into one segment value, sums
//! segments into a pre-money valuation, and derives investor-return
//! metrics (ownership, MOIC, IRR) for a new-money investment.
//!
//! Every computation is a pure function of its explicit arguments: the
//! as-of date is injected rather than read from a wall clock, so repeated
//! runs over the same inputs are bit-identical.

pub mod error;
pub mod report;
pub mod returns;
pub mod segment;
pub mod valuation;

pub use error::{Result, ValuationError};
pub use returns::{compute_returns, InvestmentTerms, ReturnMetrics};
pub use segment::{PeriodProjection, ProjectionSet, ScenarioParams, Segment};
pub use valuation::{
    aggregate, blend, discount, implied_value, value_portfolio, value_segment,
    PortfolioValuation, ValuationResult, ValuationTiming, DEFAULT_BLEND_WEIGHT,
};
