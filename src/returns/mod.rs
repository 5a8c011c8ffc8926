//! Investor-return metrics derived from the aggregate valuation
//!
//! The model reuses the pre-money total as the future exit value, i.e. it
//! assumes zero growth between entry and exit. That conflation is the
//! model's stated simplification and is preserved here as-is; IRR figures
//! should be read with that in mind.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValuationError};

/// Terms of the new-money investment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentTerms {
    /// Cash invested at entry
    pub investment: f64,

    /// Years from entry to the exit event
    pub holding_years: f64,
}

/// Derived, read-only return metrics
///
/// Recomputed whenever the portfolio valuation or the terms change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnMetrics {
    pub post_money: f64,

    /// Investor's ownership fraction at entry
    pub ownership: f64,

    /// Investor's pro-rata share of the exit value
    pub exit_proceeds: f64,

    /// Multiple on invested capital
    pub moic: f64,

    /// Annualized return implied by MOIC over the holding period
    pub irr: f64,
}

/// Compute investor returns for a new-money investment against a
/// pre-money valuation.
///
/// Preconditions, each an explicit failure rather than a NaN or sentinel:
/// post-money must be non-zero (`DivisionByZero`), the investment must be
/// non-zero (`DivisionByZero`), the holding period must be positive
/// (`InvalidHoldingPeriod`), and MOIC must be positive for the IRR root
/// to exist (`UndefinedIrr`).
pub fn compute_returns(pre_money: f64, terms: &InvestmentTerms) -> Result<ReturnMetrics> {
    let post_money = pre_money + terms.investment;
    if post_money == 0.0 {
        return Err(ValuationError::DivisionByZero {
            context: "post-money value is zero, ownership is undefined",
        });
    }
    let ownership = terms.investment / post_money;

    // Exit value is the same pre-money total used as the valuation base
    // (zero-growth simplification, see module docs)
    let exit_proceeds = pre_money * ownership;

    if terms.investment == 0.0 {
        return Err(ValuationError::DivisionByZero {
            context: "investment is zero, MOIC is undefined",
        });
    }
    let moic = exit_proceeds / terms.investment;

    if terms.holding_years <= 0.0 {
        return Err(ValuationError::InvalidHoldingPeriod {
            years: terms.holding_years,
        });
    }
    if moic <= 0.0 {
        return Err(ValuationError::UndefinedIrr { moic });
    }
    let irr = moic.powf(1.0 / terms.holding_years) - 1.0;

    log::debug!(
        "returns: post_money={:.2}, ownership={:.6}, exit={:.2}, moic={:.4}, irr={:.4}",
        post_money,
        ownership,
        exit_proceeds,
        moic,
        irr
    );

    Ok(ReturnMetrics {
        post_money,
        ownership,
        exit_proceeds,
        moic,
        irr,
    })
}
