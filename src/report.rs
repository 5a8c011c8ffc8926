//! Rendering helpers for the CLI collaborator
//!
//! The engine reports failures; what to print for an undefined metric is
//! decided here, not inside the engine.

use crate::returns::ReturnMetrics;
use crate::valuation::PortfolioValuation;

/// Format a dollar amount with thousands separators, no cents
///
/// `format_money(4743468.6)` -> `"$4,743,469"`
pub fn format_money(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${amount}");
    }
    let rounded = amount.abs().round() as u64;
    // -0.4 rounds to zero dollars; don't print "-$0"
    let negative = amount < 0.0 && rounded > 0;
    let digits = rounded.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Format a fraction as a percentage with the given decimal places
pub fn format_pct(fraction: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, fraction * 100.0)
}

/// Render the per-segment valuation table
pub fn valuation_table(portfolio: &PortfolioValuation) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<15} {:>10} {:>18} {:>18} {:>18}\n",
        "Segment", "Years", "Revenue NPV", "EBITDA NPV", "Blended Value"
    ));
    for row in &portfolio.segments {
        out.push_str(&format!(
            "{:<15} {:>10.2} {:>18} {:>18} {:>18}\n",
            row.segment,
            row.years_to_terminal,
            format_money(row.revenue_npv),
            format_money(row.ebitda_npv),
            format_money(row.blended_value),
        ));
    }
    out.push_str(&format!(
        "{:<15} {:>10} {:>18} {:>18} {:>18}\n",
        "Pre-Money Total",
        "",
        "",
        "",
        format_money(portfolio.pre_money_value),
    ));
    out
}

/// Render the investor-return headline block
///
/// `metrics` is the engine's output when its preconditions held; `None`
/// renders an explicit "undefined" indicator instead of a crash or a
/// silent substitution.
pub fn returns_summary(
    pre_money: f64,
    investment: f64,
    metrics: Option<&ReturnMetrics>,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Investor Return ({} Entry)\n",
        format_money(investment)
    ));
    out.push_str(&format!("  Pre-Money Valuation: {}\n", format_money(pre_money)));
    match metrics {
        Some(m) => {
            out.push_str(&format!("  Post-Money Valuation: {}\n", format_money(m.post_money)));
            out.push_str(&format!("  Ownership %: {}\n", format_pct(m.ownership, 2)));
            out.push_str(&format!("  Exit Proceeds: {}\n", format_money(m.exit_proceeds)));
            out.push_str(&format!("  MOIC: {:.2}x\n", m.moic));
            out.push_str(&format!("  IRR: {}\n", format_pct(m.irr, 1)));
        }
        None => {
            out.push_str("  Return metrics: undefined for these inputs\n");
        }
    }
    out
}
