//! Single-scenario investment result: what the property costs until it is sold
//! and what is left after paying off the remaining debt.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::input::InvestmentInput;
use crate::schedule::AmortizationResult;
use crate::Money;

/// Investment figures for one holding period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentSummary {
    /// Months held before resale.
    pub holding_period_months: u32,
    /// Resale price minus remaining debt minus everything invested.
    pub estimated_profit: Money,
    /// Profit over total investment, in percent.
    pub total_roi: Decimal,
    /// Monthly rate that compounds to `total_roi` over the holding period, in percent.
    pub monthly_roi: Decimal,
    /// Down payment, acquisition costs, holding costs and installments paid.
    pub total_investment: Money,
    /// Installments paid from month 1 to the resale month.
    pub total_paid_until_resale: Money,
    /// Interest share of those installments.
    pub total_interest_paid: Money,
    /// Loan balance owed out of the sale proceeds.
    pub remaining_debt_at_resale: Money,
}

/// Combines a schedule with acquisition and holding costs for
/// `input.holding_period_months`.
///
/// Only installments up to the resale month count as paid. A holding period
/// past the end of the term is treated as a fully paid loan.
///
/// # Arguments
///
/// * `input` - The investment scenario, including the resale month.
/// * `schedule` - The repayment schedule of the scenario's financing.
///
/// # Errors
///
/// Returns `None` when a total does not fit in a [`Decimal`].
pub fn aggregate(input: &InvestmentInput, schedule: &AmortizationResult) -> Option<InvestmentSummary> {
    let holding = input.holding_period_months;
    let paid_rows = || schedule.schedule.iter().take(holding as usize);

    let total_paid_until_resale = paid_rows().try_fold(Money::ZERO, |total, row| total.checked_add(row.installment))?;
    let total_interest_paid = paid_rows().try_fold(Money::ZERO, |total, row| total.checked_add(row.interest))?;
    let remaining_debt_at_resale = if holding >= schedule.term_months() {
        Decimal::ZERO
    } else {
        schedule.balance_after(holding)
    };

    let holding_costs = input.monthly_expenses.checked_mul(Decimal::from(holding))?;
    let total_investment = input
        .simulation
        .down_payment
        .checked_add(input.costs.total()?)?
        .checked_add(holding_costs)?
        .checked_add(total_paid_until_resale)?;

    let estimated_profit = input
        .market_value
        .checked_sub(remaining_debt_at_resale)?
        .checked_sub(total_investment)?;
    let total_roi = if total_investment.is_zero() {
        Decimal::ZERO
    } else {
        estimated_profit.checked_div(total_investment)?.checked_mul(dec!(100))?
    };

    Some(InvestmentSummary {
        holding_period_months: holding,
        estimated_profit,
        total_roi,
        monthly_roi: monthly_roi(total_roi, holding),
        total_investment,
        total_paid_until_resale,
        total_interest_paid,
        remaining_debt_at_resale,
    })
}

/// De-compounds a total ROI (in percent) into the equivalent monthly ROI:
/// `((1 + total/100)^(1/months) - 1) * 100`.
///
/// A loss of the whole investment or more has no real root and maps to -100%.
pub fn monthly_roi(total_roi: Decimal, months: u32) -> Decimal {
    match months {
        0 => return Decimal::ZERO,
        1 => return total_roi,
        _ => {}
    }

    let growth = dec!(1) + total_roi / dec!(100);
    if growth <= Decimal::ZERO {
        return dec!(-100);
    }
    if growth == dec!(1) {
        return Decimal::ZERO;
    }

    let exponent = dec!(1) / Decimal::from(months);
    match growth.checked_powd(exponent) {
        Some(monthly_growth) => (monthly_growth - dec!(1)) * dec!(100),
        None => {
            log::warn!("Could not de-compound ROI {}% over {} months", total_roi, months);
            Decimal::ZERO
        }
    }
}
