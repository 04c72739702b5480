//! Month-by-month series derived from a schedule, for charts and reports.

use serde::{Deserialize, Serialize};

use crate::schedule::AmortizationResult;
use crate::Money;

/// Outstanding debt and cumulative payments after a month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtPoint {
    /// Month number, starting at 1.
    pub month: u32,
    /// Balance still owed after this month's installment.
    pub debt: Money,
    /// Sum of installments from month 1 to `month`.
    pub paid: Money,
}

/// Composition of a month's installment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPoint {
    pub month: u32,
    pub amortization: Money,
    pub interest: Money,
    pub installment: Money,
}

/// Outstanding balance and cumulative amount paid, one point per month.
///
/// # Arguments
///
/// * `result` - The schedule to reshape.
///
/// The series stops early if the cumulative sum no longer fits in a
/// [`Money`] value, which a schedule from [`generate_schedule`] never causes.
///
/// [`generate_schedule`]: crate::schedule::generate_schedule
pub fn debt_evolution(result: &AmortizationResult) -> Vec<DebtPoint> {
    result
        .schedule
        .iter()
        .scan(Money::ZERO, |paid, row| {
            *paid = paid.checked_add(row.installment)?;
            Some(DebtPoint {
                month: row.month,
                debt: row.balance,
                paid: *paid,
            })
        })
        .collect()
}

/// Amortization and interest shares of each installment, for stacked charts.
///
/// # Arguments
///
/// * `result` - The schedule to reshape.
pub fn payment_breakdown(result: &AmortizationResult) -> Vec<PaymentPoint> {
    result
        .schedule
        .iter()
        .map(|row| PaymentPoint {
            month: row.month,
            amortization: row.amortization,
            interest: row.interest,
            installment: row.installment,
        })
        .collect()
}
