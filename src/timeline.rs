//! "What if I sell at month X" comparison across several holding periods.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::input::InvestmentInput;
use crate::investment::aggregate;
use crate::schedule::{AmortizationResult, generate_schedule};
use crate::validation::validate_investment;
use crate::Money;

/// Investment outcome when reselling at `month`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineRow {
    /// Resale month.
    pub month: u32,
    /// Estimated profit when selling at `month`.
    pub profit: Money,
    /// Total ROI in percent.
    pub roi: Decimal,
    /// Loan balance still owed at `month`.
    pub remaining_debt: Money,
    /// Installments paid up to `month`.
    pub total_paid: Money,
}

/// Re-runs the scenario for each candidate resale month, everything else fixed.
///
/// Rows come back sorted by month, without duplicates or zero months.
///
/// # Arguments
///
/// * `input` - The investment scenario. Its own holding period is ignored.
/// * `candidate_months` - The resale months to compare.
/// * `config` - Engine settings (rate convention).
///
/// # Errors
///
/// Never fails. A scenario rejected by [`validate_investment`] (the same gate
/// as [`crate::analysis::analyze_investment`]) gives an empty table.
pub fn project_timeline(input: &InvestmentInput, candidate_months: &[u32], config: &EngineConfig) -> Vec<TimelineRow> {
    // Candidate months replace the holding period, so any positive one passes the gate.
    let Ok(params) = validate_investment(&input.with_holding_period(1), config) else {
        return Vec::new();
    };

    // The schedule does not depend on the holding period, only the aggregation does.
    match generate_schedule(params.financed_amount, params.monthly_rate, params.term_months, params.system) {
        Some(schedule) => timeline_from_schedule(input, &schedule, candidate_months),
        None => Vec::new(),
    }
}

/// Same as [`project_timeline`] for an already generated schedule.
///
/// Months whose totals overflow a `Decimal` are left out.
pub fn timeline_from_schedule(
    input: &InvestmentInput,
    schedule: &AmortizationResult,
    candidate_months: &[u32],
) -> Vec<TimelineRow> {
    let mut months: Vec<u32> = candidate_months.iter().copied().filter(|month| *month > 0).collect();
    months.sort_unstable();
    months.dedup();

    months
        .into_iter()
        .filter_map(|month| {
            let summary = aggregate(&input.with_holding_period(month), schedule)?;
            Some(TimelineRow {
                month,
                profit: summary.estimated_profit,
                roi: summary.total_roi,
                remaining_debt: summary.remaining_debt_at_resale,
                total_paid: summary.total_paid_until_resale,
            })
        })
        .collect()
}

/// Row for the user's selected holding period.
pub fn find_row(rows: &[TimelineRow], month: u32) -> Option<&TimelineRow> {
    rows.iter().find(|row| row.month == month)
}

/// Configured horizons that fit inside the term, plus the term itself.
pub fn default_horizons(term_months: u32, config: &EngineConfig) -> Vec<u32> {
    let mut horizons: Vec<u32> = config
        .timeline_horizons
        .iter()
        .copied()
        .filter(|months| *months > 0 && *months < term_months)
        .collect();
    horizons.push(term_months);
    horizons
}
