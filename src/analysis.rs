//! Entry points: run the whole pipeline and hand back one immutable result.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::input::{InvestmentInput, SimulationInput};
use crate::investment::aggregate;
use crate::projection::{DebtPoint, PaymentPoint, debt_evolution, payment_breakdown};
use crate::schedule::{AmortizationResult, AmortizationSystem, generate_schedule};
use crate::timeline::{TimelineRow, default_horizons, timeline_from_schedule};
use crate::validation::{validate, validate_investment};
use crate::{Money, Rate};

/// Everything the presentation layer needs about an investment scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentResult {
    /// Sale proceeds left after the remaining debt and everything invested.
    pub estimated_profit: Money,
    /// Percent.
    pub total_roi: Decimal,
    /// Percent, geometric.
    pub monthly_roi: Decimal,
    pub total_investment: Money,
    pub total_paid_until_resale: Money,
    pub total_interest_paid: Money,
    pub remaining_debt_at_resale: Money,
    /// Default horizons plus the selected holding period, ascending.
    pub timeline_comparison: Vec<TimelineRow>,
    pub debt_evolution: Vec<DebtPoint>,
    pub payment_breakdown: Vec<PaymentPoint>,
    /// Full schedule of the selected system.
    pub amortization: AmortizationResult,
}

/// Price and SAC computed for the same financing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemComparison {
    /// Principal shared by both schedules.
    pub financed_amount: Money,
    /// Monthly rate shared by both schedules.
    pub monthly_rate: Rate,
    /// Price schedule.
    pub constant_installment: AmortizationResult,
    /// SAC schedule.
    pub constant_amortization: AmortizationResult,
    /// How much less interest SAC pays than Price.
    pub interest_savings: Money,
}

/// Repayment schedule for a financing scenario, or `None` if it cannot be computed.
///
/// # Arguments
///
/// * `input` - The financing scenario.
/// * `config` - Engine settings.
///
/// # Errors
///
/// Returns `None` when validation rejects the input or the schedule overflows.
/// The rejection reason is logged at debug level.
pub fn simulate(input: &SimulationInput, config: &EngineConfig) -> Option<AmortizationResult> {
    let params = validate(input, config)
        .inspect_err(|err| log::debug!("Simulation declined: {}", err))
        .ok()?;

    generate_schedule(params.financed_amount, params.monthly_rate, params.term_months, params.system)
}

/// Full investment analysis for the selected holding period, with the
/// timeline over the configured horizons and the selected one.
pub fn analyze_investment(input: &InvestmentInput, config: &EngineConfig) -> Option<InvestmentResult> {
    let params = validate_investment(input, config)
        .inspect_err(|err| log::debug!("Investment analysis declined: {}", err))
        .ok()?;

    let schedule = generate_schedule(params.financed_amount, params.monthly_rate, params.term_months, params.system)?;
    let summary = aggregate(input, &schedule)?;

    let mut horizons = default_horizons(params.term_months, config);
    horizons.push(input.holding_period_months);
    let timeline_comparison = timeline_from_schedule(input, &schedule, &horizons);

    Some(InvestmentResult {
        estimated_profit: summary.estimated_profit,
        total_roi: summary.total_roi,
        monthly_roi: summary.monthly_roi,
        total_investment: summary.total_investment,
        total_paid_until_resale: summary.total_paid_until_resale,
        total_interest_paid: summary.total_interest_paid,
        remaining_debt_at_resale: summary.remaining_debt_at_resale,
        timeline_comparison,
        debt_evolution: debt_evolution(&schedule),
        payment_breakdown: payment_breakdown(&schedule),
        amortization: schedule,
    })
}

/// Computes both amortization systems for the same scenario. The selected
/// system in `input` is ignored.
pub fn compare_systems(input: &SimulationInput, config: &EngineConfig) -> Option<SystemComparison> {
    let params = validate(input, config).ok()?;

    let constant_installment = generate_schedule(
        params.financed_amount,
        params.monthly_rate,
        params.term_months,
        AmortizationSystem::ConstantInstallment,
    )?;
    let constant_amortization = generate_schedule(
        params.financed_amount,
        params.monthly_rate,
        params.term_months,
        AmortizationSystem::ConstantAmortization,
    )?;

    Some(SystemComparison {
        financed_amount: params.financed_amount,
        monthly_rate: params.monthly_rate,
        interest_savings: constant_installment
            .total_interest
            .checked_sub(constant_amortization.total_interest)?,
        constant_installment,
        constant_amortization,
    })
}
