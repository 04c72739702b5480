//! Normalized numeric inputs accepted by the engine.
//!
//! Everything here is already parsed: money is a [`Decimal`](rust_decimal::Decimal), rates are
//! fractions and months are integers. Text handling lives in [`crate::money`].

use serde::{Deserialize, Serialize};

use crate::schedule::AmortizationSystem;
use crate::{Money, Rate};

/// Financing scenario for a single property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationInput {
    /// Purchase price of the property.
    pub property_value: Money,
    /// Amount paid upfront, not financed.
    pub down_payment: Money,
    /// Annual interest rate as a fraction (e.g. 0.12 for 12%).
    pub annual_interest_rate: Rate,
    /// Loan term in months.
    pub term_months: u32,
    pub amortization_system: AmortizationSystem,
}

impl SimulationInput {
    /// Principal borrowed: purchase price minus down payment.
    pub fn financed_amount(&self) -> Money {
        self.property_value - self.down_payment
    }
}

/// One-time costs paid at purchase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AcquisitionCosts {
    /// Transfer tax (ITBI).
    pub itbi: Money,
    /// Registry and notary fees.
    pub documentation: Money,
    /// Brokerage commission.
    pub brokerage: Money,
    /// Renovation budget.
    pub renovation: Money,
}

impl AcquisitionCosts {
    /// Sum of the four costs, or `None` if it does not fit in a `Decimal`.
    pub fn total(&self) -> Option<Money> {
        [self.itbi, self.documentation, self.brokerage, self.renovation]
            .into_iter()
            .try_fold(Money::ZERO, |total, cost| total.checked_add(cost))
    }
}

/// Financing scenario plus what it costs to hold and resell the property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentInput {
    #[serde(flatten)]
    pub simulation: SimulationInput,
    /// Expected resale price.
    pub market_value: Money,
    #[serde(default)]
    pub costs: AcquisitionCosts,
    /// Recurring holding cost (condo fees, IPTU, maintenance).
    #[serde(default)]
    pub monthly_expenses: Money,
    /// Months held before resale. May be shorter than the loan term.
    pub holding_period_months: u32,
}

impl InvestmentInput {
    /// Same scenario, resold at a different month.
    pub fn with_holding_period(&self, months: u32) -> Self {
        Self {
            holding_period_months: months,
            ..self.clone()
        }
    }
}
