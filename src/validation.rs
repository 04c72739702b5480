//! Gatekeeping for raw numeric parameters before anything is computed.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::EngineConfig;
use crate::input::{InvestmentInput, SimulationInput};
use crate::rates;
use crate::schedule::AmortizationSystem;
use crate::{Money, Rate};

/// Longest loan term accepted, in months (50 years).
pub const MAX_TERM_MONTHS: u32 = 600;

/// Highest annual interest rate accepted, as a fraction (1000% a year).
pub const MAX_ANNUAL_RATE: Rate = dec!(10);

/// Largest money amount accepted for any single input.
pub const MAX_AMOUNT: Money = dec!(1_000_000_000_000_000);

/// Why a scenario cannot be computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Property value must be greater than zero (got {0})")]
    NonPositivePropertyValue(Decimal),

    #[error("Down payment cannot be negative (got {0})")]
    NegativeDownPayment(Decimal),

    #[error("Down payment ({down_payment}) must be lower than the property value ({property_value})")]
    NothingToFinance { property_value: Decimal, down_payment: Decimal },

    #[error("Interest rate cannot be negative (got {0})")]
    NegativeRate(Decimal),

    #[error("Interest rate {0} is above the maximum of {max}", max = MAX_ANNUAL_RATE)]
    RateOutOfRange(Decimal),

    #[error("{field} of {value} is above the maximum of {max}", max = MAX_AMOUNT)]
    AmountOutOfRange { field: &'static str, value: Decimal },

    #[error("Total months cannot be zero.")]
    ZeroTerm,

    #[error("Term of {0} months exceeds the maximum of {max}", max = MAX_TERM_MONTHS)]
    TermTooLong(u32),

    #[error("{field} cannot be negative (got {value})")]
    NegativeAmount { field: &'static str, value: Decimal },

    #[error("Holding period cannot be zero.")]
    ZeroHoldingPeriod,
}

/// Parameters that passed validation, ready for the schedule generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedParams {
    pub financed_amount: Money,
    pub monthly_rate: Rate,
    pub term_months: u32,
    pub system: AmortizationSystem,
}

/// Checks a financing scenario and derives the financed amount and monthly rate.
///
/// # Arguments
///
/// * `input` - The financing scenario as entered.
/// * `config` - Engine settings; its rate convention turns the annual rate into a monthly one.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found. Amounts above [`MAX_AMOUNT`]
/// and rates above [`MAX_ANNUAL_RATE`] are rejected so the schedule always
/// fits in a [`Decimal`].
pub fn validate(input: &SimulationInput, config: &EngineConfig) -> Result<ValidatedParams, ValidationError> {
    if input.property_value <= Decimal::ZERO {
        return Err(ValidationError::NonPositivePropertyValue(input.property_value));
    }
    if input.property_value > MAX_AMOUNT {
        return Err(ValidationError::AmountOutOfRange {
            field: "Property value",
            value: input.property_value,
        });
    }
    if input.down_payment < Decimal::ZERO {
        return Err(ValidationError::NegativeDownPayment(input.down_payment));
    }
    if input.down_payment >= input.property_value {
        return Err(ValidationError::NothingToFinance {
            property_value: input.property_value,
            down_payment: input.down_payment,
        });
    }
    if input.term_months == 0 {
        return Err(ValidationError::ZeroTerm);
    }
    if input.term_months > MAX_TERM_MONTHS {
        return Err(ValidationError::TermTooLong(input.term_months));
    }

    if input.annual_interest_rate < Decimal::ZERO {
        return Err(ValidationError::NegativeRate(input.annual_interest_rate));
    }
    if input.annual_interest_rate > MAX_ANNUAL_RATE {
        return Err(ValidationError::RateOutOfRange(input.annual_interest_rate));
    }

    let monthly_rate = rates::monthly_rate(input.annual_interest_rate, config.rate_convention)
        .ok_or(ValidationError::RateOutOfRange(input.annual_interest_rate))?;

    Ok(ValidatedParams {
        financed_amount: input.financed_amount(),
        monthly_rate,
        term_months: input.term_months,
        system: input.amortization_system,
    })
}

/// Checks an investment scenario: the financing part plus costs and horizon.
pub fn validate_investment(input: &InvestmentInput, config: &EngineConfig) -> Result<ValidatedParams, ValidationError> {
    let params = validate(&input.simulation, config)?;

    let amounts = [
        ("Market value", input.market_value),
        ("ITBI", input.costs.itbi),
        ("Documentation", input.costs.documentation),
        ("Brokerage", input.costs.brokerage),
        ("Renovation", input.costs.renovation),
        ("Monthly expenses", input.monthly_expenses),
    ];
    if let Some((field, value)) = amounts.into_iter().find(|(_, value)| *value < Decimal::ZERO) {
        return Err(ValidationError::NegativeAmount { field, value });
    }
    if let Some((field, value)) = amounts.into_iter().find(|(_, value)| *value > MAX_AMOUNT) {
        return Err(ValidationError::AmountOutOfRange { field, value });
    }
    if input.holding_period_months == 0 {
        return Err(ValidationError::ZeroHoldingPeriod);
    }

    Ok(params)
}

/// `true` when the scenario can be computed; for gating a "compute" action.
pub fn is_computable(input: &SimulationInput, config: &EngineConfig) -> bool {
    validate(input, config).is_ok()
}
