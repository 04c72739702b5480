//! Conversion of annual interest rates into the monthly rate used by the schedules.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::Rate;

/// How an annual rate is turned into a monthly one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RateConvention {
    /// Nominal rate: the annual rate is split evenly over 12 months (12% a.a. = 1% a.m.).
    #[default]
    Nominal,
    /// Effective rate: the monthly rate that compounds to the annual one,
    /// `(1 + annual)^(1/12) - 1`.
    Effective,
}

/// Converts a percentage (e.g. 10.5 for 10.5%) into a fraction (0.105).
pub fn percent_to_fraction(percent: Decimal) -> Rate {
    percent / dec!(100)
}

/// Converts an annual rate fraction into a monthly rate fraction.
///
/// Returns `None` for negative rates.
pub fn monthly_rate(annual_rate: Rate, convention: RateConvention) -> Option<Rate> {
    if annual_rate < Decimal::ZERO {
        return None;
    }
    if annual_rate.is_zero() {
        return Some(Decimal::ZERO);
    }

    match convention {
        RateConvention::Nominal => Some(annual_rate / dec!(12)),
        RateConvention::Effective => effective_monthly_rate(annual_rate),
    }
}

/// Monthly rate equivalent to the annual one under monthly compounding.
fn effective_monthly_rate(annual_rate: Rate) -> Option<Rate> {
    let one = dec!(1);
    let exponent = one / dec!(12);

    one.checked_add(annual_rate)?
        .checked_powd(exponent)
        .map(|power_result| power_result - one)
}
