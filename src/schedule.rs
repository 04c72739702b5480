//! Repayment schedules for the two Brazilian amortization systems.
//!
//! - **Price (Sistema Francês de Amortização)**: constant installment. The
//!   interest share falls and the amortization share grows month by month.
//! - **SAC (Sistema de Amortização Constante)**: constant amortization. The
//!   installment falls linearly with the balance.
//!
//! All accumulation happens on full-precision [`Decimal`] values; nothing is
//! rounded here.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::{Money, Rate};

/// Amortization system selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AmortizationSystem {
    /// Price table: same installment every month.
    ConstantInstallment,
    /// SAC: same amortization every month.
    ConstantAmortization,
}

impl AmortizationSystem {
    /// Returns the schedule builder implementing this system.
    ///
    /// Both builders are stateless, so a `'static` reference is handed out
    /// instead of a boxed value.
    pub fn strategy(&self) -> &'static dyn ScheduleStrategy {
        match self {
            AmortizationSystem::ConstantInstallment => &ConstantInstallment,
            AmortizationSystem::ConstantAmortization => &ConstantAmortization,
        }
    }
}

/// Payment details for a single month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRow {
    /// 1-based month number.
    pub month: u32,
    /// Total paid this month (amortization + interest).
    pub installment: Money,
    /// Portion of the payment that reduces the principal.
    pub amortization: Money,
    /// Portion of the payment that covers interest.
    pub interest: Money,
    /// Remaining balance after the payment.
    pub balance: Money,
}

/// A full repayment schedule with its totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationResult {
    /// The amortization system the schedule was built with.
    pub system: AmortizationSystem,
    /// The principal borrowed (property value minus down payment).
    pub financed_amount: Money,
    /// The effective monthly interest rate as a decimal (not percentage).
    pub monthly_rate: Rate,
    /// The total amount paid over the lifetime of the loan (sum of every installment).
    pub total_amount: Money,
    /// Interest paid over the lifetime of the loan: `total_amount - financed_amount`.
    pub total_interest: Money,
    /// The amount of the first payment. The highest one for SAC.
    pub first_installment: Money,
    /// The amount of the last payment. The lowest one for SAC.
    pub last_installment: Money,
    /// Constant amortization for SAC; first month's amortization for Price.
    pub monthly_amortization: Money,
    /// A vector containing the payment details for each month.
    pub schedule: Vec<ScheduleRow>,
}

impl AmortizationResult {
    /// Number of monthly payments in the schedule.
    pub fn term_months(&self) -> u32 {
        self.schedule.len() as u32
    }

    /// Row for a 1-based month, if it is inside the term.
    pub fn row(&self, month: u32) -> Option<&ScheduleRow> {
        if month == 0 {
            return None;
        }
        self.schedule.get(month as usize - 1)
    }

    /// Outstanding balance after `month` payments. Zero once the term is over.
    pub fn balance_after(&self, month: u32) -> Money {
        if month == 0 {
            return self.financed_amount;
        }
        self.row(month)
            .map(|row| row.balance)
            .unwrap_or(Decimal::ZERO)
    }
}

/// Builds the month-by-month rows of one amortization system.
///
/// Implementations may assume `principal > 0`, `monthly_rate >= 0` and
/// `months > 0`; [`generate_schedule`] checks those before dispatching.
/// `None` means the numbers do not fit in a [`Decimal`].
pub trait ScheduleStrategy: Send + Sync {
    fn compute_schedule(&self, principal: Money, monthly_rate: Rate, months: u32) -> Option<Vec<ScheduleRow>>;
}

/// Price table (fixed installment).
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantInstallment;

impl ConstantInstallment {
    /// PMT = P * [i(1 + i)^n] / [(1 + i)^n - 1], or P / n when i = 0.
    pub fn installment(principal: Money, monthly_rate: Rate, months: u32) -> Option<Money> {
        if months == 0 {
            return None;
        }
        if monthly_rate.is_zero() {
            return Some(principal / Decimal::from(months));
        }

        let i_plus_1_pow_n = dec!(1).checked_add(monthly_rate)?.checked_powu(months.into())?;
        let numerator = principal
            .checked_mul(monthly_rate)?
            .checked_mul(i_plus_1_pow_n)?;

        numerator.checked_div(i_plus_1_pow_n - dec!(1))
    }
}

impl ScheduleStrategy for ConstantInstallment {
    fn compute_schedule(&self, principal: Money, monthly_rate: Rate, months: u32) -> Option<Vec<ScheduleRow>> {
        let fixed_payment = Self::installment(principal, monthly_rate, months)?;

        let mut current_balance = principal;
        let mut rows = Vec::with_capacity(months as usize);

        for month in 1..=months {
            let interest_payment = current_balance.checked_mul(monthly_rate)?;
            // The last payment settles whatever is left, so the residual of the
            // closed-form installment never shows up as a stray balance.
            let (installment, amortization) = if month == months {
                (current_balance.checked_add(interest_payment)?, current_balance)
            } else {
                (fixed_payment, fixed_payment.checked_sub(interest_payment)?)
            };
            current_balance = current_balance.checked_sub(amortization)?;

            rows.push(ScheduleRow {
                month,
                installment,
                amortization,
                interest: interest_payment,
                balance: current_balance.max(Decimal::ZERO),
            });
        }

        Some(rows)
    }
}

/// SAC table (fixed amortization).
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantAmortization;

impl ScheduleStrategy for ConstantAmortization {
    fn compute_schedule(&self, principal: Money, monthly_rate: Rate, months: u32) -> Option<Vec<ScheduleRow>> {
        let fixed_amortization = principal.checked_div(Decimal::from(months))?;

        let mut current_balance = principal;
        let mut rows = Vec::with_capacity(months as usize);

        for month in 1..=months {
            let interest_payment = current_balance.checked_mul(monthly_rate)?;
            let amortization = if month == months {
                current_balance
            } else {
                fixed_amortization
            };
            current_balance = current_balance.checked_sub(amortization)?;

            rows.push(ScheduleRow {
                month,
                installment: amortization.checked_add(interest_payment)?,
                amortization,
                interest: interest_payment,
                balance: current_balance.max(Decimal::ZERO),
            });
        }

        Some(rows)
    }
}

/// Computes the repayment schedule of `financed_amount` over `term_months`.
///
/// # Arguments
///
/// * `financed_amount` - The principal loan amount.
/// * `monthly_rate` - The effective monthly interest rate as a decimal (not percentage).
/// * `term_months` - The total number of payments.
/// * `system` - Which amortization system builds the rows.
///
/// # Errors
///
/// Never fails. Returns `None` when the inputs cannot describe a loan
/// (non-positive principal, zero term, negative rate) or when any
/// intermediate value overflows a [`Decimal`]. Callers gate the computation
/// with [`crate::validation`].
pub fn generate_schedule(
    financed_amount: Money,
    monthly_rate: Rate,
    term_months: u32,
    system: AmortizationSystem,
) -> Option<AmortizationResult> {
    if financed_amount <= Decimal::ZERO || term_months == 0 || monthly_rate < Decimal::ZERO {
        log::debug!(
            "Declining schedule: financed={}, rate={}, months={}",
            financed_amount,
            monthly_rate,
            term_months
        );
        return None;
    }

    let Some(schedule) = system
        .strategy()
        .compute_schedule(financed_amount, monthly_rate, term_months)
    else {
        log::debug!("Schedule overflowed for {:?}: rate={}, months={}", system, monthly_rate, term_months);
        return None;
    };

    let Some(total_amount) = schedule
        .iter()
        .try_fold(Decimal::ZERO, |total, row| total.checked_add(row.installment))
    else {
        log::debug!("Total paid overflowed for {:?}: rate={}, months={}", system, monthly_rate, term_months);
        return None;
    };
    let first = schedule.first()?;
    let last = schedule.last()?;

    Some(AmortizationResult {
        system,
        financed_amount,
        monthly_rate,
        total_amount,
        total_interest: total_amount.checked_sub(financed_amount)?,
        first_installment: first.installment,
        last_installment: last.installment,
        monthly_amortization: first.amortization,
        schedule,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn within(actual: Decimal, expected: Decimal, tolerance: Decimal) -> bool {
        (actual - expected).abs() <= tolerance
    }

    #[test]
    fn test_sac_concrete_case() {
        let result = generate_schedule(dec!(200000), dec!(0.01), 12, AmortizationSystem::ConstantAmortization).unwrap();

        assert_eq!(result.monthly_amortization.round_dp(2), dec!(16666.67));
        assert_eq!(result.first_installment.round_dp(2), dec!(18666.67));
        assert_eq!(result.last_installment.round_dp(2), dec!(16833.33));
        assert_eq!(result.schedule.len(), 12);
    }

    #[test]
    fn test_price_concrete_case() {
        let result = generate_schedule(dec!(200000), dec!(0.01), 12, AmortizationSystem::ConstantInstallment).unwrap();

        assert_eq!(result.first_installment.round_dp(2), dec!(17769.76));
        for row in &result.schedule {
            assert!(within(row.installment, result.first_installment, dec!(0.01)));
        }
    }

    #[test]
    fn test_small_loan_totals() {
        // 12000 at 1% a month over 12 months.
        let sac = generate_schedule(dec!(12000), dec!(0.01), 12, AmortizationSystem::ConstantAmortization).unwrap();
        assert_eq!(sac.monthly_amortization.round_dp(2), dec!(1000.00));
        assert_eq!(sac.first_installment.round_dp(2), dec!(1120.00));
        assert_eq!(sac.last_installment.round_dp(2), dec!(1010.00));
        assert_eq!(sac.total_amount.round_dp(2), dec!(12780.00));

        let price = generate_schedule(dec!(12000), dec!(0.01), 12, AmortizationSystem::ConstantInstallment).unwrap();
        assert_eq!(price.first_installment.round_dp(2), dec!(1066.19));
        assert_eq!(price.total_amount.round_dp(2), dec!(12794.23));
    }

    #[test]
    fn test_zero_rate_price_splits_principal_evenly() {
        let result = generate_schedule(dec!(1200), dec!(0), 12, AmortizationSystem::ConstantInstallment).unwrap();

        for row in &result.schedule {
            assert_eq!(row.installment, dec!(100));
            assert_eq!(row.interest, dec!(0));
        }
        assert_eq!(result.total_interest, dec!(0));
        assert_eq!(result.schedule.last().unwrap().balance, dec!(0));
    }

    #[rstest]
    #[case(dec!(0), dec!(0.01), 12)]
    #[case(dec!(-1000), dec!(0.01), 12)]
    #[case(dec!(1000), dec!(0.01), 0)]
    #[case(dec!(1000), dec!(-0.01), 12)]
    fn test_invalid_inputs_yield_no_result(#[case] principal: Decimal, #[case] rate: Decimal, #[case] months: u32) {
        for system in [AmortizationSystem::ConstantInstallment, AmortizationSystem::ConstantAmortization] {
            assert!(generate_schedule(principal, rate, months, system).is_none());
        }
    }

    #[test]
    fn test_overflowing_rate_is_declined() {
        let result = generate_schedule(dec!(100000), dec!(5), 600, AmortizationSystem::ConstantInstallment);
        assert!(result.is_none());
    }

    #[rstest]
    #[case(AmortizationSystem::ConstantAmortization)]
    #[case(AmortizationSystem::ConstantInstallment)]
    fn test_overflowing_totals_are_declined(#[case] system: AmortizationSystem) {
        // Each month's interest (1e27) fits in a Decimal, their sum does not.
        let result = generate_schedule(dec!(1_000_000_000_000_000_000), dec!(1_000_000_000), 600, system);
        assert!(result.is_none());
    }

    #[test]
    fn test_overflowing_interest_is_declined() {
        let result = generate_schedule(dec!(1_000_000_000_000_000_000), dec!(1_000_000_000_000), 12, AmortizationSystem::ConstantAmortization);
        assert!(result.is_none());
    }

    #[rstest]
    #[case(AmortizationSystem::ConstantInstallment)]
    #[case(AmortizationSystem::ConstantAmortization)]
    fn test_total_interest_is_total_minus_financed(#[case] system: AmortizationSystem) {
        let result = generate_schedule(dec!(350000), dec!(0.0085), 420, system).unwrap();
        let interest: Decimal = result.schedule.iter().map(|row| row.interest).sum();

        assert_eq!(result.total_interest, result.total_amount - result.financed_amount);
        assert!(within(interest, result.total_interest, dec!(0.01)));
    }

    #[test]
    fn test_sac_installment_strictly_decreases() {
        let result = generate_schedule(dec!(360000), dec!(0.008), 420, AmortizationSystem::ConstantAmortization).unwrap();

        for pair in result.schedule.windows(2) {
            assert!(pair[1].installment < pair[0].installment);
        }
    }

    #[test]
    fn test_price_interest_falls_and_amortization_grows() {
        let result = generate_schedule(dec!(360000), dec!(0.008), 420, AmortizationSystem::ConstantInstallment).unwrap();

        for pair in result.schedule.windows(2) {
            assert!(pair[1].interest < pair[0].interest);
            assert!(pair[1].amortization > pair[0].amortization);
        }
    }

    #[test]
    fn test_balance_after_handles_bounds() {
        let result = generate_schedule(dec!(1200), dec!(0.01), 12, AmortizationSystem::ConstantAmortization).unwrap();

        assert_eq!(result.balance_after(0), dec!(1200));
        assert_eq!(result.balance_after(6), dec!(600));
        assert_eq!(result.balance_after(12), dec!(0));
        assert_eq!(result.balance_after(48), dec!(0));
    }

    fn any_system() -> impl Strategy<Value = AmortizationSystem> {
        prop_oneof![
            Just(AmortizationSystem::ConstantInstallment),
            Just(AmortizationSystem::ConstantAmortization),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn prop_principal_is_conserved_and_balance_closes(
            cents in 100_000i64..500_000_000,
            rate_bp in 0u32..300,
            months in 1u32..=420,
            system in any_system(),
        ) {
            let principal = Decimal::new(cents, 2);
            let rate = Decimal::new(rate_bp as i64, 4);
            let result = generate_schedule(principal, rate, months, system).unwrap();

            let amortized: Decimal = result.schedule.iter().map(|row| row.amortization).sum();
            prop_assert!(within(amortized, principal, dec!(0.01)));
            prop_assert_eq!(result.schedule.last().unwrap().balance, Decimal::ZERO);

            let mut previous = principal;
            for row in &result.schedule {
                prop_assert!(row.balance <= previous);
                previous = row.balance;
            }
        }

        #[test]
        fn prop_constant_part_is_constant(
            cents in 100_000i64..500_000_000,
            rate_bp in 1u32..300,
            months in 2u32..=420,
        ) {
            let principal = Decimal::new(cents, 2);
            let rate = Decimal::new(rate_bp as i64, 4);

            let price = generate_schedule(principal, rate, months, AmortizationSystem::ConstantInstallment).unwrap();
            for row in &price.schedule {
                prop_assert!(within(row.installment, price.first_installment, dec!(0.01)));
            }

            let sac = generate_schedule(principal, rate, months, AmortizationSystem::ConstantAmortization).unwrap();
            let expected = principal / Decimal::from(months);
            for row in &sac.schedule {
                prop_assert!(within(row.amortization, expected, dec!(0.01)));
            }
        }
    }
}
