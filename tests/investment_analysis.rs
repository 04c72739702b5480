use br_investment::money::{format_currency, parse_currency, parse_percentage};
use br_investment::{
    AcquisitionCosts, AmortizationSystem, EngineConfig, InvestmentInput, SimulationInput, analyze_investment,
    compare_systems, find_row, project_timeline, simulate,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn simulation(system: AmortizationSystem) -> SimulationInput {
    SimulationInput {
        property_value: dec!(250000),
        down_payment: dec!(50000),
        annual_interest_rate: dec!(0.12),
        term_months: 12,
        amortization_system: system,
    }
}

fn investment(system: AmortizationSystem, holding: u32) -> InvestmentInput {
    InvestmentInput {
        simulation: simulation(system),
        market_value: dec!(280000),
        costs: AcquisitionCosts {
            itbi: dec!(7500),
            documentation: dec!(2000),
            brokerage: dec!(5000),
            renovation: dec!(0),
        },
        monthly_expenses: dec!(400),
        holding_period_months: holding,
    }
}

fn close(actual: Decimal, expected: Decimal) -> bool {
    (actual - expected).abs() <= dec!(0.01)
}

#[test]
fn sac_reference_scenario() {
    let result = simulate(&simulation(AmortizationSystem::ConstantAmortization), &EngineConfig::default()).unwrap();

    assert_eq!(result.financed_amount, dec!(200000));
    assert!(close(result.monthly_amortization, dec!(16666.67)));
    assert!(close(result.first_installment, dec!(18666.67)));
    assert!(close(result.last_installment, dec!(16833.33)));
    assert!(close(result.schedule.last().unwrap().balance, dec!(0)));
}

#[test]
fn price_reference_scenario() {
    let result = simulate(&simulation(AmortizationSystem::ConstantInstallment), &EngineConfig::default()).unwrap();

    assert!(close(result.first_installment, dec!(17769.76)));
    assert!(result.schedule.iter().all(|row| close(row.installment, result.first_installment)));
    assert_eq!(result.total_interest, result.total_amount - result.financed_amount);

    let amortized: Decimal = result.schedule.iter().map(|row| row.amortization).sum();
    assert!(close(amortized, result.financed_amount));
}

#[test]
fn resale_at_term_clears_the_debt() {
    for system in [AmortizationSystem::ConstantInstallment, AmortizationSystem::ConstantAmortization] {
        let result = analyze_investment(&investment(system, 12), &EngineConfig::default()).unwrap();
        assert_eq!(result.remaining_debt_at_resale, dec!(0));
        assert_eq!(result.total_paid_until_resale, result.amortization.total_amount);
    }
}

#[test]
fn timeline_is_monotonic_over_horizons() {
    let mut input = investment(AmortizationSystem::ConstantInstallment, 6);
    input.simulation.term_months = 360;

    let rows = project_timeline(&input, &[6, 12, 24], &EngineConfig::default());

    assert_eq!(rows.len(), 3);
    assert!(rows[0].total_paid <= rows[1].total_paid && rows[1].total_paid <= rows[2].total_paid);
    assert!(rows[0].remaining_debt >= rows[1].remaining_debt && rows[1].remaining_debt >= rows[2].remaining_debt);

    let analysis = analyze_investment(&input, &EngineConfig::default()).unwrap();
    assert_eq!(find_row(&analysis.timeline_comparison, 6), Some(&rows[0]));
}

#[test]
fn parsed_form_values_flow_into_the_engine() {
    let input = SimulationInput {
        property_value: parse_currency("R$ 250.000,00").unwrap(),
        down_payment: parse_currency("R$ 50.000,00").unwrap(),
        annual_interest_rate: parse_percentage("12%").unwrap(),
        term_months: 12,
        amortization_system: AmortizationSystem::ConstantAmortization,
    };

    let result = simulate(&input, &EngineConfig::default()).unwrap();
    assert_eq!(format_currency(result.first_installment), "R$ 18.666,67");
    assert_eq!(format_currency(result.last_installment), "R$ 16.833,33");
}

#[test]
fn comparison_keeps_both_systems_consistent() {
    let comparison = compare_systems(&simulation(AmortizationSystem::ConstantAmortization), &EngineConfig::default()).unwrap();

    assert_eq!(
        comparison.interest_savings,
        comparison.constant_installment.total_interest - comparison.constant_amortization.total_interest
    );
    assert!(comparison.interest_savings > dec!(0));
}

#[test]
fn outputs_are_reproducible() {
    let input = investment(AmortizationSystem::ConstantInstallment, 9);
    let config = EngineConfig::default();

    let first = serde_json::to_vec(&analyze_investment(&input, &config).unwrap()).unwrap();
    let second = serde_json::to_vec(&analyze_investment(&input, &config).unwrap()).unwrap();

    assert_eq!(first, second);
}
