//! `br_investment` is a Rust library for simulating real estate financing in Brazil
//! and analysing the return of a financed property that is resold.
//!
//! It covers the two main amortization systems in Brazil:
//! - **SAC (Sistema de Amortização Constante)**: Characterized by fixed amortization payments,
//!   leading to decreasing total payments over time.
//! - **Price (Sistema Francês de Amortização)**: Characterized by fixed total payments
//!   throughout the financing period.
//!
//! On top of the repayment schedule it aggregates acquisition costs (ITBI,
//! registry, brokerage, renovation) and holding costs into profit and ROI for
//! a resale month, compares several resale months, and reshapes the schedule
//! into debt and payment series for charts and reports.
//!
//! The engine is a pure pipeline over [`Decimal`](rust_decimal::Decimal):
//! validate → schedule → aggregate → project → assemble. Inputs that cannot be
//! computed give `None`, never a panic. Text parsing and formatting for forms
//! and reports live in [`money`], outside the numeric core.
//!
//! ## Usage
//!
//! Add `br_investment` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! br_investment = "0.5.0"
//! rust_decimal = "1.39.0"
//! rust_decimal_macros = "1.39.0"
//! ```
//!
//! Then, use `analyze_investment` to get the schedule and the return of a resale:
//!
//! ```rust
//! use br_investment::{
//!     AcquisitionCosts, AmortizationSystem, EngineConfig, InvestmentInput, SimulationInput,
//!     analyze_investment, money::format_currency,
//! };
//! use rust_decimal_macros::dec;
//!
//! fn main() {
//!     let input = InvestmentInput {
//!         simulation: SimulationInput {
//!             property_value: dec!(450_000),
//!             down_payment: dec!(90_000),
//!             annual_interest_rate: dec!(0.105),
//!             term_months: 420,
//!             amortization_system: AmortizationSystem::ConstantAmortization,
//!         },
//!         market_value: dec!(540_000),
//!         costs: AcquisitionCosts {
//!             itbi: dec!(13_500),
//!             documentation: dec!(4_500),
//!             brokerage: dec!(0),
//!             renovation: dec!(20_000),
//!         },
//!         monthly_expenses: dec!(750),
//!         holding_period_months: 36,
//!     };
//!
//!     match analyze_investment(&input, &EngineConfig::default()) {
//!         Some(result) => {
//!             println!("First installment: {}", format_currency(result.amortization.first_installment));
//!             println!("Debt at resale:    {}", format_currency(result.remaining_debt_at_resale));
//!             println!("Estimated profit:  {}", format_currency(result.estimated_profit));
//!             println!("Total ROI:         {:.2}%", result.total_roi);
//!         }
//!         None => {
//!             eprintln!("Scenario cannot be computed");
//!         }
//!     }
//! }
//! ```

pub mod analysis;
pub mod audit;
pub mod config;
pub mod input;
pub mod investment;
pub mod money;
pub mod projection;
pub mod rates;
pub mod schedule;
pub mod timeline;
pub mod validation;

/// Monetary amounts. Never rounded inside the engine.
pub type Money = rust_decimal::Decimal;

/// Rates as fractions (0.01 = 1%), never as percentages.
pub type Rate = rust_decimal::Decimal;

pub use analysis::{InvestmentResult, SystemComparison, analyze_investment, compare_systems, simulate};
pub use config::EngineConfig;
pub use input::{AcquisitionCosts, InvestmentInput, SimulationInput};
pub use investment::{InvestmentSummary, aggregate};
pub use projection::{DebtPoint, PaymentPoint, debt_evolution, payment_breakdown};
pub use rates::RateConvention;
pub use schedule::{AmortizationResult, AmortizationSystem, ScheduleRow, ScheduleStrategy, generate_schedule};
pub use timeline::{TimelineRow, find_row, project_timeline};
pub use validation::{ValidatedParams, ValidationError, validate};
