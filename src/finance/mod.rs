//! Cost and financial model
//!
//! - `cost`: two-tier capital cost breakdown for a tank capacity
//! - `financial`: water savings, payback and 20-year return
//! - `cost_benefit`: discounted cash flow, sensitivity and risk view

pub mod cost;
pub mod cost_benefit;
pub mod financial;

pub use cost::{calculate_system_cost, CostBreakdown};
pub use cost_benefit::{cost_benefit_analysis, recharge_benefit_value, CostBenefitAnalysis, RiskLevel};
pub use financial::{calculate_financials, FinancialResult, PaybackPeriod};
