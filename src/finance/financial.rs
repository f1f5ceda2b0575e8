//! Water savings and simple payback
//!
//! ```text
//! usable   = annual_liters × 0.70
//! savings  = usable / 1000 × rate(region)
//! payback  = total_cost / savings            (Never when savings = 0)
//! net_20   = savings × 20 − total_cost
//! roi      = net_20 / total_cost × 100       (0 when total_cost = 0)
//! ```

use serde::{Serialize, Serializer};

use crate::types::RegionType;
use crate::utils::lookup_tables::water_rate;
use crate::utils::{round_to, round_whole};

/// Share of harvested water that actually displaces purchased water.
pub const UTILIZATION_RATE: f64 = 0.70;
/// Horizon for the simple return projection.
pub const PROJECTION_YEARS: f64 = 20.0;

/// Years to recover the investment, or `Never` when there are no savings.
///
/// Serializes as a number or `null`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaybackPeriod {
    Years(f64),
    Never,
}

impl PaybackPeriod {
    pub fn from_ratio(cost: f64, annual_savings: f64) -> Self {
        if annual_savings > 0.0 {
            PaybackPeriod::Years(cost / annual_savings)
        } else {
            PaybackPeriod::Never
        }
    }

    /// Divide the period; `Never` stays `Never`.
    pub fn divided_by(self, divisor: f64) -> Self {
        match self {
            PaybackPeriod::Years(y) => PaybackPeriod::Years(y / divisor),
            PaybackPeriod::Never => PaybackPeriod::Never,
        }
    }

    pub fn rounded(self, decimals: i32) -> Self {
        match self {
            PaybackPeriod::Years(y) => PaybackPeriod::Years(round_to(y, decimals)),
            PaybackPeriod::Never => PaybackPeriod::Never,
        }
    }

    /// True when the period is longer than `years` (`Never` always is).
    pub fn exceeds(&self, years: f64) -> bool {
        match self {
            PaybackPeriod::Years(y) => *y > years,
            PaybackPeriod::Never => true,
        }
    }

    pub fn years(&self) -> Option<f64> {
        match self {
            PaybackPeriod::Years(y) => Some(*y),
            PaybackPeriod::Never => None,
        }
    }
}

impl Serialize for PaybackPeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PaybackPeriod::Years(y) => serializer.serialize_f64(*y),
            PaybackPeriod::Never => serializer.serialize_none(),
        }
    }
}

/// Financial projection, rounded for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinancialResult {
    pub annual_water_savings_liters: f64,
    pub annual_cost_savings: f64,
    pub payback_period_years: PaybackPeriod,
    pub total_20_year_savings: f64,
    pub net_20_year_benefit: f64,
    pub roi_percentage: f64,
}

pub fn calculate_financials(annual_liters: f64, total_cost: f64, region: RegionType) -> FinancialResult {
    let usable = annual_liters * UTILIZATION_RATE;
    let annual_savings = usable / 1000.0 * water_rate(region);
    let payback = PaybackPeriod::from_ratio(total_cost, annual_savings);
    let total_savings = annual_savings * PROJECTION_YEARS;
    let net_benefit = total_savings - total_cost;
    let roi = if total_cost > 0.0 {
        net_benefit / total_cost * 100.0
    } else {
        0.0
    };

    FinancialResult {
        annual_water_savings_liters: round_whole(usable),
        annual_cost_savings: round_whole(annual_savings),
        payback_period_years: payback.rounded(1),
        total_20_year_savings: round_whole(total_savings),
        net_20_year_benefit: round_whole(net_benefit),
        roi_percentage: round_to(roi, 1),
    }
}
