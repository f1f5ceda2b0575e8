//! Capital cost of a storage system.
//!
//! Only the advanced tier buys the better filter and the 1 HP pump; every
//! other tier (including unrecognised ones) is priced as basic equipment.

use serde::Serialize;

use crate::types::SystemTier;
use crate::utils::lookup_tables::{
    CONTINGENCY_FACTOR, FILTRATION_ADVANCED, FILTRATION_BASIC, INSTALLATION_BASE, PUMP_HALF_HP,
    PUMP_ONE_HP, TANK_COST_PER_LITER,
};
use crate::utils::round_whole;

/// Cost components in whole rupees. `total_cost` is the sum of the rounded
/// components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub tank_cost: f64,
    pub filtration_cost: f64,
    pub pump_cost: f64,
    pub installation_cost: f64,
    pub contingency: f64,
    pub total_cost: f64,
}

pub fn calculate_system_cost(tank_capacity_liters: u64, tier: SystemTier) -> CostBreakdown {
    let tank = tank_capacity_liters as f64 * TANK_COST_PER_LITER;
    let (filtration, pump) = match tier {
        SystemTier::Advanced => (FILTRATION_ADVANCED, PUMP_ONE_HP),
        _ => (FILTRATION_BASIC, PUMP_HALF_HP),
    };
    let installation = INSTALLATION_BASE;
    let subtotal = tank + filtration + pump + installation;

    let tank_cost = round_whole(tank);
    let filtration_cost = round_whole(filtration);
    let pump_cost = round_whole(pump);
    let installation_cost = round_whole(installation);
    let contingency = round_whole(subtotal * CONTINGENCY_FACTOR);

    CostBreakdown {
        tank_cost,
        filtration_cost,
        pump_cost,
        installation_cost,
        contingency,
        total_cost: tank_cost + filtration_cost + pump_cost + installation_cost + contingency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_tier_cost() {
        let cost = calculate_system_cost(35110, SystemTier::Standard);

        assert_eq!(cost.tank_cost, 2_984_350.0);
        assert_eq!(cost.filtration_cost, 25_000.0);
        assert_eq!(cost.pump_cost, 12_000.0);
        assert_eq!(cost.installation_cost, 20_000.0);
        // (2984350 + 57000) × 0.1 = 304135
        assert_eq!(cost.contingency, 304_135.0);
        assert_eq!(cost.total_cost, 3_345_485.0);
    }

    #[test]
    fn test_advanced_tier_uses_better_equipment() {
        let cost = calculate_system_cost(3000, SystemTier::Advanced);
        assert_eq!(cost.filtration_cost, 40_000.0);
        assert_eq!(cost.pump_cost, 18_000.0);
    }

    #[test]
    fn test_basic_and_unknown_price_like_standard() {
        let standard = calculate_system_cost(5000, SystemTier::Standard);
        assert_eq!(calculate_system_cost(5000, SystemTier::Basic), standard);
        assert_eq!(calculate_system_cost(5000, SystemTier::Unknown), standard);
    }

    #[test]
    fn test_total_is_sum_of_components() {
        for capacity in [0, 1, 1234, 3001, 99_999] {
            let c = calculate_system_cost(capacity, SystemTier::Standard);
            let sum = c.tank_cost + c.filtration_cost + c.pump_cost + c.installation_cost + c.contingency;
            assert_eq!(c.total_cost, sum);
            let subtotal = sum - c.contingency;
            assert!((c.contingency - subtotal * 0.10).abs() <= 0.5);
        }
    }
}
