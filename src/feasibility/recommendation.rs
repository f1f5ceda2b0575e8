//! System recommendation by feasibility band
//!
//! - score ≥ 80: comprehensive underground system at the optimal capacity
//! - score ≥ 65: standard overhead system at the minimum capacity, 80% cost
//! - otherwise: basic recharge-focused system, 60% cost

use serde::Serialize;

use super::score::{FeasibilityLevel, FeasibilityScore, ScoreBreakdown};
use crate::finance::CostBreakdown;
use crate::geo::SoilProfile;
use crate::harvest::StorageSizing;
use crate::utils::round_whole;

/// Axis score below which an improvement suggestion is made.
const WEAK_AXIS_SCORE: u32 = 15;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PrimaryRecommendation {
    /// Storage-led system (comprehensive or standard tier).
    Storage {
        system_type: &'static str,
        rationale: &'static str,
        tank_capacity_liters: u64,
        tank_material: &'static str,
        filtration_system: &'static str,
        pump_specification: &'static str,
        estimated_cost_inr: f64,
        expected_performance: &'static str,
    },
    /// Recharge-led basic system.
    RechargeFocus {
        system_type: &'static str,
        rationale: &'static str,
        storage_capacity_liters: u64,
        recharge_component: &'static str,
        estimated_cost_inr: f64,
        expected_performance: &'static str,
    },
}

impl PrimaryRecommendation {
    pub fn estimated_cost_inr(&self) -> f64 {
        match self {
            PrimaryRecommendation::Storage { estimated_cost_inr, .. }
            | PrimaryRecommendation::RechargeFocus { estimated_cost_inr, .. } => *estimated_cost_inr,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlternativeOption {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_capacity_liters: Option<u64>,
    pub components: Vec<&'static str>,
    pub estimated_cost_inr: f64,
    pub benefits: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeasibilityAdvice {
    pub score_interpretation: FeasibilityLevel,
    pub key_recommendations: &'static str,
    pub improvement_suggestions: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemRecommendations {
    pub primary_recommendation: PrimaryRecommendation,
    pub alternative_options: Vec<AlternativeOption>,
    pub feasibility_based_advice: FeasibilityAdvice,
}

fn primary_for(score: u32, storage: &StorageSizing, total_cost: f64) -> PrimaryRecommendation {
    if score >= 80 {
        PrimaryRecommendation::Storage {
            system_type: "Comprehensive RTRWH with Underground Storage",
            rationale: "Excellent conditions support full-scale implementation",
            tank_capacity_liters: storage.optimal_liters,
            tank_material: "Ferrocement with polymer lining",
            filtration_system: "Advanced multi-stage (first flush + sand + carbon + UV)",
            pump_specification: "0.75 HP variable speed pump",
            estimated_cost_inr: total_cost,
            expected_performance: "High water yield with excellent quality",
        }
    } else if score >= 65 {
        PrimaryRecommendation::Storage {
            system_type: "Standard RTRWH with Overhead Storage",
            rationale: "Good conditions with standard implementation approach",
            tank_capacity_liters: storage.minimum_liters,
            tank_material: "Food-grade PVC or polyethylene",
            filtration_system: "Standard (first flush + sand filter)",
            pump_specification: "0.5 HP centrifugal pump",
            estimated_cost_inr: round_whole(total_cost * 0.8),
            expected_performance: "Good water yield for household needs",
        }
    } else {
        PrimaryRecommendation::RechargeFocus {
            system_type: "Basic RTRWH with Recharge Focus",
            rationale: "Moderate feasibility - prioritize groundwater recharge",
            storage_capacity_liters: storage.minimum_liters,
            recharge_component: "Primary focus on artificial recharge",
            estimated_cost_inr: round_whole(total_cost * 0.6),
            expected_performance: "Limited storage with groundwater enhancement",
        }
    }
}

fn alternatives(soil: &SoilProfile, storage: &StorageSizing, total_cost: f64) -> Vec<AlternativeOption> {
    let mut options = Vec::new();
    if soil.recharge_suitability.to_lowercase().contains("recharge") {
        options.push(AlternativeOption {
            kind: "Groundwater Recharge System",
            storage_capacity_liters: None,
            components: vec!["Recharge pit", "Filter chamber", "Distribution system"],
            estimated_cost_inr: round_whole(total_cost * 0.6),
            benefits: "Lower cost, groundwater enhancement, flood mitigation",
        });
    }
    options.push(AlternativeOption {
        kind: "Hybrid Storage + Recharge System",
        storage_capacity_liters: Some(storage.minimum_liters),
        components: vec!["Smaller storage tank", "Overflow recharge pit"],
        estimated_cost_inr: round_whole(total_cost * 0.8),
        benefits: "Best of both systems, optimal water security",
    });
    options
}

/// One suggestion per weak axis, or a go-ahead when none is weak.
pub fn improvement_suggestions(breakdown: &ScoreBreakdown) -> Vec<&'static str> {
    let mut suggestions = Vec::new();
    if breakdown.rainfall < WEAK_AXIS_SCORE {
        suggestions.push("Consider water-efficient appliances to maximize limited rainfall");
    }
    if breakdown.roof_area < WEAK_AXIS_SCORE {
        suggestions.push("Explore community or neighborhood-level harvesting");
    }
    if breakdown.soil_suitability < WEAK_AXIS_SCORE {
        suggestions.push("Focus on storage systems rather than recharge");
    }
    if breakdown.water_demand < WEAK_AXIS_SCORE {
        suggestions.push("Implement water conservation measures before RTRWH");
    }
    if suggestions.is_empty() {
        suggestions.push("Excellent conditions - proceed with confidence");
    }
    suggestions
}

pub fn recommend_system(
    feasibility: &FeasibilityScore,
    storage: &StorageSizing,
    cost: &CostBreakdown,
    soil: &SoilProfile,
) -> SystemRecommendations {
    SystemRecommendations {
        primary_recommendation: primary_for(feasibility.total_score, storage, cost.total_cost),
        alternative_options: alternatives(soil, storage, cost.total_cost),
        feasibility_based_advice: FeasibilityAdvice {
            score_interpretation: feasibility.feasibility_level,
            key_recommendations: feasibility.recommendation,
            improvement_suggestions: improvement_suggestions(&feasibility.score_breakdown),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feasibility::feasibility_score;
    use crate::finance::calculate_system_cost;
    use crate::geo::soil_profile;
    use crate::types::{Coordinate, SystemTier};

    fn sizing() -> StorageSizing {
        StorageSizing {
            minimum_liters: 13504,
            optimal_liters: 35110,
            maximum_beneficial_liters: 54016,
        }
    }

    #[test]
    fn test_high_score_gets_comprehensive_system() {
        let soil = soil_profile(&Coordinate::new(28.6139, 77.2090));
        let feasibility = feasibility_score(797.0, 1200.0, &soil, 4);
        let cost = calculate_system_cost(35110, SystemTier::Standard);
        let rec = recommend_system(&feasibility, &sizing(), &cost, &soil);

        match &rec.primary_recommendation {
            PrimaryRecommendation::Storage { system_type, tank_capacity_liters, .. } => {
                assert_eq!(*system_type, "Comprehensive RTRWH with Underground Storage");
                assert_eq!(*tank_capacity_liters, 35110);
            }
            other => panic!("unexpected recommendation {:?}", other),
        }
        assert_eq!(rec.primary_recommendation.estimated_cost_inr(), cost.total_cost);
        assert_eq!(
            rec.feasibility_based_advice.improvement_suggestions,
            vec!["Excellent conditions - proceed with confidence"]
        );
    }

    #[test]
    fn test_mid_score_gets_standard_system() {
        // Mumbai black soil, small roof: 25 + 10 + 15 + 20 = 70
        let soil = soil_profile(&Coordinate::new(19.0760, 72.8777));
        let feasibility = feasibility_score(2200.0, 400.0, &soil, 4);
        assert_eq!(feasibility.total_score, 70);

        let cost = calculate_system_cost(13504, SystemTier::Standard);
        let rec = recommend_system(&feasibility, &sizing(), &cost, &soil);

        match &rec.primary_recommendation {
            PrimaryRecommendation::Storage { tank_capacity_liters, estimated_cost_inr, .. } => {
                assert_eq!(*tank_capacity_liters, 13504);
                assert_eq!(*estimated_cost_inr, (cost.total_cost * 0.8).round_ties_even());
            }
            other => panic!("unexpected recommendation {:?}", other),
        }
        assert_eq!(
            rec.feasibility_based_advice.improvement_suggestions,
            vec!["Explore community or neighborhood-level harvesting"]
        );
        // black soil text does not mention recharge: hybrid only
        assert_eq!(rec.alternative_options.len(), 1);
        assert_eq!(rec.alternative_options[0].kind, "Hybrid Storage + Recharge System");
    }

    #[test]
    fn test_low_score_gets_recharge_focus() {
        let soil = soil_profile(&Coordinate::new(26.9, 72.0));
        let feasibility = feasibility_score(250.0, 200.0, &soil, 10);
        assert!(feasibility.total_score < 65);

        let cost = calculate_system_cost(3000, SystemTier::Basic);
        let rec = recommend_system(&feasibility, &sizing(), &cost, &soil);

        assert!(matches!(rec.primary_recommendation, PrimaryRecommendation::RechargeFocus { .. }));
        assert_eq!(rec.primary_recommendation.estimated_cost_inr(), (cost.total_cost * 0.6).round_ties_even());
        // desert soil is "Excellent for recharge"
        assert_eq!(rec.alternative_options.len(), 2);
        assert_eq!(rec.feasibility_based_advice.improvement_suggestions.len(), 4);
    }

    #[test]
    fn test_recharge_focus_serializes_storage_field() {
        let rec = primary_for(40, &sizing(), 100_000.0);
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["storage_capacity_liters"], 13504);
        assert_eq!(json["estimated_cost_inr"], 60000.0);
        assert!(json.get("tank_capacity_liters").is_none());
    }
}
