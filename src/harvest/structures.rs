//! Storage and artificial-recharge structures
//!
//! Two outputs:
//! - [`suggest_structures`]: which structure types suit the site
//! - [`design_recharge_structures`]: sized pits, trenches, wells and dams
//!
//! Both key off the soil's infiltration text. Matching is by lower-cased
//! substring, so "Medium-High" qualifies as both high and medium.

use serde::Serialize;

use crate::geo::SoilProfile;
use crate::utils::{round_to, round_whole};

/// Harvest above which an underground tank is worth suggesting.
const UNDERGROUND_TANK_THRESHOLD_LITERS: f64 = 15_000.0;
/// Annual liters one recharge pit absorbs.
const LITERS_PER_PIT: f64 = 15_000.0;
const PIT_COST: f64 = 30_000.0;
const PIT_VOLUME_M3: f64 = 12.0;
/// Trench liters absorbed per meter of length.
const LITERS_PER_TRENCH_METER: f64 = 500.0;
const MAX_TRENCH_METERS: f64 = 50.0;
const TRENCH_COST_PER_METER: f64 = 1_200.0;
const INJECTION_WELL_COST: f64 = 45_000.0;
const CHECK_DAM_THRESHOLD_LITERS: f64 = 50_000.0;
const CHECK_DAM_COST: f64 = 75_000.0;

fn infiltration_text(soil: &SoilProfile) -> String {
    soil.infiltration_rate.to_lowercase()
}

/// Nominal infiltration rate used for sizing: high 20, medium 10, else 5 mm/h.
pub fn infiltration_mm_per_hour(soil: &SoilProfile) -> u32 {
    let text = infiltration_text(soil);
    if text.contains("high") {
        20
    } else if text.contains("medium") {
        10
    } else {
        5
    }
}

// ============================================================================
// Structure suggestions
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct StorageOption {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub capacity_range: &'static str,
    pub suitability: &'static str,
    pub advantages: Vec<&'static str>,
    pub disadvantages: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RechargeOption {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub dimensions: &'static str,
    pub suitability: &'static str,
    pub capacity: &'static str,
    pub cost_estimate: f64,
    pub maintenance: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HybridOption {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
    pub storage_capacity: &'static str,
    pub recharge_capacity: &'static str,
    pub advantages: Vec<&'static str>,
    pub total_cost_estimate: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StructureSuggestions {
    pub rooftop_harvesting: Vec<StorageOption>,
    pub artificial_recharge: Vec<RechargeOption>,
    pub hybrid_systems: Vec<HybridOption>,
}

pub fn suggest_structures(annual_harvest_liters: f64, soil: &SoilProfile) -> StructureSuggestions {
    let mut rooftop_harvesting = Vec::new();
    if annual_harvest_liters > UNDERGROUND_TANK_THRESHOLD_LITERS {
        rooftop_harvesting.push(StorageOption {
            kind: "Underground Storage Tank",
            capacity_range: "8000-15000 liters",
            suitability: "High water yield areas",
            advantages: vec!["Reliable water supply", "Space efficient", "Good water quality"],
            disadvantages: vec!["Higher initial cost", "Regular maintenance needed"],
        });
    }
    rooftop_harvesting.push(StorageOption {
        kind: "Overhead Storage Tank",
        capacity_range: "3000-8000 liters",
        suitability: "All roof areas",
        advantages: vec!["Lower installation cost", "Easy maintenance", "Gravity feed"],
        disadvantages: vec!["Space requirement", "Limited capacity"],
    });

    let infiltration = infiltration_text(soil);
    let excellent = soil.recharge_suitability.to_lowercase().contains("excellent");

    let mut artificial_recharge = Vec::new();
    if infiltration.contains("high") || excellent {
        artificial_recharge.push(RechargeOption {
            kind: "Recharge Pit",
            dimensions: "2m x 2m x 3m depth",
            suitability: "High infiltration soils",
            capacity: "12 cubic meters",
            cost_estimate: 30_000.0,
            maintenance: "Annual cleaning and de-silting",
        });
        artificial_recharge.push(RechargeOption {
            kind: "Percolation Tank",
            dimensions: "10m x 5m x 2.5m depth",
            suitability: "Large catchment areas",
            capacity: "125 cubic meters",
            cost_estimate: 225_000.0,
            maintenance: "Bi-annual cleaning",
        });
    }
    if infiltration.contains("medium") {
        artificial_recharge.push(RechargeOption {
            kind: "Recharge Trench",
            dimensions: "0.5m wide x 1.5m deep x 10m length",
            suitability: "Medium infiltration soils",
            capacity: "7.5 cubic meters",
            cost_estimate: 12_000.0,
            maintenance: "Quarterly inspection",
        });
        artificial_recharge.push(RechargeOption {
            kind: "Injection Well",
            dimensions: "150mm diameter x 30m depth",
            suitability: "Low permeability areas",
            capacity: "Direct injection to aquifer",
            cost_estimate: 45_000.0,
            maintenance: "Annual pump testing",
        });
    }

    let hybrid_systems = vec![HybridOption {
        kind: "Storage + Recharge Combination",
        description: "Small storage tank with overflow to recharge pit",
        storage_capacity: "5000 liters",
        recharge_capacity: "8 cubic meters",
        advantages: vec!["Water security + groundwater enhancement", "Cost effective"],
        total_cost_estimate: 85_000.0,
    }];

    StructureSuggestions {
        rooftop_harvesting,
        artificial_recharge,
        hybrid_systems,
    }
}

// ============================================================================
// Recharge structure designs
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct PitSpecification {
    pub length: &'static str,
    pub width: &'static str,
    pub depth: &'static str,
    pub volume: &'static str,
    pub side_wall_construction: &'static str,
    pub bottom_filling: &'static str,
    pub top_cover: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RechargePitDesign {
    pub number_recommended: u32,
    pub individual_pit_specifications: PitSpecification,
    pub total_recharge_capacity: String,
    pub construction_cost: f64,
    pub maintenance_requirements: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrenchSpecification {
    pub total_length: String,
    pub width: &'static str,
    pub depth: &'static str,
    pub spacing_between_trenches: &'static str,
    pub gradient: &'static str,
    pub backfill_material: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RechargeTrenchDesign {
    pub recommended_configuration: &'static str,
    pub specifications: TrenchSpecification,
    pub total_capacity: String,
    pub construction_cost: f64,
    pub suitability: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct WellSpecification {
    pub diameter: &'static str,
    pub depth: &'static str,
    pub casing: &'static str,
    pub gravel_pack: &'static str,
    pub surface_chamber: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct InjectionWellDesign {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub specifications: WellSpecification,
    pub recharge_rate: String,
    pub construction_cost: f64,
    pub advantages: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DamSpecification {
    pub height: &'static str,
    pub length: &'static str,
    pub spillway_width: &'static str,
    pub foundation_depth: &'static str,
    pub construction_material: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckDamDesign {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub specifications: DamSpecification,
    pub storage_capacity: &'static str,
    pub construction_cost: f64,
    pub recharge_benefit: &'static str,
}

/// Sized recharge structures. Wells and dams appear only when they apply.
#[derive(Debug, Clone, Serialize)]
pub struct RechargeDesigns {
    pub recharge_pits: RechargePitDesign,
    pub recharge_trenches: RechargeTrenchDesign,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injection_wells: Option<InjectionWellDesign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_dams: Option<CheckDamDesign>,
}

/// Size recharge structures for an annual runoff volume.
pub fn design_recharge_structures(annual_runoff_liters: f64, soil: &SoilProfile) -> RechargeDesigns {
    let infiltration = infiltration_mm_per_hour(soil);

    let pits = (annual_runoff_liters / LITERS_PER_PIT).ceil().max(1.0) as u32;
    let recharge_pits = RechargePitDesign {
        number_recommended: pits,
        individual_pit_specifications: PitSpecification {
            length: "2.0 meters",
            width: "2.0 meters",
            depth: "3.0 meters",
            volume: "12 cubic meters",
            side_wall_construction: "Honey-comb brick work or perforated concrete rings",
            bottom_filling: "60cm gravel (20-40mm) + 30cm coarse sand",
            top_cover: "Perforated concrete slab with inspection chamber",
        },
        total_recharge_capacity: format!("{} cubic meters", pits as f64 * PIT_VOLUME_M3),
        construction_cost: pits as f64 * PIT_COST,
        maintenance_requirements: vec![
            "Annual cleaning of silt accumulation",
            "Replacement of filter media every 3-5 years",
            "Quarterly inspection during monsoon",
        ],
    };

    let trench_length = MAX_TRENCH_METERS.min(annual_runoff_liters / LITERS_PER_TRENCH_METER);
    let recharge_trenches = RechargeTrenchDesign {
        recommended_configuration: "Network of interconnected trenches",
        specifications: TrenchSpecification {
            total_length: format!("{} meters", round_to(trench_length, 1)),
            width: "0.5 meters",
            depth: "1.5 meters",
            spacing_between_trenches: "5-10 meters",
            gradient: "1:100 to 1:200 (gentle slope)",
            backfill_material: "Graded filter media (gravel + sand + brick aggregate)",
        },
        total_capacity: format!("{} cubic meters", round_to(trench_length * 0.75, 1)),
        construction_cost: round_whole(trench_length * TRENCH_COST_PER_METER),
        suitability: "Ideal for large open areas with gentle slope",
    };

    let injection_wells = (infiltration < 10).then(|| InjectionWellDesign {
        kind: "Bore well recharge shaft",
        specifications: WellSpecification {
            diameter: "150-200mm",
            depth: "25-40 meters (depending on water table)",
            casing: "PVC slotted casing in water bearing zone",
            gravel_pack: "20-40mm gravel around slotted zone",
            surface_chamber: "1m x 1m x 1m concrete chamber with silt trap",
        },
        recharge_rate: format!("{} liters annually", round_whole(annual_runoff_liters * 0.8)),
        construction_cost: INJECTION_WELL_COST,
        advantages: vec![
            "Direct recharge to aquifer",
            "Suitable for low permeability soils",
            "Space efficient",
        ],
    });

    let check_dams = (annual_runoff_liters > CHECK_DAM_THRESHOLD_LITERS).then(|| CheckDamDesign {
        kind: "Small check dam across seasonal drainage",
        specifications: DamSpecification {
            height: "1.5-2.5 meters",
            length: "15-25 meters (depending on drain width)",
            spillway_width: "3-5 meters",
            foundation_depth: "1.0-1.5 meters",
            construction_material: "Stone masonry or concrete blocks",
        },
        storage_capacity: "500-1500 cubic meters",
        construction_cost: CHECK_DAM_COST,
        recharge_benefit: "Increased groundwater recharge in upstream area",
    });

    RechargeDesigns {
        recharge_pits,
        recharge_trenches,
        injection_wells,
        check_dams,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::soil_profile;
    use crate::types::Coordinate;

    fn soil_at(lat: f64, lng: f64) -> SoilProfile {
        soil_profile(&Coordinate::new(lat, lng))
    }

    #[test]
    fn test_infiltration_bands() {
        assert_eq!(infiltration_mm_per_hour(&soil_at(12.97, 77.59)), 20); // red, high
        assert_eq!(infiltration_mm_per_hour(&soil_at(28.61, 77.21)), 10); // alluvial, medium
        assert_eq!(infiltration_mm_per_hour(&soil_at(19.07, 72.87)), 5); // black, low
        assert_eq!(infiltration_mm_per_hour(&soil_at(34.08, 74.80)), 5); // mountain, variable
    }

    #[test]
    fn test_alluvial_suggestions() {
        let suggestions = suggest_structures(60420.0, &soil_at(28.61, 77.21));

        let storage: Vec<_> = suggestions.rooftop_harvesting.iter().map(|s| s.kind).collect();
        assert_eq!(storage, vec!["Underground Storage Tank", "Overhead Storage Tank"]);

        let recharge: Vec<_> = suggestions.artificial_recharge.iter().map(|s| s.kind).collect();
        assert_eq!(recharge, vec!["Recharge Trench", "Injection Well"]);
        assert_eq!(suggestions.hybrid_systems.len(), 1);
    }

    #[test]
    fn test_small_harvest_skips_underground_tank() {
        let suggestions = suggest_structures(15000.0, &soil_at(19.07, 72.87));
        assert_eq!(suggestions.rooftop_harvesting.len(), 1);
        // black soil: low infiltration, storage-oriented
        assert!(suggestions.artificial_recharge.is_empty());
    }

    #[test]
    fn test_excellent_soil_gets_pits_and_tanks() {
        let suggestions = suggest_structures(20000.0, &soil_at(12.97, 77.59));
        let recharge: Vec<_> = suggestions.artificial_recharge.iter().map(|s| s.kind).collect();
        assert_eq!(recharge, vec!["Recharge Pit", "Percolation Tank"]);
    }

    #[test]
    fn test_recharge_design_sizing() {
        let designs = design_recharge_structures(60420.0, &soil_at(28.61, 77.21));

        assert_eq!(designs.recharge_pits.number_recommended, 5);
        assert_eq!(designs.recharge_pits.construction_cost, 150_000.0);
        assert_eq!(designs.recharge_pits.total_recharge_capacity, "60 cubic meters");

        // capped at 50 m
        assert_eq!(designs.recharge_trenches.specifications.total_length, "50 meters");
        assert_eq!(designs.recharge_trenches.total_capacity, "37.5 cubic meters");
        assert_eq!(designs.recharge_trenches.construction_cost, 60_000.0);

        // medium infiltration: no injection well; large runoff: check dam
        assert!(designs.injection_wells.is_none());
        assert!(designs.check_dams.is_some());
    }

    #[test]
    fn test_small_runoff_on_black_soil() {
        let designs = design_recharge_structures(4000.0, &soil_at(19.07, 72.87));

        assert_eq!(designs.recharge_pits.number_recommended, 1);
        assert_eq!(designs.recharge_trenches.specifications.total_length, "8 meters");
        assert_eq!(designs.recharge_trenches.construction_cost, 9_600.0);
        let well = designs.injection_wells.expect("low infiltration gets a well");
        assert_eq!(well.recharge_rate, "3200 liters annually");
        assert!(designs.check_dams.is_none());
    }

    #[test]
    fn test_zero_runoff_still_recommends_one_pit() {
        let designs = design_recharge_structures(0.0, &soil_at(12.97, 77.59));
        assert_eq!(designs.recharge_pits.number_recommended, 1);
        assert_eq!(designs.recharge_trenches.construction_cost, 0.0);
    }
}
