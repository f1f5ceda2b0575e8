//! Soil, geology and aquifer sections
//!
//! Text rules match on the lower-cased soil name and infiltration text, the
//! same substring convention used by the structure designer.

use serde::Serialize;

use crate::geo::{aquifer_zone, SoilProfile};
use crate::types::{Coordinate, RoofMaterial, SystemTier};
use crate::utils::lookup_tables::{aquifer_profile, collection_efficiency, runoff_coefficient, AquiferProfile};
use crate::utils::round_to;

// ============================================================================
// Recharge suitability
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SuitabilityGrade {
    Excellent,
    Good,
    Moderate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RechargeSuitability {
    pub overall_suitability: SuitabilityGrade,
    pub recommended_methods: Vec<&'static str>,
    pub limitations: &'static str,
    pub enhancement_options: Vec<&'static str>,
}

fn enhancement_options(soil_name: &str) -> Vec<&'static str> {
    if soil_name.contains("black") {
        vec!["Add sand/gravel layers", "Create drainage channels", "Use injection wells"]
    } else {
        vec!["Standard filter media", "Regular de-silting", "Vegetation management"]
    }
}

pub fn recharge_suitability(soil: &SoilProfile) -> RechargeSuitability {
    let infiltration = soil.infiltration_rate.to_lowercase();
    let excellent = soil.recharge_suitability.to_lowercase().contains("excellent");

    let (grade, methods, limitations) = if infiltration.contains("high") || excellent {
        (
            SuitabilityGrade::Excellent,
            vec!["Recharge pits", "Percolation tanks", "Trenches"],
            "Minimal - regular maintenance needed",
        )
    } else if infiltration.contains("medium") {
        (
            SuitabilityGrade::Good,
            vec!["Recharge trenches", "Modified pits", "Injection wells"],
            "May need filter media enhancement",
        )
    } else {
        (
            SuitabilityGrade::Moderate,
            vec!["Injection wells", "Deep recharge shafts"],
            "Requires specialized design for low permeability",
        )
    };

    RechargeSuitability {
        overall_suitability: grade,
        recommended_methods: methods,
        limitations,
        enhancement_options: enhancement_options(&soil.soil_name()),
    }
}

pub fn recommended_approach(soil: &SoilProfile) -> &'static str {
    let infiltration = soil.infiltration_rate.to_lowercase();
    if infiltration.contains("high") {
        "Primary focus on artificial recharge with supplementary storage"
    } else if infiltration.contains("medium") {
        "Balanced approach - combine storage and recharge systems"
    } else {
        "Storage-focused approach with limited recharge options"
    }
}

/// Soil & geology section: the soil profile plus recharge guidance.
#[derive(Debug, Clone, Serialize)]
pub struct SoilAndGeology {
    #[serde(flatten)]
    pub profile: SoilProfile,
    pub suitability_for_recharge: RechargeSuitability,
    pub recommended_approach: &'static str,
}

pub fn soil_and_geology(soil: &SoilProfile) -> SoilAndGeology {
    SoilAndGeology {
        profile: soil.clone(),
        suitability_for_recharge: recharge_suitability(soil),
        recommended_approach: recommended_approach(soil),
    }
}

// ============================================================================
// Aquifer
// ============================================================================

pub fn recharge_potential(soil_name: &str) -> &'static str {
    if soil_name.contains("alluvial") {
        "High - Good connectivity with surface"
    } else if soil_name.contains("black") {
        "Moderate - Limited vertical percolation"
    } else if soil_name.contains("red") {
        "High - Good infiltration capacity"
    } else {
        "Variable - Site-specific assessment needed"
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AquiferInfo {
    #[serde(flatten)]
    pub profile: AquiferProfile,
    pub recharge_potential: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroundwaterAndAquifer {
    pub depth_to_groundwater: &'static str,
    pub aquifer_prospects: &'static str,
    pub principal_aquifer_info: AquiferInfo,
    pub recharge_potential: &'static str,
}

pub fn groundwater_and_aquifer(coord: &Coordinate, soil: &SoilProfile) -> GroundwaterAndAquifer {
    let potential = recharge_potential(&soil.soil_name());
    GroundwaterAndAquifer {
        depth_to_groundwater: soil.groundwater_depth,
        aquifer_prospects: soil.aquifer_prospects,
        principal_aquifer_info: AquiferInfo {
            profile: aquifer_profile(aquifer_zone(coord)),
            recharge_potential: potential,
        },
        recharge_potential: potential,
    }
}

// ============================================================================
// Collection efficiency
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct EfficiencyFactors {
    pub first_flush_loss: &'static str,
    pub gutter_overflow: &'static str,
    pub evaporation_loss: &'static str,
    pub filtration_loss: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionEfficiency {
    pub roof_material_coefficient: f64,
    pub system_efficiency: f64,
    pub overall_collection_efficiency: f64,
    pub efficiency_factors: EfficiencyFactors,
}

pub fn collection_efficiency_breakdown(material: RoofMaterial, tier: SystemTier) -> CollectionEfficiency {
    let roof = runoff_coefficient(material);
    let system = collection_efficiency(tier);
    CollectionEfficiency {
        roof_material_coefficient: roof,
        system_efficiency: system,
        overall_collection_efficiency: round_to(roof * system, 2),
        efficiency_factors: EfficiencyFactors {
            first_flush_loss: "5-10%",
            gutter_overflow: "5-15%",
            evaporation_loss: "2-5%",
            filtration_loss: "5-10%",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::soil_profile;

    fn soil_at(lat: f64, lng: f64) -> SoilProfile {
        soil_profile(&Coordinate::new(lat, lng))
    }

    #[test]
    fn test_recharge_suitability_grades() {
        assert_eq!(recharge_suitability(&soil_at(12.97, 77.59)).overall_suitability, SuitabilityGrade::Excellent);
        assert_eq!(recharge_suitability(&soil_at(28.61, 77.21)).overall_suitability, SuitabilityGrade::Good);
        let black = recharge_suitability(&soil_at(19.07, 72.87));
        assert_eq!(black.overall_suitability, SuitabilityGrade::Moderate);
        assert_eq!(black.enhancement_options[0], "Add sand/gravel layers");
    }

    #[test]
    fn test_recommended_approach() {
        assert_eq!(
            recommended_approach(&soil_at(26.9, 72.0)),
            "Primary focus on artificial recharge with supplementary storage"
        );
        assert_eq!(
            recommended_approach(&soil_at(34.0, 77.0)),
            "Storage-focused approach with limited recharge options"
        );
    }

    #[test]
    fn test_aquifer_section() {
        let coord = Coordinate::new(28.6139, 77.2090);
        let section = groundwater_and_aquifer(&coord, &soil_profile(&coord));
        assert_eq!(section.principal_aquifer_info.profile.principal_aquifer, "Indo-Gangetic Alluvial Aquifer");
        assert_eq!(section.recharge_potential, "High - Good connectivity with surface");

        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["principal_aquifer_info"]["aquifer_type"], "Unconfined to confined multi-layered");
        assert_eq!(json["principal_aquifer_info"]["recharge_potential"], "High - Good connectivity with surface");
    }

    #[test]
    fn test_soil_section_flattens_profile() {
        let json = serde_json::to_value(soil_and_geology(&soil_at(12.97, 77.59))).unwrap();
        assert_eq!(json["soil_type"], "Red");
        assert_eq!(json["suitability_for_recharge"]["overall_suitability"], "Excellent");
    }

    #[test]
    fn test_collection_efficiency() {
        let eff = collection_efficiency_breakdown(RoofMaterial::Concrete, SystemTier::Standard);
        assert_eq!(eff.overall_collection_efficiency, 0.68);
        let eff = collection_efficiency_breakdown(RoofMaterial::Unknown, SystemTier::Unknown);
        assert_eq!(eff.overall_collection_efficiency, 0.6);
    }
}
