//! Bounding-box classification chains
//!
//! Soil class, groundwater depth, aquifer zone and administrative region are
//! four independent rule chains. Their boxes overlap and differ from chain to
//! chain, so none is derived from another. Within a chain, order matters:
//! the first matching box wins.

use serde::Serialize;

use crate::types::{Coordinate, SoilType};
use crate::utils::lookup_tables::{soil_properties, AquiferZone};

/// Inclusive latitude/longitude box test.
fn within(coord: &Coordinate, lat: (f64, f64), lng: (f64, f64)) -> bool {
    coord.latitude >= lat.0
        && coord.latitude <= lat.1
        && coord.longitude >= lng.0
        && coord.longitude <= lng.1
}

// ============================================================================
// Soil
// ============================================================================

/// Classify the dominant soil class at a coordinate.
pub fn classify_soil(coord: &Coordinate) -> SoilType {
    let (lat, lng) = (coord.latitude, coord.longitude);

    if within(coord, (20.0, 30.0), (68.0, 78.0)) {
        // Thar fringe vs. the Indo-Gangetic plains
        if lng < 74.0 {
            SoilType::Desert
        } else {
            SoilType::Alluvial
        }
    } else if within(coord, (18.0, 25.0), (72.0, 85.0)) {
        SoilType::Black
    } else if within(coord, (8.0, 18.0), (75.0, 80.0)) {
        SoilType::Red
    } else if lat < 18.0 && lng > 75.0 {
        SoilType::Red
    } else if lat > 25.0 && lng > 85.0 {
        SoilType::Alluvial
    } else if lat > 28.0 {
        SoilType::Mountain
    } else {
        SoilType::Alluvial
    }
}

/// Estimated depth to groundwater (descriptive band).
pub fn groundwater_depth(coord: &Coordinate) -> &'static str {
    let (lat, lng) = (coord.latitude, coord.longitude);

    if (20.0..=30.0).contains(&lat) && lng < 75.0 {
        "20-50 meters"
    } else if (18.0..=25.0).contains(&lat) {
        "10-30 meters"
    } else if lat < 18.0 {
        "5-20 meters"
    } else if lng > 85.0 {
        "5-15 meters"
    } else {
        "10-25 meters"
    }
}

/// Soil and groundwater facts for a location.
#[derive(Debug, Clone, Serialize)]
pub struct SoilProfile {
    pub soil_type: SoilType,
    pub infiltration_rate: &'static str,
    pub recharge_suitability: &'static str,
    pub groundwater_depth: &'static str,
    pub aquifer_prospects: &'static str,
}

impl SoilProfile {
    /// Lower-cased soil class name, used by substring-based scoring rules.
    pub fn soil_name(&self) -> String {
        self.soil_type.display_name().to_lowercase()
    }
}

/// Build the soil profile for a coordinate.
pub fn soil_profile(coord: &Coordinate) -> SoilProfile {
    let soil_type = classify_soil(coord);
    let props = soil_properties(soil_type);

    SoilProfile {
        soil_type,
        infiltration_rate: props.infiltration_rate,
        recharge_suitability: props.recharge_suitability,
        groundwater_depth: groundwater_depth(coord),
        aquifer_prospects: props.aquifer_prospects,
    }
}

// ============================================================================
// Aquifer zone
// ============================================================================

/// Principal aquifer zone for a coordinate.
pub fn aquifer_zone(coord: &Coordinate) -> AquiferZone {
    let (lat, lng) = (coord.latitude, coord.longitude);

    if within(coord, (20.0, 30.0), (68.0, 78.0)) {
        if lng < 74.0 {
            AquiferZone::TharDesert
        } else {
            AquiferZone::IndoGangetic
        }
    } else if within(coord, (18.0, 25.0), (72.0, 85.0)) {
        AquiferZone::DeccanTrap
    } else if lat < 18.0 {
        AquiferZone::CrystallineRock
    } else if lng > 85.0 {
        AquiferZone::BengalBasin
    } else {
        AquiferZone::HimalayanRock
    }
}

// ============================================================================
// Administrative region
// ============================================================================

/// Coarse administrative region used for regulatory lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdministrativeRegion {
    pub state: &'static str,
    pub region: &'static str,
}

const METRO_BOXES: &[((f64, f64), (f64, f64), AdministrativeRegion)] = &[
    ((28.4, 28.9), (76.8, 77.3), AdministrativeRegion { state: "Delhi", region: "National Capital Territory" }),
    ((18.9, 19.3), (72.7, 73.0), AdministrativeRegion { state: "Maharashtra", region: "Mumbai Metropolitan" }),
    ((12.8, 13.1), (77.4, 77.8), AdministrativeRegion { state: "Karnataka", region: "Bangalore Urban" }),
    ((22.4, 22.7), (88.2, 88.5), AdministrativeRegion { state: "West Bengal", region: "Kolkata Metropolitan" }),
    ((13.0, 13.2), (80.1, 80.4), AdministrativeRegion { state: "Tamil Nadu", region: "Chennai Metropolitan" }),
];

/// Determine the administrative region (metro box first, then broad band).
pub fn administrative_region(coord: &Coordinate) -> AdministrativeRegion {
    for (lat, lng, region) in METRO_BOXES {
        if within(coord, *lat, *lng) {
            return *region;
        }
    }

    if coord.latitude >= 28.0 {
        AdministrativeRegion { state: "Northern India", region: "Himalayan/Plains" }
    } else if coord.latitude <= 15.0 {
        AdministrativeRegion { state: "Southern India", region: "Peninsular" }
    } else {
        AdministrativeRegion { state: "Central India", region: "Deccan Plateau" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng)
    }

    #[test]
    fn test_soil_chain_order() {
        // Delhi sits in the first box, east of 74°E
        assert_eq!(classify_soil(&at(28.6139, 77.2090)), SoilType::Alluvial);
        // Ahmedabad: first box, west of 74°E
        assert_eq!(classify_soil(&at(23.0225, 72.5714)), SoilType::Desert);
        // Mumbai: lat 19 is outside the first box, inside the Deccan box
        assert_eq!(classify_soil(&at(19.0760, 72.8777)), SoilType::Black);
        // Bangalore: red soil box
        assert_eq!(classify_soil(&at(12.9716, 77.5946)), SoilType::Red);
        // Chennai: east of the red box, caught by the lat<18 && lng>75 rule
        assert_eq!(classify_soil(&at(13.0827, 80.2707)), SoilType::Red);
        // Kolkata: east of the Deccan box and south of 25°N, so the catch-all
        assert_eq!(classify_soil(&at(22.5726, 88.3639)), SoilType::Alluvial);
        // Srinagar: north of everything
        assert_eq!(classify_soil(&at(34.0837, 74.7973)), SoilType::Mountain);
        // Far west coast south of 18°N and west of 75°E falls through
        assert_eq!(classify_soil(&at(15.0, 73.9)), SoilType::Alluvial);
    }

    #[test]
    fn test_soil_box_boundaries_are_inclusive() {
        assert_eq!(classify_soil(&at(20.0, 68.0)), SoilType::Desert);
        assert_eq!(classify_soil(&at(30.0, 78.0)), SoilType::Alluvial);
        assert_eq!(classify_soil(&at(20.0, 74.0)), SoilType::Alluvial);
    }

    #[test]
    fn test_groundwater_depth_chain() {
        assert_eq!(groundwater_depth(&at(26.9, 72.0)), "20-50 meters");
        assert_eq!(groundwater_depth(&at(19.07, 72.87)), "10-30 meters");
        assert_eq!(groundwater_depth(&at(12.97, 77.59)), "5-20 meters");
        assert_eq!(groundwater_depth(&at(26.0, 91.7)), "5-15 meters");
        assert_eq!(groundwater_depth(&at(32.0, 77.0)), "10-25 meters");
    }

    #[test]
    fn test_soil_profile_text() {
        let profile = soil_profile(&at(12.9716, 77.5946));
        assert_eq!(profile.soil_type, SoilType::Red);
        assert_eq!(profile.infiltration_rate, "High (15-30 mm/hr)");
        assert_eq!(profile.recharge_suitability, "Excellent for recharge");
        assert_eq!(profile.aquifer_prospects, "Moderate to Good");
        assert_eq!(profile.groundwater_depth, "5-20 meters");
        assert_eq!(profile.soil_name(), "red");
    }

    #[test]
    fn test_aquifer_zone_chain() {
        assert_eq!(aquifer_zone(&at(26.9, 72.0)), AquiferZone::TharDesert);
        assert_eq!(aquifer_zone(&at(28.6, 77.2)), AquiferZone::IndoGangetic);
        assert_eq!(aquifer_zone(&at(19.07, 72.87)), AquiferZone::DeccanTrap);
        assert_eq!(aquifer_zone(&at(12.97, 77.59)), AquiferZone::CrystallineRock);
        assert_eq!(aquifer_zone(&at(22.57, 88.36)), AquiferZone::BengalBasin);
        assert_eq!(aquifer_zone(&at(32.0, 77.0)), AquiferZone::HimalayanRock);
    }

    #[test]
    fn test_administrative_region() {
        assert_eq!(administrative_region(&at(28.6139, 77.2090)).state, "Delhi");
        assert_eq!(administrative_region(&at(19.0760, 72.8777)).region, "Mumbai Metropolitan");
        assert_eq!(administrative_region(&at(12.9716, 77.5946)).state, "Karnataka");
        assert_eq!(administrative_region(&at(22.5726, 88.3639)).state, "West Bengal");
        assert_eq!(administrative_region(&at(13.0827, 80.2707)).state, "Tamil Nadu");
        assert_eq!(administrative_region(&at(30.7, 76.7)).state, "Northern India");
        assert_eq!(administrative_region(&at(9.93, 76.27)).state, "Southern India");
        assert_eq!(administrative_region(&at(17.38, 78.48)).state, "Central India");
    }
}
