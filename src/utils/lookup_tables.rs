//! Static Lookup Tables
//!
//! Read-only coefficients, prices and reference profiles consumed by the
//! calculation engine. Nothing in here carries logic beyond key lookup.
//!
//! Tables:
//! - Runoff coefficient by roof material
//! - Collection efficiency by system tier
//! - Cost rates (INR) and municipal water price by region type
//! - Reference cities: coordinates + long-term rainfall profile
//! - Soil class descriptions
//! - Principal aquifer zones

use serde::Serialize;

use crate::types::{RegionType, RoofMaterial, SoilType, SystemTier};

// ============================================================================
// Conversion factors
// ============================================================================

/// Square feet → square meters.
pub const SQFT_TO_SQM: f64 = 0.092903;

// ============================================================================
// Runoff + collection efficiency
// ============================================================================

/// Runoff coefficient used when the roof material is not in the table.
pub const DEFAULT_RUNOFF_COEFFICIENT: f64 = 0.75;

/// Collection efficiency used when the system tier is not in the table.
pub const DEFAULT_COLLECTION_EFFICIENCY: f64 = 0.80;

/// Fraction of rainfall on the roof that becomes collectible runoff.
pub fn runoff_coefficient(material: RoofMaterial) -> f64 {
    match material {
        RoofMaterial::Concrete => 0.85,
        RoofMaterial::Metal => 0.90,
        RoofMaterial::Tile => 0.75,
        RoofMaterial::Asbestos => 0.80,
        RoofMaterial::Thatch => 0.60,
        RoofMaterial::Other => 0.70,
        RoofMaterial::Unknown => DEFAULT_RUNOFF_COEFFICIENT,
    }
}

/// Fraction of generated runoff actually captured by the system.
pub fn collection_efficiency(tier: SystemTier) -> f64 {
    match tier {
        SystemTier::Advanced => 0.90,
        SystemTier::Standard => 0.80,
        SystemTier::Basic => 0.70,
        SystemTier::Unknown => DEFAULT_COLLECTION_EFFICIENCY,
    }
}

// ============================================================================
// Cost rates (INR)
// ============================================================================

pub const TANK_COST_PER_LITER: f64 = 85.0;
pub const FILTRATION_BASIC: f64 = 25_000.0;
pub const FILTRATION_ADVANCED: f64 = 40_000.0;
pub const PUMP_HALF_HP: f64 = 12_000.0;
pub const PUMP_ONE_HP: f64 = 18_000.0;
pub const INSTALLATION_BASE: f64 = 20_000.0;
pub const CONTINGENCY_FACTOR: f64 = 0.10;

/// Water price used when the region type is not in the table (INR / 1000 L).
pub const DEFAULT_WATER_RATE: f64 = 12.0;

/// Municipal water price in INR per 1000 liters.
pub fn water_rate(region: RegionType) -> f64 {
    match region {
        RegionType::Urban => 15.0,
        RegionType::Suburban => 12.0,
        RegionType::Rural => 8.0,
        RegionType::Unknown => DEFAULT_WATER_RATE,
    }
}

// ============================================================================
// Reference cities
// ============================================================================

/// A reference city with its long-term rainfall profile.
#[derive(Debug, Clone)]
pub struct CityProfile {
    pub key: &'static str,
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub annual_mm: f64,
    /// Percent of annual rainfall per month, `jan`..`dec`.
    pub distribution: [f64; 12],
}

/// Reference cities in their fixed search order.
pub static CITIES: &[CityProfile] = &[
    CityProfile {
        key: "mumbai", name: "Mumbai", latitude: 19.0760, longitude: 72.8777, annual_mm: 2200.0,
        distribution: [0.1, 0.1, 0.3, 0.5, 1.8, 18.5, 28.2, 26.8, 16.4, 4.1, 1.3, 0.2],
    },
    CityProfile {
        key: "delhi", name: "Delhi", latitude: 28.6139, longitude: 77.2090, annual_mm: 797.0,
        distribution: [2.1, 2.5, 4.2, 3.7, 6.2, 18.6, 44.7, 39.2, 22.6, 9.2, 3.2, 1.9],
    },
    CityProfile {
        key: "bangalore", name: "Bangalore", latitude: 12.9716, longitude: 77.5946, annual_mm: 970.0,
        distribution: [0.3, 0.5, 2.1, 4.8, 9.2, 8.4, 9.6, 11.2, 16.8, 18.7, 5.2, 0.8],
    },
    CityProfile {
        key: "chennai", name: "Chennai", latitude: 13.0827, longitude: 80.2707, annual_mm: 1400.0,
        distribution: [1.8, 0.7, 1.1, 2.3, 4.2, 4.8, 7.2, 9.6, 11.2, 24.3, 28.6, 12.1],
    },
    CityProfile {
        key: "kolkata", name: "Kolkata", latitude: 22.5726, longitude: 88.3639, annual_mm: 1582.0,
        distribution: [0.9, 1.8, 2.1, 3.4, 7.2, 19.8, 26.4, 25.6, 18.9, 7.8, 1.2, 0.3],
    },
    CityProfile {
        key: "hyderabad", name: "Hyderabad", latitude: 17.3850, longitude: 78.4867, annual_mm: 812.0,
        distribution: [0.6, 1.2, 1.8, 2.4, 4.2, 11.2, 16.8, 17.4, 18.2, 12.6, 2.1, 0.8],
    },
    CityProfile {
        key: "pune", name: "Pune", latitude: 18.5204, longitude: 73.8567, annual_mm: 722.0,
        distribution: [0.2, 0.3, 0.8, 1.2, 2.1, 16.8, 26.4, 24.2, 15.6, 6.2, 1.8, 0.4],
    },
    CityProfile {
        key: "ahmedabad", name: "Ahmedabad", latitude: 23.0225, longitude: 72.5714, annual_mm: 803.0,
        distribution: [0.3, 0.2, 0.6, 0.8, 1.2, 13.4, 28.6, 26.8, 14.2, 2.4, 0.8, 0.2],
    },
    CityProfile {
        key: "jaipur", name: "Jaipur", latitude: 26.9124, longitude: 75.7873, annual_mm: 650.0,
        distribution: [1.8, 1.2, 2.1, 2.8, 4.2, 16.2, 32.4, 28.6, 18.4, 3.8, 1.2, 0.8],
    },
    CityProfile {
        key: "kochi", name: "Kochi", latitude: 9.9312, longitude: 76.2673, annual_mm: 3055.0,
        distribution: [0.8, 1.2, 2.4, 4.8, 12.6, 21.4, 22.8, 18.4, 11.2, 10.8, 5.2, 1.8],
    },
];

/// City used when no nearer reference exists.
pub const DEFAULT_CITY_KEY: &str = "delhi";

/// Look up a reference city by key.
pub fn city_by_key(key: &str) -> Option<&'static CityProfile> {
    CITIES.iter().find(|c| c.key == key)
}

// ============================================================================
// Soil classes
// ============================================================================

/// Descriptive properties of a soil class.
#[derive(Debug, Clone, Copy)]
pub struct SoilProperties {
    pub infiltration_rate: &'static str,
    pub recharge_suitability: &'static str,
    pub aquifer_prospects: &'static str,
}

pub fn soil_properties(soil: SoilType) -> SoilProperties {
    match soil {
        SoilType::Alluvial => SoilProperties {
            infiltration_rate: "Medium (5-15 mm/hr)",
            recharge_suitability: "Good for both storage and recharge",
            aquifer_prospects: "Excellent",
        },
        SoilType::Black => SoilProperties {
            infiltration_rate: "Low (1-5 mm/hr)",
            recharge_suitability: "Better for storage systems",
            aquifer_prospects: "Good",
        },
        SoilType::Red => SoilProperties {
            infiltration_rate: "High (15-30 mm/hr)",
            recharge_suitability: "Excellent for recharge",
            aquifer_prospects: "Moderate to Good",
        },
        SoilType::Laterite => SoilProperties {
            infiltration_rate: "Medium-High (10-20 mm/hr)",
            recharge_suitability: "Good for recharge",
            aquifer_prospects: "Moderate",
        },
        SoilType::Desert => SoilProperties {
            infiltration_rate: "Very High (20-50 mm/hr)",
            recharge_suitability: "Excellent for recharge",
            aquifer_prospects: "Poor to Moderate",
        },
        SoilType::Mountain => SoilProperties {
            infiltration_rate: "Variable (5-25 mm/hr)",
            recharge_suitability: "Site-specific assessment needed",
            aquifer_prospects: "Variable",
        },
    }
}

// ============================================================================
// Principal aquifer zones
// ============================================================================

/// Principal aquifer systems of India (coarse regional grouping).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AquiferZone {
    TharDesert,
    IndoGangetic,
    DeccanTrap,
    CrystallineRock,
    BengalBasin,
    HimalayanRock,
}

/// Fixed description of an aquifer zone.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AquiferProfile {
    pub principal_aquifer: &'static str,
    pub aquifer_type: &'static str,
    pub lithology: &'static str,
    pub water_quality: &'static str,
    pub yield_characteristics: &'static str,
    pub sustainability: &'static str,
}

pub fn aquifer_profile(zone: AquiferZone) -> AquiferProfile {
    match zone {
        AquiferZone::TharDesert => AquiferProfile {
            principal_aquifer: "Thar Desert Aquifer System",
            aquifer_type: "Unconfined to semi-confined",
            lithology: "Sand and sandstone with clay lenses",
            water_quality: "Saline to fresh (TDS: 500-5000 mg/L)",
            yield_characteristics: "Low to moderate (5-20 m³/hr)",
            sustainability: "Over-exploited in most areas",
        },
        AquiferZone::IndoGangetic => AquiferProfile {
            principal_aquifer: "Indo-Gangetic Alluvial Aquifer",
            aquifer_type: "Unconfined to confined multi-layered",
            lithology: "Fine to coarse alluvium with clay layers",
            water_quality: "Fresh to brackish (TDS: 200-1500 mg/L)",
            yield_characteristics: "High (20-100 m³/hr)",
            sustainability: "Over-exploited to critical",
        },
        AquiferZone::DeccanTrap => AquiferProfile {
            principal_aquifer: "Deccan Trap Aquifer",
            aquifer_type: "Fractured hard rock",
            lithology: "Basaltic lava flows with vesicular zones",
            water_quality: "Fresh to slightly saline (TDS: 300-2000 mg/L)",
            yield_characteristics: "Moderate (10-50 m³/hr)",
            sustainability: "Semi-critical to critical",
        },
        AquiferZone::CrystallineRock => AquiferProfile {
            principal_aquifer: "Crystalline Rock Aquifer",
            aquifer_type: "Fractured and weathered hard rock",
            lithology: "Granite, gneiss with weathered overburden",
            water_quality: "Fresh (TDS: 200-1000 mg/L)",
            yield_characteristics: "Low to moderate (5-30 m³/hr)",
            sustainability: "Semi-critical to safe",
        },
        AquiferZone::BengalBasin => AquiferProfile {
            principal_aquifer: "Bengal Basin Aquifer",
            aquifer_type: "Multi-layered confined/unconfined",
            lithology: "Quaternary alluvium with clay aquitards",
            water_quality: "Fresh but arsenic contamination risk",
            yield_characteristics: "High (30-150 m³/hr)",
            sustainability: "Safe to semi-critical",
        },
        AquiferZone::HimalayanRock => AquiferProfile {
            principal_aquifer: "Himalayan Rock Aquifer",
            aquifer_type: "Fractured rock with limited storage",
            lithology: "Metamorphic and sedimentary rocks",
            water_quality: "Fresh (TDS: 100-500 mg/L)",
            yield_characteristics: "Low (2-15 m³/hr)",
            sustainability: "Safe but limited availability",
        },
    }
}
