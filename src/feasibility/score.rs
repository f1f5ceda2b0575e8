//! Four-axis feasibility score
//!
//! Each axis scores 5-25 (water demand bottoms out at 10), total 20-100.
//!
//! | Axis | 25 | 20 | 15 | 10 | 5 |
//! |---|---|---|---|---|---|
//! | Rainfall (mm/yr) | ≥1000 | ≥750 | ≥500 | ≥300 | below |
//! | Roof area (sqft) | ≥1500 | ≥1000 | ≥600 | ≥300 | below |
//! | Demand (L/month) | ≤10000 | ≤20000 | ≤30000 | above | - |
//!
//! Soil: alluvial 25, red 20, laterite 18, black 15, anything else 12.

use serde::Serialize;

use crate::geo::SoilProfile;

/// Liters per person per day.
pub const PER_CAPITA_DAILY_LITERS: f64 = 150.0;
pub const DAYS_PER_MONTH: f64 = 30.0;
pub const MAX_SCORE: u32 = 100;

/// Feasibility band, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FeasibilityLevel {
    HighlyFeasible,
    Feasible,
    ModeratelyFeasible,
    LowFeasibility,
    NotFeasible,
}

impl FeasibilityLevel {
    pub fn from_score(total: u32) -> Self {
        match total {
            80.. => FeasibilityLevel::HighlyFeasible,
            65..=79 => FeasibilityLevel::Feasible,
            50..=64 => FeasibilityLevel::ModeratelyFeasible,
            35..=49 => FeasibilityLevel::LowFeasibility,
            _ => FeasibilityLevel::NotFeasible,
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            FeasibilityLevel::HighlyFeasible => "Highly Feasible",
            FeasibilityLevel::Feasible => "Feasible",
            FeasibilityLevel::ModeratelyFeasible => "Moderately Feasible",
            FeasibilityLevel::LowFeasibility => "Low Feasibility",
            FeasibilityLevel::NotFeasible => "Not Feasible",
        }
    }

    /// Fixed advisory sentence for the band.
    pub fn advisory(&self) -> &'static str {
        match self {
            FeasibilityLevel::HighlyFeasible => "Excellent conditions for RTRWH implementation",
            FeasibilityLevel::Feasible => "Good conditions with minor considerations",
            FeasibilityLevel::ModeratelyFeasible => "Feasible with proper planning and design",
            FeasibilityLevel::LowFeasibility => "Consider alternative water sources or hybrid systems",
            FeasibilityLevel::NotFeasible => "RTRWH not recommended for this location",
        }
    }
}

impl Serialize for FeasibilityLevel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_text())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub rainfall: u32,
    pub roof_area: u32,
    pub soil_suitability: u32,
    pub water_demand: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.rainfall + self.roof_area + self.soil_suitability + self.water_demand
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeasibilityScore {
    pub total_score: u32,
    pub max_score: u32,
    pub score_breakdown: ScoreBreakdown,
    pub feasibility_level: FeasibilityLevel,
    pub recommendation: &'static str,
}

fn rainfall_score(annual_mm: f64) -> u32 {
    if annual_mm >= 1000.0 {
        25
    } else if annual_mm >= 750.0 {
        20
    } else if annual_mm >= 500.0 {
        15
    } else if annual_mm >= 300.0 {
        10
    } else {
        5
    }
}

fn roof_area_score(roof_area_sqft: f64) -> u32 {
    if roof_area_sqft >= 1500.0 {
        25
    } else if roof_area_sqft >= 1000.0 {
        20
    } else if roof_area_sqft >= 600.0 {
        15
    } else if roof_area_sqft >= 300.0 {
        10
    } else {
        5
    }
}

fn soil_score(soil_name: &str) -> u32 {
    if soil_name.contains("alluvial") {
        25
    } else if soil_name.contains("red") {
        20
    } else if soil_name.contains("laterite") {
        18
    } else if soil_name.contains("black") {
        15
    } else {
        12
    }
}

/// Monthly household demand in liters.
pub fn monthly_demand_liters(household_size: u32) -> f64 {
    household_size as f64 * PER_CAPITA_DAILY_LITERS * DAYS_PER_MONTH
}

fn demand_score(monthly_liters: f64) -> u32 {
    if monthly_liters <= 10_000.0 {
        25
    } else if monthly_liters <= 20_000.0 {
        20
    } else if monthly_liters <= 30_000.0 {
        15
    } else {
        10
    }
}

/// Score a site on rainfall, roof area, soil and household demand.
pub fn feasibility_score(
    annual_rainfall_mm: f64,
    roof_area_sqft: f64,
    soil: &SoilProfile,
    household_size: u32,
) -> FeasibilityScore {
    let score_breakdown = ScoreBreakdown {
        rainfall: rainfall_score(annual_rainfall_mm),
        roof_area: roof_area_score(roof_area_sqft),
        soil_suitability: soil_score(&soil.soil_name()),
        water_demand: demand_score(monthly_demand_liters(household_size)),
    };
    let total_score = score_breakdown.total();
    let level = FeasibilityLevel::from_score(total_score);

    FeasibilityScore {
        total_score,
        max_score: MAX_SCORE,
        score_breakdown,
        feasibility_level: level,
        recommendation: level.advisory(),
    }
}
