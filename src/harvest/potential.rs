//! Harvestable volume and storage sizing
//!
//! ```text
//! annual  = round(roof_sqft × 0.092903 × rainfall_mm × runoff × efficiency)
//! month_m = round(annual × share_m / 100)      (independent rounding)
//! peak    = max(month_m)
//! minimum = trunc(max(3000, peak × 0.5))
//! optimal = trunc(peak × 1.3)
//! maximum = trunc(peak × 2.0)
//! ```
//!
//! Monthly values are rounded one by one, so their sum can drift a few
//! liters from the annual figure. The drift is reported as-is.

use serde::Serialize;

use crate::rainfall::RainfallProfile;
use crate::types::{MonthlyValues, PropertyInput, RoofMaterial, SystemTier};
use crate::utils::lookup_tables::{collection_efficiency, runoff_coefficient, SQFT_TO_SQM};
use crate::utils::round_whole;

/// Smallest tank worth recommending, in liters.
pub const MINIMUM_TANK_LITERS: f64 = 3000.0;

/// Annual and monthly harvestable water, in whole liters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HarvestResult {
    pub annual_liters: f64,
    pub monthly_liters: MonthlyValues<f64>,
}

/// Recommended storage tank sizes in liters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StorageSizing {
    pub minimum_liters: u64,
    pub optimal_liters: u64,
    pub maximum_beneficial_liters: u64,
}

/// Annual harvestable water in whole liters.
pub fn annual_harvest_liters(
    roof_area_sqft: f64,
    annual_rainfall_mm: f64,
    material: RoofMaterial,
    tier: SystemTier,
) -> f64 {
    let roof_area_sqm = roof_area_sqft * SQFT_TO_SQM;
    round_whole(
        roof_area_sqm * annual_rainfall_mm * runoff_coefficient(material) * collection_efficiency(tier),
    )
}

/// Spread the annual harvest over the months by rainfall share.
pub fn monthly_potential(annual_liters: f64, distribution: &MonthlyValues<f64>) -> MonthlyValues<f64> {
    distribution.map(|_, share| round_whole(annual_liters * share / 100.0))
}

/// Whole liters, or `None` when the value does not fit a `u64`.
fn whole_liters(liters: f64) -> Option<u64> {
    let whole = liters.trunc();
    (whole.is_finite() && whole >= 0.0 && whole < u64::MAX as f64).then_some(whole as u64)
}

/// Size storage from the peak month's harvest.
///
/// `None` when a size is not representable (non-finite or beyond `u64`).
pub fn storage_sizing(monthly: &MonthlyValues<f64>) -> Option<StorageSizing> {
    let (_, peak) = monthly.peak();
    Some(StorageSizing {
        minimum_liters: whole_liters(MINIMUM_TANK_LITERS.max(peak * 0.5))?,
        optimal_liters: whole_liters(peak * 1.3)?,
        maximum_beneficial_liters: whole_liters(peak * 2.0)?,
    })
}

/// Full harvest calculation for one property.
pub fn calculate_harvest(
    property: &PropertyInput,
    tier: SystemTier,
    rainfall: &RainfallProfile,
) -> HarvestResult {
    let annual_liters = annual_harvest_liters(
        property.roof_area_sqft,
        rainfall.annual_mm,
        property.roof_material,
        tier,
    );
    HarvestResult {
        annual_liters,
        monthly_liters: monthly_potential(annual_liters, &rainfall.monthly_distribution),
    }
}
