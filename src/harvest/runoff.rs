//! Runoff generation capacity of the roof
//!
//! Gross runoff before collection losses: roof area × rainfall × runoff
//! coefficient, per month. The collection-efficiency factor is reported
//! alongside but not applied.

use serde::Serialize;

use crate::rainfall::RainfallProfile;
use crate::types::{Month, MonthlyValues, RoofMaterial};
use crate::utils::lookup_tables::{runoff_coefficient, SQFT_TO_SQM};
use crate::utils::{round_to, round_whole};

/// Share of the peak month's runoff assumed to fall on its wettest day.
const PEAK_DAY_FRACTION: f64 = 0.20;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyRunoff {
    pub rainfall_mm: f64,
    pub runoff_volume_liters: f64,
    pub runoff_volume_cubic_meters: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnnualRunoff {
    pub total_liters: f64,
    pub total_cubic_meters: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeakRunoff {
    pub peak_month: Month,
    pub peak_monthly_liters: f64,
    pub estimated_peak_daily_liters: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunoffCharacteristics {
    pub collection_efficiency_factor: f64,
    pub first_flush_diversion: &'static str,
    pub quality_parameters: &'static str,
}

/// Runoff section of the report.
#[derive(Debug, Clone, Serialize)]
pub struct RunoffCapacity {
    pub roof_area_sqm: f64,
    pub runoff_coefficient: f64,
    pub annual_runoff_capacity: AnnualRunoff,
    pub monthly_runoff_details: MonthlyValues<MonthlyRunoff>,
    pub peak_runoff: PeakRunoff,
    pub runoff_characteristics: RunoffCharacteristics,
}

pub fn runoff_capacity(
    roof_area_sqft: f64,
    rainfall: &RainfallProfile,
    material: RoofMaterial,
) -> RunoffCapacity {
    let coefficient = runoff_coefficient(material);
    let roof_area_sqm = roof_area_sqft * SQFT_TO_SQM;

    // unrounded cubic meters per month, summed before rounding
    let volumes = rainfall.monthly_distribution.map(|_, share| {
        let rainfall_mm = rainfall.annual_mm * share / 100.0;
        (rainfall_mm, roof_area_sqm * rainfall_mm * coefficient / 1000.0)
    });
    let total_m3: f64 = volumes.0.iter().map(|(_, m3)| m3).sum();

    let monthly_runoff_details = volumes.map(|_, (rainfall_mm, m3)| MonthlyRunoff {
        rainfall_mm: round_to(rainfall_mm, 1),
        runoff_volume_liters: round_whole(m3 * 1000.0),
        runoff_volume_cubic_meters: round_to(m3, 2),
    });

    let (peak_month, _) = rainfall.monthly_distribution.peak();
    let peak_monthly_liters = monthly_runoff_details.get(peak_month).runoff_volume_liters;

    RunoffCapacity {
        roof_area_sqm: round_to(roof_area_sqm, 2),
        runoff_coefficient: coefficient,
        annual_runoff_capacity: AnnualRunoff {
            total_liters: round_whole(total_m3 * 1000.0),
            total_cubic_meters: round_to(total_m3, 2),
        },
        monthly_runoff_details,
        peak_runoff: PeakRunoff {
            peak_month,
            peak_monthly_liters,
            estimated_peak_daily_liters: round_whole(peak_monthly_liters * PEAK_DAY_FRACTION),
        },
        runoff_characteristics: RunoffCharacteristics {
            collection_efficiency_factor: 0.85,
            first_flush_diversion: "2-3mm rainfall (initial runoff to be discarded)",
            quality_parameters: "Good for non-potable uses after basic filtration",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::lookup_tables::city_by_key;
    use approx::assert_relative_eq;

    fn mumbai() -> RainfallProfile {
        RainfallProfile::from_city(city_by_key("mumbai").unwrap())
    }

    #[test]
    fn test_mumbai_peak_is_july() {
        let capacity = runoff_capacity(1000.0, &mumbai(), RoofMaterial::Concrete);

        assert_eq!(capacity.peak_runoff.peak_month, Month::Jul);
        assert_eq!(capacity.roof_area_sqm, 92.9);
        assert_eq!(capacity.runoff_coefficient, 0.85);

        // 2200 × 0.282 = 620.4 mm in July
        let july = capacity.monthly_runoff_details.get(Month::Jul);
        assert_relative_eq!(july.rainfall_mm, 620.4);
        // 92.903 × 620.4 × 0.85 = 48991.4 L
        assert_eq!(july.runoff_volume_liters, 48991.0);
        assert_relative_eq!(july.runoff_volume_cubic_meters, 48.99);
        assert_eq!(capacity.peak_runoff.peak_monthly_liters, 48991.0);
        assert_eq!(capacity.peak_runoff.estimated_peak_daily_liters, 9798.0);
    }

    #[test]
    fn test_annual_total_sums_unrounded_months() {
        let capacity = runoff_capacity(1000.0, &mumbai(), RoofMaterial::Metal);
        let summed: f64 = capacity
            .monthly_runoff_details
            .0
            .iter()
            .map(|m| m.runoff_volume_cubic_meters)
            .sum();
        assert_relative_eq!(capacity.annual_runoff_capacity.total_cubic_meters, summed, epsilon = 0.05);
    }

    #[test]
    fn test_flat_distribution_peaks_in_january() {
        let profile = RainfallProfile {
            annual_mm: 600.0,
            monthly_distribution: MonthlyValues([10.0; 12]),
        };
        let capacity = runoff_capacity(500.0, &profile, RoofMaterial::Tile);
        assert_eq!(capacity.peak_runoff.peak_month, Month::Jan);
    }
}
