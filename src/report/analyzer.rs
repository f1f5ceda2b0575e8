//! Analyzer - main coordinator for one rainwater-harvesting analysis
//!
//! Order of work:
//! 1. resolve rainfall (the only async step, never fails)
//! 2. classify the site (soil, region, aquifer)
//! 3. feasibility, harvest, runoff, structures
//! 4. cost on the optimal tank, financials, cost-benefit
//! 5. descriptive sections
//!
//! [`build_report`] is pure: identical input and rainfall give an identical
//! report. Clock-derived fields belong to the HTTP envelope.

use serde::Serialize;
use tracing::{debug, info};

use super::climate::{analyze_rainfall, RainfallAnalysis};
use super::plans::{
    environmental_impact, implementation_plan, maintenance_schedule, performance_monitoring,
    EnvironmentalImpact, ImplementationPlan, MaintenanceSchedule, PerformanceMonitoring,
};
use super::regulatory::{regulatory_info, RegulatoryInfo};
use super::soil::{
    collection_efficiency_breakdown, groundwater_and_aquifer, soil_and_geology, CollectionEfficiency,
    GroundwaterAndAquifer, SoilAndGeology,
};
use crate::error::AnalysisError;
use crate::feasibility::{feasibility_score, recommend_system, FeasibilityScore, SystemRecommendations};
use crate::finance::{
    calculate_financials, calculate_system_cost, cost_benefit_analysis, recharge_benefit_value,
    CostBenefitAnalysis, CostBreakdown, FinancialResult,
};
use crate::geo::{administrative_region, soil_profile, AdministrativeRegion};
use crate::harvest::{
    calculate_harvest, design_recharge_structures, runoff_capacity, storage_sizing, suggest_structures,
    RechargeDesigns, RunoffCapacity, StorageSizing, StructureSuggestions,
};
use crate::rainfall::{PrecipitationSource, RainfallResolver, ResolvedRainfall};
use crate::request::AnalysisInput;
use crate::types::{Coordinate, MonthlyValues, RegionType};

#[derive(Debug, Clone, Serialize)]
pub struct LocationSection {
    pub coordinates: Coordinate,
    pub address: String,
    pub region_type: RegionType,
    pub administrative_info: AdministrativeRegion,
}

#[derive(Debug, Clone, Serialize)]
pub struct HarvestingPotential {
    pub roof_area_sqft: f64,
    pub annual_harvestable_liters: f64,
    pub monthly_potential: MonthlyValues<f64>,
    pub storage_recommendations: StorageSizing,
    pub collection_efficiency_achieved: CollectionEfficiency,
}

/// Full analysis report. Field order is the serialized section order.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub location: LocationSection,
    pub feasibility_analysis: FeasibilityScore,
    pub rainfall_data: RainfallAnalysis,
    pub runoff_capacity: RunoffCapacity,
    pub groundwater_and_aquifer: GroundwaterAndAquifer,
    pub soil_and_geology: SoilAndGeology,
    pub harvesting_potential: HarvestingPotential,
    pub suggested_structures: StructureSuggestions,
    pub recharge_structure_designs: RechargeDesigns,
    pub system_recommendations: SystemRecommendations,
    pub cost_estimation: CostBreakdown,
    pub financial_analysis: FinancialResult,
    pub cost_benefit_analysis: CostBenefitAnalysis,
    pub implementation_plan: ImplementationPlan,
    pub maintenance_schedule: MaintenanceSchedule,
    pub regulatory_compliance: RegulatoryInfo,
    pub performance_monitoring: PerformanceMonitoring,
    pub environmental_impact: EnvironmentalImpact,
}

fn ensure_finite(value: f64, what: &'static str) -> Result<(), AnalysisError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AnalysisError::NonFinite(what))
    }
}

/// Build the report for a validated input and already-resolved rainfall.
pub fn build_report(input: &AnalysisInput, rainfall: ResolvedRainfall) -> Result<AnalysisReport, AnalysisError> {
    let coord = &input.coordinate;
    let property = &input.property;
    let tier = input.preferences.system_tier;
    let profile = &rainfall.profile;

    let soil = soil_profile(coord);
    let region = administrative_region(coord);

    let feasibility = feasibility_score(profile.annual_mm, property.roof_area_sqft, &soil, input.household_size);

    let harvest = calculate_harvest(property, tier, profile);
    let annual = harvest.annual_liters;
    ensure_finite(annual, "annual harvest")?;

    let runoff = runoff_capacity(property.roof_area_sqft, profile, property.roof_material);
    let storage = storage_sizing(&harvest.monthly_liters).ok_or(AnalysisError::NonFinite("storage sizing"))?;

    let cost = calculate_system_cost(storage.optimal_liters, tier);
    ensure_finite(cost.total_cost, "system cost")?;

    let financials = calculate_financials(annual, cost.total_cost, input.preferences.region_type);
    ensure_finite(financials.annual_cost_savings, "annual cost savings")?;

    let cost_benefit = cost_benefit_analysis(
        cost.total_cost,
        annual,
        financials.annual_cost_savings,
        recharge_benefit_value(annual),
    );
    ensure_finite(
        cost_benefit.financial_metrics.net_present_value_20_years,
        "net present value",
    )?;

    debug!(
        annual_harvest = annual,
        optimal_tank = storage.optimal_liters,
        total_cost = cost.total_cost,
        score = feasibility.total_score,
        "Core figures computed"
    );

    Ok(AnalysisReport {
        location: LocationSection {
            coordinates: *coord,
            address: input.address.clone(),
            region_type: input.preferences.region_type,
            administrative_info: region,
        },
        rainfall_data: analyze_rainfall(&rainfall),
        groundwater_and_aquifer: groundwater_and_aquifer(coord, &soil),
        soil_and_geology: soil_and_geology(&soil),
        harvesting_potential: HarvestingPotential {
            roof_area_sqft: property.roof_area_sqft,
            annual_harvestable_liters: annual,
            monthly_potential: harvest.monthly_liters,
            storage_recommendations: storage,
            collection_efficiency_achieved: collection_efficiency_breakdown(property.roof_material, tier),
        },
        suggested_structures: suggest_structures(annual, &soil),
        recharge_structure_designs: design_recharge_structures(annual, &soil),
        system_recommendations: recommend_system(&feasibility, &storage, &cost, &soil),
        implementation_plan: implementation_plan(cost.total_cost),
        maintenance_schedule: maintenance_schedule(),
        regulatory_compliance: regulatory_info(&region),
        performance_monitoring: performance_monitoring(),
        environmental_impact: environmental_impact(annual),
        feasibility_analysis: feasibility,
        runoff_capacity: runoff,
        cost_estimation: cost,
        financial_analysis: financials,
        cost_benefit_analysis: cost_benefit,
    })
}

/// Runs the full pipeline against a rainfall source.
pub struct Analyzer<S> {
    resolver: RainfallResolver<S>,
}

impl<S: PrecipitationSource> Analyzer<S> {
    pub fn new(source: S) -> Self {
        Self {
            resolver: RainfallResolver::new(source),
        }
    }

    pub fn resolver(&self) -> &RainfallResolver<S> {
        &self.resolver
    }

    pub async fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisReport, AnalysisError> {
        info!(
            lat = input.coordinate.latitude,
            lng = input.coordinate.longitude,
            roof_area_sqft = input.property.roof_area_sqft,
            "Analysis requested"
        );
        let rainfall = self.resolver.resolve(&input.coordinate).await;
        build_report(input, rainfall)
    }
}
