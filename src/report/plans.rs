//! Implementation, maintenance, monitoring and environmental sections
//!
//! Mostly fixed guidance text. The only computed figures are the phase
//! budgets (fixed shares of the total cost) and the environmental totals.

use serde::Serialize;

use crate::utils::{round_to, round_whole};

// ============================================================================
// Implementation plan
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ProjectPhase {
    pub phase: u32,
    pub name: &'static str,
    pub duration: &'static str,
    pub activities: Vec<&'static str>,
    pub estimated_cost: f64,
    pub deliverables: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImplementationPlan {
    pub total_duration: &'static str,
    pub project_phases: Vec<ProjectPhase>,
    pub critical_success_factors: Vec<&'static str>,
    pub risk_mitigation: Vec<&'static str>,
}

/// Phase name, duration, share of total cost, activities, deliverables.
type PhaseTemplate = (
    &'static str,
    &'static str,
    f64,
    [&'static str; 4],
    [&'static str; 3],
);

static PHASES: [PhaseTemplate; 5] = [
    (
        "Site Assessment and Design",
        "1-2 weeks",
        0.12,
        [
            "Detailed site survey and soil testing",
            "Structural assessment of roof and foundation",
            "Final system design and engineering drawings",
            "Permit applications and approvals",
        ],
        ["Technical drawings", "Material specifications", "Work permits"],
    ),
    (
        "Material Procurement and Preparation",
        "1 week",
        0.08,
        [
            "Purchase tanks, pipes, and filtration equipment",
            "Quality inspection of materials",
            "Site preparation and temporary arrangements",
            "Contractor mobilization",
        ],
        ["Material delivery", "Site readiness", "Team deployment"],
    ),
    (
        "Primary Installation",
        "2-3 weeks",
        0.55,
        [
            "Excavation and foundation work",
            "Tank installation and positioning",
            "Plumbing network installation",
            "Electrical connections and controls",
        ],
        ["Installed storage system", "Connected plumbing", "Basic testing"],
    ),
    (
        "Filtration and Recharge Systems",
        "1-2 weeks",
        0.15,
        [
            "Filtration system installation",
            "Recharge pit/trench construction",
            "Pump and automation setup",
            "System integration and calibration",
        ],
        ["Complete filtration setup", "Recharge structures", "Automated controls"],
    ),
    (
        "Testing and Commissioning",
        "1 week",
        0.10,
        [
            "Comprehensive system testing",
            "Water quality analysis",
            "Performance optimization",
            "User training and documentation handover",
        ],
        ["Performance report", "Quality certificates", "User manual"],
    ),
];

pub fn implementation_plan(total_cost: f64) -> ImplementationPlan {
    let project_phases = PHASES
        .iter()
        .zip(1u32..)
        .map(|(&(name, duration, share, activities, deliverables), phase)| ProjectPhase {
            phase,
            name,
            duration,
            activities: activities.to_vec(),
            estimated_cost: round_whole(total_cost * share),
            deliverables: deliverables.to_vec(),
        })
        .collect();

    ImplementationPlan {
        total_duration: "6-8 weeks",
        project_phases,
        critical_success_factors: vec![
            "Proper site assessment and soil conditions",
            "Quality materials and skilled installation",
            "Adequate filtration for intended use",
            "Regular maintenance scheduling",
        ],
        risk_mitigation: vec![
            "Weather contingency planning",
            "Material quality assurance",
            "Skilled contractor selection",
            "Regular progress monitoring",
        ],
    }
}

// ============================================================================
// Maintenance schedule
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct RoutineMaintenance {
    pub weekly_during_monsoon: Vec<&'static str>,
    pub monthly_throughout_year: Vec<&'static str>,
    pub quarterly_maintenance: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceCosts {
    pub routine_monthly_cost: &'static str,
    pub quarterly_maintenance: &'static str,
    pub annual_major_service: &'static str,
    pub total_annual_budget: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiyVsProfessional {
    pub diy_tasks: &'static str,
    pub professional_required: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceSchedule {
    pub routine_maintenance: RoutineMaintenance,
    pub annual_major_maintenance: Vec<&'static str>,
    pub cost_estimates: MaintenanceCosts,
    pub diy_vs_professional: DiyVsProfessional,
}

pub fn maintenance_schedule() -> MaintenanceSchedule {
    MaintenanceSchedule {
        routine_maintenance: RoutineMaintenance {
            weekly_during_monsoon: vec![
                "Clean gutters and remove debris",
                "Check first flush diverter operation",
                "Inspect roof surface for damage",
                "Monitor water levels and quality",
            ],
            monthly_throughout_year: vec![
                "Clean mesh filters and leaf guards",
                "Test pump operation and pressure",
                "Check pipe joints for leaks",
                "Inspect storage tank exterior",
            ],
            quarterly_maintenance: vec![
                "Replace/clean filter media",
                "Comprehensive system performance check",
                "Water quality testing (pH, TDS, bacteria)",
                "Electrical connections inspection",
            ],
        },
        annual_major_maintenance: vec![
            "Complete tank cleaning and disinfection",
            "Professional system audit and optimization",
            "Pump servicing and electrical safety check",
            "Structural inspection of all components",
            "Performance evaluation and upgrade recommendations",
        ],
        cost_estimates: MaintenanceCosts {
            routine_monthly_cost: "₹500-800",
            quarterly_maintenance: "₹1,500-2,500",
            annual_major_service: "₹8,000-12,000",
            total_annual_budget: "₹15,000-20,000",
        },
        diy_vs_professional: DiyVsProfessional {
            diy_tasks: "Weekly cleaning, basic inspection, filter replacement",
            professional_required: "Pump servicing, electrical work, tank cleaning, water testing",
        },
    }
}

// ============================================================================
// Performance monitoring
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct KeyPerformanceIndicators {
    pub water_quantity: Vec<&'static str>,
    pub water_quality: Vec<&'static str>,
    pub system_performance: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonitoringSchedule {
    pub daily: Vec<&'static str>,
    pub weekly: Vec<&'static str>,
    pub monthly: Vec<&'static str>,
    pub quarterly: Vec<&'static str>,
    pub annually: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PerformanceTargets {
    pub collection_efficiency: &'static str,
    pub system_uptime: &'static str,
    pub water_quality: &'static str,
    pub cost_savings: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PerformanceMonitoring {
    pub key_performance_indicators: KeyPerformanceIndicators,
    pub monitoring_schedule: MonitoringSchedule,
    pub monitoring_tools: Vec<&'static str>,
    pub performance_targets: PerformanceTargets,
}

pub fn performance_monitoring() -> PerformanceMonitoring {
    PerformanceMonitoring {
        key_performance_indicators: KeyPerformanceIndicators {
            water_quantity: vec![
                "Monthly water harvested (liters)",
                "System efficiency percentage",
                "Storage utilization rate",
                "Overflow frequency and volume",
            ],
            water_quality: vec![
                "pH levels (6.5-8.5 range)",
                "Turbidity (< 5 NTU)",
                "Total dissolved solids",
                "Bacterial contamination levels",
            ],
            system_performance: vec![
                "Pump operational hours",
                "Filter replacement frequency",
                "Energy consumption",
                "Maintenance cost per month",
            ],
        },
        monitoring_schedule: MonitoringSchedule {
            daily: vec!["Visual inspection", "Basic system checks"],
            weekly: vec!["Water level monitoring", "Quality assessment"],
            monthly: vec!["Performance data analysis", "Preventive maintenance"],
            quarterly: vec!["Comprehensive system audit", "Water quality testing"],
            annually: vec!["System upgrade assessment", "Cost-benefit review"],
        },
        monitoring_tools: vec![
            "Water level sensors with alerts",
            "Flow meters for harvest measurement",
            "Basic water quality test kits",
            "Mobile app for data logging",
        ],
        performance_targets: PerformanceTargets {
            collection_efficiency: ">75% of theoretical potential",
            system_uptime: ">95% during monsoon season",
            water_quality: "Meet IS 10500 standards for intended use",
            cost_savings: "Achieve projected savings within 10% variance",
        },
    }
}

// ============================================================================
// Environmental impact
// ============================================================================

/// Grams of CO₂ avoided per harvested liter, expressed in kg.
const CO2_KG_PER_LITER: f64 = 0.006;
const RECHARGE_FRACTION: f64 = 0.3;

#[derive(Debug, Clone, Serialize)]
pub struct GroundwaterRecharge {
    pub annual_recharge_liters: f64,
    pub aquifer_benefit: &'static str,
    pub sustainability_impact: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FloodMitigation {
    pub runoff_reduction_percent: &'static str,
    pub urban_flooding_benefit: &'static str,
    pub erosion_control: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CarbonReduction {
    pub annual_co2_savings_kg: f64,
    pub energy_savings: &'static str,
    pub transport_savings: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PositiveImpacts {
    pub groundwater_recharge: GroundwaterRecharge,
    pub flood_mitigation: FloodMitigation,
    pub carbon_footprint_reduction: CarbonReduction,
}

#[derive(Debug, Clone, Serialize)]
pub struct LongTermSustainability {
    pub water_security_enhancement: &'static str,
    pub climate_resilience_building: &'static str,
    pub community_impact: &'static str,
    pub scalability_potential: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentalImpact {
    pub positive_impacts: PositiveImpacts,
    pub ecosystem_benefits: Vec<&'static str>,
    pub long_term_sustainability: LongTermSustainability,
}

pub fn environmental_impact(annual_harvest_liters: f64) -> EnvironmentalImpact {
    EnvironmentalImpact {
        positive_impacts: PositiveImpacts {
            groundwater_recharge: GroundwaterRecharge {
                annual_recharge_liters: round_whole(annual_harvest_liters * RECHARGE_FRACTION),
                aquifer_benefit: "Enhanced local groundwater levels",
                sustainability_impact: "Reduced pressure on municipal supply",
            },
            flood_mitigation: FloodMitigation {
                runoff_reduction_percent: "60-80%",
                urban_flooding_benefit: "Reduced peak flow in storm drains",
                erosion_control: "Minimized soil erosion from roof runoff",
            },
            carbon_footprint_reduction: CarbonReduction {
                annual_co2_savings_kg: round_to(annual_harvest_liters * CO2_KG_PER_LITER, 1),
                energy_savings: "Reduced pumping for municipal water",
                transport_savings: "Eliminated water tanker dependency",
            },
        },
        ecosystem_benefits: vec![
            "Enhanced local microclimate",
            "Reduced heat island effect",
            "Support for local vegetation",
            "Improved water cycle balance",
        ],
        long_term_sustainability: LongTermSustainability {
            water_security_enhancement: "High",
            climate_resilience_building: "Moderate to High",
            community_impact: "Positive demonstration effect",
            scalability_potential: "High for similar properties",
        },
    }
}
