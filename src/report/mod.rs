//! Report Assembly
//!
//! Combines the geo, rainfall, harvest, finance and feasibility results into
//! one ordered analysis report, plus the descriptive sections built here.
//!
//! ## Architecture
//! - `analyzer.rs` - pipeline orchestration + `AnalysisReport`
//! - `climate.rs` - peak months, seasonal pattern, collection window
//! - `soil.rs` - soil/geology, aquifer and collection-efficiency sections
//! - `regulatory.rs` - state mandates and subsidies
//! - `plans.rs` - implementation, maintenance, monitoring, environment

pub mod analyzer;
pub mod climate;
pub mod plans;
pub mod regulatory;
pub mod soil;

pub use analyzer::{build_report, AnalysisReport, Analyzer, HarvestingPotential, LocationSection};
pub use climate::{analyze_rainfall, PatternType, RainfallAnalysis};
pub use regulatory::{regulatory_info, RegulatoryInfo};
