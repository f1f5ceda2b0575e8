//! Rooftop Rainwater Harvesting Analysis Engine
//!
//! Given a coordinate in India, a roof and a household, produces a full
//! rooftop rainwater-harvesting report: feasibility, harvest volume, storage
//! sizing, recharge structures, costs, payback and implementation guidance.
//!
//! Module layout follows the pipeline:
//! - `geo/`: coordinate → city, soil, groundwater, aquifer, region
//! - `rainfall/`: live archive lookup with nearest-city fallback
//! - `harvest/`: harvest volume, runoff, storage sizing, structures
//! - `finance/`: capital cost, financial projection, cost-benefit
//! - `feasibility/`: 4-axis score and system recommendation
//! - `report/`: section builders and the `Analyzer` coordinator
//! - `request`: wire contract + validation
//! - `api_server`: axum HTTP surface (feature `api`)

pub mod config;
pub mod error;
pub mod feasibility;
pub mod finance;
pub mod geo;
pub mod harvest;
pub mod rainfall;
pub mod report;
pub mod request;
pub mod types;
pub mod utils;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use config::{RainfallConfig, ServiceConfig};
pub use error::AnalysisError;
pub use rainfall::{
    DailyPrecipitation, OpenMeteoClient, PrecipitationSource, RainfallError, RainfallOrigin,
    RainfallProfile, ResolvedRainfall,
};
pub use report::{build_report, AnalysisReport, Analyzer};
pub use request::{AnalysisInput, AnalysisRequest, FormRequest, RequestError};
pub use types::{Coordinate, Month, MonthlyValues, RegionType, RoofMaterial, SystemTier};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
