//! Rainfall resolution
//!
//! A location's rainfall profile comes from the historical-weather archive
//! when it answers, and from the nearest reference city otherwise. Callers
//! always receive a usable profile; the [`RainfallOrigin`] records which path
//! produced it.

pub mod open_meteo;
pub mod resolver;

use serde::Serialize;

use crate::types::MonthlyValues;
use crate::utils::lookup_tables::CityProfile;

pub use open_meteo::{aggregate_daily, DailyPrecipitation, OpenMeteoClient};
pub use resolver::{PrecipitationSource, RainfallError, RainfallResolver};

/// Annual rainfall and the share of it falling in each month.
///
/// Monthly shares are percentages rounded to one decimal. They are not
/// renormalized, so they need not sum to exactly 100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RainfallProfile {
    pub annual_mm: f64,
    pub monthly_distribution: MonthlyValues<f64>,
}

impl RainfallProfile {
    pub fn from_city(city: &CityProfile) -> Self {
        Self {
            annual_mm: city.annual_mm,
            monthly_distribution: MonthlyValues(city.distribution),
        }
    }
}

/// Where a rainfall profile came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "origin", rename_all = "snake_case")]
pub enum RainfallOrigin {
    /// Aggregated from the live archive response.
    Live,
    /// Static profile of the nearest reference city.
    Fallback { city: String, reason: String },
}

impl RainfallOrigin {
    pub fn is_fallback(&self) -> bool {
        matches!(self, RainfallOrigin::Fallback { .. })
    }
}

/// A rainfall profile plus its provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedRainfall {
    pub profile: RainfallProfile,
    pub origin: RainfallOrigin,
}
