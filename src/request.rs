//! Analysis request contract and validation
//!
//! Two wire shapes feed one validated [`AnalysisInput`]:
//! - nested JSON (`location`, `property`, `usage`, `preferences`)
//! - a flat urlencoded form (`latitude`, `longitude`, `roof_area_sqft`, ...)
//!
//! Validation runs before any computation. Unknown material, tier and
//! region keys are accepted and resolve to default coefficients.

use serde::Deserialize;
use thiserror::Error;

use crate::types::{Coordinate, Preferences, PropertyInput, RegionType, RoofMaterial, SystemTier};

pub const DEFAULT_ROOF_MATERIAL: &str = "concrete";
pub const DEFAULT_HOUSEHOLD_SIZE: u32 = 4;
pub const DEFAULT_SYSTEM_TYPE: &str = "standard";
pub const DEFAULT_REGION_TYPE: &str = "urban";

/// Client input errors. Each maps to HTTP 400.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Latitude and longitude are required")]
    MissingCoordinates,

    #[error("Invalid {field}: {value} (must be a finite number between -{limit} and {limit})")]
    CoordinateOutOfRange {
        field: &'static str,
        value: f64,
        limit: f64,
    },

    #[error("Roof area is required")]
    MissingRoofArea,

    #[error("Roof area must be a positive number, got {0}")]
    InvalidRoofArea(f64),

    #[error("Plot area must be a positive number, got {0}")]
    InvalidPlotArea(f64),

    #[error("Invalid {field}: '{value}' is not a number")]
    InvalidNumber { field: &'static str, value: String },
}

// ============================================================================
// JSON request
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationRequest {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyRequest {
    pub roof_area_sqft: Option<f64>,
    pub roof_material: Option<String>,
    pub plot_area_sqft: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsageRequest {
    pub household_size: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreferencesRequest {
    pub system_type: Option<String>,
    pub region_type: Option<String>,
}

/// Body of `POST /api/v1/water-harvesting/analyze`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub location: LocationRequest,
    #[serde(default)]
    pub property: PropertyRequest,
    #[serde(default)]
    pub usage: UsageRequest,
    #[serde(default)]
    pub preferences: PreferencesRequest,
}

impl AnalysisRequest {
    pub fn from_json(body: &[u8]) -> Result<Self, RequestError> {
        serde_json::from_slice(body).map_err(|e| RequestError::InvalidBody(e.to_string()))
    }

    /// Check required fields and ranges, and resolve keys to typed values.
    pub fn validate(self) -> Result<AnalysisInput, RequestError> {
        let (lat, lng) = match (self.location.lat, self.location.lng) {
            (Some(lat), Some(lng)) => (lat, lng),
            _ => return Err(RequestError::MissingCoordinates),
        };
        check_coordinate("latitude", lat, 90.0)?;
        check_coordinate("longitude", lng, 180.0)?;

        let roof_area_sqft = self.property.roof_area_sqft.ok_or(RequestError::MissingRoofArea)?;
        if !roof_area_sqft.is_finite() || roof_area_sqft <= 0.0 {
            return Err(RequestError::InvalidRoofArea(roof_area_sqft));
        }
        if let Some(plot) = self.property.plot_area_sqft {
            if !plot.is_finite() || plot <= 0.0 {
                return Err(RequestError::InvalidPlotArea(plot));
            }
        }

        let address = self
            .location
            .address
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| format!("Location {}, {}", lat, lng));

        let roof_material = self.property.roof_material.as_deref().unwrap_or(DEFAULT_ROOF_MATERIAL);
        let system_type = self.preferences.system_type.as_deref().unwrap_or(DEFAULT_SYSTEM_TYPE);
        let region_type = self.preferences.region_type.as_deref().unwrap_or(DEFAULT_REGION_TYPE);

        Ok(AnalysisInput {
            coordinate: Coordinate::new(lat, lng),
            address,
            property: PropertyInput {
                roof_area_sqft,
                roof_material: RoofMaterial::from_key(roof_material),
                plot_area_sqft: self.property.plot_area_sqft,
            },
            household_size: self.usage.household_size.unwrap_or(DEFAULT_HOUSEHOLD_SIZE),
            preferences: Preferences {
                system_tier: SystemTier::from_key(system_type),
                region_type: RegionType::from_key(region_type),
            },
        })
    }
}

fn check_coordinate(field: &'static str, value: f64, limit: f64) -> Result<(), RequestError> {
    if value.is_finite() && value.abs() <= limit {
        Ok(())
    } else {
        Err(RequestError::CoordinateOutOfRange { field, value, limit })
    }
}

// ============================================================================
// Form request
// ============================================================================

/// Body of `POST /analyze` (urlencoded). Every field arrives as text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormRequest {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub address: Option<String>,
    pub roof_area_sqft: Option<String>,
    pub plot_area_sqft: Option<String>,
    pub roof_material: Option<String>,
    pub household_size: Option<String>,
    pub system_type: Option<String>,
    pub region_type: Option<String>,
}

/// Blank form fields count as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_number<T: std::str::FromStr>(field: &'static str, value: Option<String>) -> Result<Option<T>, RequestError> {
    match non_blank(value) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| RequestError::InvalidNumber { field, value: raw }),
        None => Ok(None),
    }
}

impl FormRequest {
    /// Convert to the nested request shape.
    pub fn into_request(self) -> Result<AnalysisRequest, RequestError> {
        Ok(AnalysisRequest {
            location: LocationRequest {
                lat: parse_number("latitude", self.latitude)?,
                lng: parse_number("longitude", self.longitude)?,
                address: non_blank(self.address),
            },
            property: PropertyRequest {
                roof_area_sqft: parse_number("roof_area_sqft", self.roof_area_sqft)?,
                roof_material: non_blank(self.roof_material),
                plot_area_sqft: parse_number("plot_area_sqft", self.plot_area_sqft)?,
            },
            usage: UsageRequest {
                household_size: parse_number("household_size", self.household_size)?,
            },
            preferences: PreferencesRequest {
                system_type: non_blank(self.system_type),
                region_type: non_blank(self.region_type),
            },
        })
    }
}

// ============================================================================
// Validated input
// ============================================================================

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisInput {
    pub coordinate: Coordinate,
    pub address: String,
    pub property: PropertyInput,
    pub household_size: u32,
    pub preferences: Preferences,
}
