//! Shared value types for the analysis pipeline.
//!
//! Every type here is an immutable value record built once per request.
//! Enum keys mirror the lower-case keys accepted on the wire; keys that are not
//! recognised resolve to an `Unknown` variant so that lookups can fall back to
//! default coefficients instead of rejecting the request.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

// ============================================================================
// Coordinates
// ============================================================================

/// A WGS84 coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Planar distance in raw degree units (not great-circle).
    pub fn degree_distance(&self, other: &Coordinate) -> f64 {
        let d_lat = self.latitude - other.latitude;
        let d_lng = self.longitude - other.longitude;
        (d_lat * d_lat + d_lng * d_lng).sqrt()
    }
}

// ============================================================================
// Months
// ============================================================================

/// Calendar month, keyed `jan`..`dec` in all serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Month::Jan => "jan",
            Month::Feb => "feb",
            Month::Mar => "mar",
            Month::Apr => "apr",
            Month::May => "may",
            Month::Jun => "jun",
            Month::Jul => "jul",
            Month::Aug => "aug",
            Month::Sep => "sep",
            Month::Oct => "oct",
            Month::Nov => "nov",
            Month::Dec => "dec",
        }
    }

    /// Zero-based position in the calendar year.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Month from a 1-based calendar number (as in ISO dates).
    pub fn from_number(number: u32) -> Option<Month> {
        match number {
            1..=12 => Some(Month::ALL[(number - 1) as usize]),
            _ => None,
        }
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// One value per calendar month, in calendar order.
///
/// Serializes as an ordered map (`{"jan": .., "feb": .., ...}`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyValues<T>(pub [T; 12]);

impl<T: Copy> MonthlyValues<T> {
    pub fn get(&self, month: Month) -> T {
        self.0[month.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Month, T)> + '_ {
        Month::ALL.iter().map(move |m| (*m, self.0[m.index()]))
    }

    pub fn map<U>(&self, f: impl Fn(Month, T) -> U) -> MonthlyValues<U> {
        MonthlyValues(std::array::from_fn(|i| f(Month::ALL[i], self.0[i])))
    }
}

impl MonthlyValues<f64> {
    pub fn zeros() -> Self {
        MonthlyValues([0.0; 12])
    }

    /// Sum over the given months.
    pub fn sum_of(&self, months: &[Month]) -> f64 {
        months.iter().map(|m| self.get(*m)).sum()
    }

    /// First month holding the maximum value (calendar order breaks ties).
    pub fn peak(&self) -> (Month, f64) {
        let mut best = (Month::Jan, self.0[0]);
        for (month, value) in self.iter().skip(1) {
            if value > best.1 {
                best = (month, value);
            }
        }
        best
    }
}

impl<T: Serialize> Serialize for MonthlyValues<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(12))?;
        for (month, value) in Month::ALL.iter().zip(self.0.iter()) {
            map.serialize_entry(month.key(), value)?;
        }
        map.end()
    }
}

// ============================================================================
// Property + preferences
// ============================================================================

/// Roof surface material (drives the runoff coefficient).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoofMaterial {
    Concrete,
    Metal,
    Tile,
    Asbestos,
    Thatch,
    Other,
    /// Any key not in the table; uses the default runoff coefficient.
    Unknown,
}

impl RoofMaterial {
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "concrete" => RoofMaterial::Concrete,
            "metal" => RoofMaterial::Metal,
            "tile" => RoofMaterial::Tile,
            "asbestos" => RoofMaterial::Asbestos,
            "thatch" => RoofMaterial::Thatch,
            "other" => RoofMaterial::Other,
            _ => RoofMaterial::Unknown,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            RoofMaterial::Concrete => "concrete",
            RoofMaterial::Metal => "metal",
            RoofMaterial::Tile => "tile",
            RoofMaterial::Asbestos => "asbestos",
            RoofMaterial::Thatch => "thatch",
            RoofMaterial::Other => "other",
            RoofMaterial::Unknown => "unknown",
        }
    }
}

/// System quality tier chosen by the household.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemTier {
    Basic,
    Standard,
    Advanced,
    Unknown,
}

impl SystemTier {
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "basic" => SystemTier::Basic,
            "standard" => SystemTier::Standard,
            "advanced" => SystemTier::Advanced,
            _ => SystemTier::Unknown,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SystemTier::Basic => "basic",
            SystemTier::Standard => "standard",
            SystemTier::Advanced => "advanced",
            SystemTier::Unknown => "unknown",
        }
    }
}

/// Settlement type (drives the municipal water price).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionType {
    Urban,
    Suburban,
    Rural,
    Unknown,
}

impl RegionType {
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "urban" => RegionType::Urban,
            "suburban" => RegionType::Suburban,
            "rural" => RegionType::Rural,
            _ => RegionType::Unknown,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            RegionType::Urban => "urban",
            RegionType::Suburban => "suburban",
            RegionType::Rural => "rural",
            RegionType::Unknown => "unknown",
        }
    }
}

macro_rules! serialize_as_key {
    ($($ty:ty),*) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(self.key())
                }
            }
        )*
    };
}

serialize_as_key!(RoofMaterial, SystemTier, RegionType);

/// Broad soil class used across India's regional soil map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoilType {
    Alluvial,
    Black,
    Red,
    Laterite,
    Desert,
    Mountain,
}

impl SoilType {
    pub fn key(&self) -> &'static str {
        match self {
            SoilType::Alluvial => "alluvial",
            SoilType::Black => "black",
            SoilType::Red => "red",
            SoilType::Laterite => "laterite",
            SoilType::Desert => "desert",
            SoilType::Mountain => "mountain",
        }
    }

    /// Title-cased name used in reports (e.g. "Alluvial").
    pub fn display_name(&self) -> &'static str {
        match self {
            SoilType::Alluvial => "Alluvial",
            SoilType::Black => "Black",
            SoilType::Red => "Red",
            SoilType::Laterite => "Laterite",
            SoilType::Desert => "Desert",
            SoilType::Mountain => "Mountain",
        }
    }
}

impl Serialize for SoilType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_name())
    }
}

/// Roof and plot description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyInput {
    pub roof_area_sqft: f64,
    pub roof_material: RoofMaterial,
    pub plot_area_sqft: Option<f64>,
}

/// Household system preferences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preferences {
    pub system_tier: SystemTier,
    pub region_type: RegionType,
}
