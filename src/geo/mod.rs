//! Geo Classifier
//!
//! Maps a coordinate onto discrete categories: nearest reference city, soil
//! class, groundwater depth band, aquifer zone and administrative region.
//!
//! Each attribute has its own ordered chain of bounding-box rules; the first
//! matching box wins and every chain ends in a catch-all, so classification
//! never fails.
//!
//! ## Architecture
//! - `city.rs` - nearest-city resolution over the reference city table
//! - `classify.rs` - bounding-box rule chains + `SoilProfile`

pub mod city;
pub mod classify;

pub use city::nearest_city;
pub use classify::{
    administrative_region, aquifer_zone, classify_soil, groundwater_depth, soil_profile,
    AdministrativeRegion, SoilProfile,
};
