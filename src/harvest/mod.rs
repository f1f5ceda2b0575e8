//! Harvest calculator
//!
//! Converts roof + rainfall into harvestable volume, monthly yield, storage
//! sizing, runoff capacity, and the recharge structures that fit the site.

pub mod potential;
pub mod runoff;
pub mod structures;

pub use potential::{
    annual_harvest_liters, calculate_harvest, monthly_potential, storage_sizing, HarvestResult,
    StorageSizing,
};
pub use runoff::{runoff_capacity, RunoffCapacity};
pub use structures::{
    design_recharge_structures, infiltration_mm_per_hour, suggest_structures, RechargeDesigns,
    StructureSuggestions,
};
