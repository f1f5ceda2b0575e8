//! Utility modules shared by the calculation engine
//!
//! - Lookup tables: static coefficients, prices, city profiles, soil/aquifer text
//! - Rounding: half-to-even rounding used for every reported figure

pub mod lookup_tables;
pub mod rounding;

// Re-export commonly used helpers
pub use rounding::{round_to, round_whole};
