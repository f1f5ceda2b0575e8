//! Rounding helpers
//!
//! Every reported figure uses round-half-to-even ("banker's rounding"), so that
//! e.g. 2.5 → 2 and 3.5 → 4. Decimal rounding scales, rounds, and scales back.

/// Round to the nearest whole number, ties to even.
pub fn round_whole(value: f64) -> f64 {
    value.round_ties_even()
}

/// Round to `decimals` places, ties to even.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if decimals <= 0 {
        return round_whole(value);
    }
    let scale = 10f64.powi(decimals);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round_ties_even() / scale
}
