//! Derived-metric calculators.
//!
//! Pace and speed are never stored on the record; every consumer
//! recomputes them from the stored distance and duration, so a derived
//! value can never go stale relative to the fields it came from. The
//! validator guarantees `distance > 0` and `duration > 0` before a record
//! exists, so neither function can divide by zero for a constructed
//! workout.

/// Running pace in minutes per kilometer
pub fn pace_min_per_km(distance_km: f64, duration_min: f64) -> f64 {
    duration_min / distance_km
}

/// Cycling speed in kilometers per hour
pub fn speed_km_per_h(distance_km: f64, duration_min: f64) -> f64 {
    distance_km / (duration_min / 60.0)
}
