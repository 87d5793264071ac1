//! Workout records and the validating factory.
//!
//! A workout is immutable after construction: its id, coordinates and
//! description are computed exactly once, and the variant payload is a
//! tagged union rather than a class hierarchy. Derived metrics (pace,
//! speed) are recomputed through [`crate::metrics`] on every read.

use crate::error::{Error, Result};
use crate::metrics;
use crate::validate::{all_finite, all_positive, coerce};
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Month names used when formatting workout descriptions
const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A latitude/longitude pair captured from a map click.
///
/// Supplied externally, never computed here; set once at construction.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Activity discriminant, fixed at construction
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    /// Capitalized label used in descriptions ("Running on April 14")
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }
}

impl std::fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        };
        write!(f, "{tag}")
    }
}

/// Variant-specific payload of a workout
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkoutDetails {
    /// Running adds a cadence in steps per minute
    Running { cadence: f64 },
    /// Cycling adds an elevation gain in meters (may be zero or negative)
    Cycling { elevation_gain: f64 },
}

/// One logged activity
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Workout {
    /// Opaque lookup key; the trailing digits of the creation timestamp.
    /// Never parsed back as a time.
    pub id: String,
    pub coords: Coordinates,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Duration in minutes
    pub duration_min: f64,
    pub created_at: DateTime<Utc>,
    /// Human-readable summary, computed once at construction
    pub description: String,
    #[serde(flatten)]
    pub details: WorkoutDetails,
}

impl Workout {
    pub fn kind(&self) -> WorkoutKind {
        match self.details {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    /// Running pace in min/km; None for cycling workouts
    pub fn pace(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Running { .. } => {
                Some(metrics::pace_min_per_km(self.distance_km, self.duration_min))
            }
            WorkoutDetails::Cycling { .. } => None,
        }
    }

    /// Cycling speed in km/h; None for running workouts
    pub fn speed(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Cycling { .. } => {
                Some(metrics::speed_km_per_h(self.distance_km, self.duration_min))
            }
            WorkoutDetails::Running { .. } => None,
        }
    }
}

/// Build and validate a workout from raw form fields.
///
/// Validation policy:
/// - running: distance, duration and cadence must all be finite and
///   strictly positive.
/// - cycling: distance, duration and elevation gain must all be finite,
///   but only distance and duration must be positive. Elevation gain may
///   be zero or negative (downhill routes).
///
/// On rejection no record is constructed; the caller receives
/// [`Error::Validation`] carrying the single generic user-facing message.
pub fn build_workout(
    kind: WorkoutKind,
    coords: Coordinates,
    distance_raw: &str,
    duration_raw: &str,
    extra_raw: &str,
    created_at: DateTime<Utc>,
) -> Result<Workout> {
    let distance_km = coerce(distance_raw);
    let duration_min = coerce(duration_raw);
    let extra = coerce(extra_raw);

    let details = match kind {
        WorkoutKind::Running => {
            let fields = [distance_km, duration_min, extra];
            if !all_finite(&fields) || !all_positive(&fields) {
                return Err(Error::invalid_input());
            }
            WorkoutDetails::Running { cadence: extra }
        }
        WorkoutKind::Cycling => {
            let fields = [distance_km, duration_min, extra];
            if !all_finite(&fields) || !all_positive(&[distance_km, duration_min]) {
                return Err(Error::invalid_input());
            }
            WorkoutDetails::Cycling {
                elevation_gain: extra,
            }
        }
    };

    Ok(Workout {
        id: id_from_timestamp(created_at),
        coords,
        distance_km,
        duration_min,
        created_at,
        description: describe(kind, created_at),
        details,
    })
}

/// Trailing ten digits of the millisecond timestamp
fn id_from_timestamp(created_at: DateTime<Utc>) -> String {
    let millis = created_at.timestamp_millis().to_string();
    let start = millis.len().saturating_sub(10);
    millis[start..].to_string()
}

fn describe(kind: WorkoutKind, created_at: DateTime<Utc>) -> String {
    format!(
        "{} on {} {}",
        kind.label(),
        MONTHS[created_at.month0() as usize],
        created_at.day()
    )
}
