//! Session controller wiring map clicks, form submits and list clicks
//! together.
//!
//! All session state is owned here explicitly: the journal, the one-slot
//! pending mark left by the last map click, and the resolved map center.
//! Outbound UI events are the handlers' return values; the shell decides
//! how to render them.

use crate::error::{Error, Result};
use crate::journal::WorkoutJournal;
use crate::workout::{build_workout, Coordinates, Workout, WorkoutKind};
use chrono::Utc;

/// Event-driven workout tracker core.
///
/// Single-threaded by design: each inbound entry point is called from one
/// logical event loop, so a map click always happens-before the form
/// submit that consumes its coordinates.
#[derive(Debug, Default)]
pub struct Tracker {
    journal: WorkoutJournal,
    /// Last captured map-click location, awaiting the next form submit.
    /// Overwritten on every click; NOT cleared after a workout is created,
    /// so a submit without a fresh click reuses the previous location.
    pending_mark: Option<Coordinates>,
    map_center: Option<Coordinates>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Geolocation resolved; the map can initialize at this center
    pub fn on_position_resolved(&mut self, lat: f64, lon: f64) -> Coordinates {
        let coords = Coordinates::new(lat, lon);
        tracing::info!("Map centered at ({lat}, {lon})");
        self.map_center = Some(coords);
        coords
    }

    /// Geolocation denied or unavailable.
    ///
    /// Fatal to the map feature only: the journal and factory remain
    /// usable. Returns the error value for the shell to surface as its
    /// alert-style notification.
    pub fn on_position_failed(&mut self, reason: &str) -> Error {
        tracing::warn!("Geolocation failed: {reason}");
        Error::Geolocation(reason.to_string())
    }

    /// A map click captured a location; it becomes the pending mark
    pub fn on_map_clicked(&mut self, lat: f64, lon: f64) {
        tracing::debug!("Captured pending mark at ({lat}, {lon})");
        self.pending_mark = Some(Coordinates::new(lat, lon));
    }

    /// Form submitted: validate, build the record, append it.
    ///
    /// Refuses with [`Error::MissingLocation`] when no map click has
    /// captured a location yet, and with [`Error::Validation`] when the
    /// raw fields fail the numeric/positivity checks. On success the
    /// returned borrow drives the marker and list rendering.
    pub fn on_form_submitted(
        &mut self,
        kind: WorkoutKind,
        distance_raw: &str,
        duration_raw: &str,
        extra_raw: &str,
    ) -> Result<&Workout> {
        let coords = self.pending_mark.ok_or(Error::MissingLocation)?;

        let workout = build_workout(
            kind,
            coords,
            distance_raw,
            duration_raw,
            extra_raw,
            Utc::now(),
        )?;

        tracing::info!("Logged {} workout {}", kind, workout.id);
        Ok(self.journal.append(workout))
    }

    /// List entry clicked: resolve the id back to its coordinates.
    ///
    /// A miss is a no-op `None`, never an error.
    pub fn on_list_item_clicked(&self, id: &str) -> Option<Coordinates> {
        match self.journal.find_by_id(id) {
            Some(workout) => {
                tracing::debug!("Selected workout {}", workout.id);
                Some(workout.coords)
            }
            None => {
                tracing::debug!("List click for unknown id {id}, ignoring");
                None
            }
        }
    }

    pub fn journal(&self) -> &WorkoutJournal {
        &self.journal
    }

    pub fn pending_mark(&self) -> Option<Coordinates> {
        self.pending_mark
    }

    pub fn map_center(&self) -> Option<Coordinates> {
        self.map_center
    }
}
