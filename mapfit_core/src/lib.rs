#![forbid(unsafe_code)]

//! Core domain model and control flow for the mapfit workout tracker.
//!
//! This crate provides:
//! - Workout records (running/cycling variants with derived metrics)
//! - Form-input validation
//! - The in-memory workout journal
//! - The session tracker wiring map clicks, form submits and list clicks
//! - Configuration and logging setup
//!
//! Rendering (map tiles, markers, list entries) belongs to the consuming
//! shell; the tracker's return values are the only outbound surface.

pub mod config;
pub mod error;
pub mod journal;
pub mod logging;
pub mod metrics;
pub mod tracker;
pub mod validate;
pub mod workout;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result, VALIDATION_MESSAGE};
pub use journal::WorkoutJournal;
pub use tracker::Tracker;
pub use workout::{build_workout, Coordinates, Workout, WorkoutDetails, WorkoutKind};
