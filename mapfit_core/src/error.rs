//! Error types for the mapfit_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for mapfit_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Workout input rejected by the validator
    #[error("{0}")]
    Validation(String),

    /// A workout was submitted before any map click captured a location
    #[error("No location has been captured yet")]
    MissingLocation,

    /// The geolocation collaborator could not provide a position
    #[error("Could not fetch location: {0}")]
    Geolocation(String),
}

/// User-facing message for rejected form input.
///
/// The validator reports no detail about which field failed; the UI
/// surfaces this single generic message for every rejection.
pub const VALIDATION_MESSAGE: &str = "Only positive inputs are supported";

impl Error {
    /// Build the validation rejection with its canonical user-facing message
    pub fn invalid_input() -> Self {
        Error::Validation(VALIDATION_MESSAGE.to_string())
    }
}
