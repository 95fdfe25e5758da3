//! Error types for the georeferencing API.

use thiserror::Error;

/// Result type alias using GeorefError.
pub type GeorefResult<T> = Result<T, GeorefError>;

/// Single failure channel for request validation and the georeferencing
/// engine. Each validation variant carries the offending raw input for
/// operator diagnostics; the value is logged, never returned to the caller.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeorefError {
    // === Validation failures ===
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Only Place Name Only type supported, got: {0:?}")]
    UnsupportedPlaceType(String),

    #[error("Invalid coordinate system: {0:?}")]
    InvalidCoordinateSystem(String),

    #[error("Malformed coordinate pair: {0:?}")]
    MalformedCoordinatePair(String),

    #[error("Invalid extent: {0:?}")]
    InvalidExtent(String),

    #[error("Invalid datum: {0:?}")]
    InvalidDatum(String),

    #[error("Invalid coordinate source: {0:?}")]
    InvalidCoordinateSource(String),

    // === Engine failures ===
    #[error("Georeferencing failed: {0}")]
    EngineFailure(String),
}

impl GeorefError {
    /// HTTP status for this error.
    ///
    /// Every failure maps to 404 with an opaque body. The original service
    /// answered 404 for bad input as well as engine failures, and existing
    /// clients depend on that, so the mapping is uniform on purpose.
    pub fn http_status_code(&self) -> u16 {
        404
    }
}
