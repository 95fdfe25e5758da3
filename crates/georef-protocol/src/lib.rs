//! Protocol types for the place-name-only (PNO) georeferencing API.
//!
//! This crate holds everything the HTTP layer needs that is not HTTP: the
//! enumeration registry (coordinate systems, datums, coordinate sources,
//! distance units), the request validation pipeline with its endpoint
//! variant policy, the response/JSONP formatting, and the error taxonomy.
//!
//! # Example
//!
//! ```rust
//! use georef_protocol::{EndpointVariant, GeoRequest, PlaceQueryParams};
//!
//! let params = PlaceQueryParams {
//!     place_type: Some("PNO".to_string()),
//!     sys: Some("DD".to_string()),
//!     ll: Some("37.8,-122.2".to_string()),
//!     extent: Some("1000".to_string()),
//!     ..Default::default()
//! };
//! let request = GeoRequest::from_params(&params, &EndpointVariant::SELECTABLE_SYSTEM).unwrap();
//! assert_eq!(request.latitude, 37.8);
//! ```

pub mod constants;
pub mod error;
pub mod request;
pub mod response;

// Re-export commonly used types
pub use constants::{CoordinateSource, CoordinateSystem, Datum, DistanceUnit};
pub use error::{GeorefError, GeorefResult};
pub use request::{EndpointVariant, GeoRequest, PlaceQueryParams, PlaceType};
pub use response::{jsonp_body, ConstantsResponse, GeoPoint, GeoResult};
