//! Response types for the georeferencing API.
//!
//! Two output modes exist: plain JSON and JSONP. Field declaration order is
//! what fixes the JSON key order, so these are structs rather than ad-hoc
//! maps.

use serde::Serialize;

use crate::constants::{CoordinateSource, CoordinateSystem, Datum, DistanceUnit};

/// A latitude/longitude pair in output units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// The georeferencing engine's answer: the canonical point and the
/// uncertainty radius around it. The radius unit is always meters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoResult {
    pub point: GeoPoint,
    pub radius: f64,
    #[serde(skip)]
    pub unit: DistanceUnit,
}

impl GeoResult {
    pub fn new(point: GeoPoint, radius: f64) -> Self {
        GeoResult {
            point,
            radius,
            unit: DistanceUnit::Meter,
        }
    }

    /// Plain JSON body: `{"point":{...},"radius":<r>}`.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[derive(Serialize)]
struct JsonpPayload<'a> {
    rid: Option<&'a str>,
    point: GeoPoint,
    radius: f64,
}

/// JSONP body: `<callback>({"rid":...,"point":{...},"radius":<r>});`.
///
/// The rid is echoed verbatim and serialized as `null` when the caller did
/// not supply one.
pub fn jsonp_body(callback: &str, rid: Option<&str>, result: &GeoResult) -> String {
    let payload = JsonpPayload {
        rid,
        point: result.point,
        radius: result.radius,
    };
    let json = serde_json::to_string(&payload).unwrap_or_default();
    format!("{}({});", callback, json)
}

/// Body of the constants discovery endpoint: every enumeration family in
/// declared order, so clients can build correct requests.
#[derive(Debug, Serialize)]
pub struct ConstantsResponse {
    pub datum: &'static [Datum],
    pub system: &'static [CoordinateSystem],
    pub sources: &'static [CoordinateSource],
    pub units: &'static [DistanceUnit],
}

impl ConstantsResponse {
    pub fn current() -> Self {
        ConstantsResponse {
            datum: Datum::ALL,
            system: CoordinateSystem::ALL,
            sources: CoordinateSource::ALL,
            units: DistanceUnit::ALL,
        }
    }
}
