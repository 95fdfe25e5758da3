//! Query parameter validation for georeferencing requests.
//!
//! The two public endpoints share one validation pipeline; they differ only
//! in whether the coordinate system comes from the `sys` parameter or is
//! fixed, and whether JSONP output is available. That difference is captured
//! by [`EndpointVariant`] so the checks themselves are written once.

use serde::Deserialize;

use crate::constants::{CoordinateSource, CoordinateSystem, Datum};
use crate::error::{GeorefError, GeorefResult};

/// Raw query parameters as they arrive on the wire. Everything is optional
/// here; required/optional rules are applied by [`GeoRequest::from_params`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceQueryParams {
    /// Place type. Only `PNO` is supported.
    #[serde(rename = "type")]
    pub place_type: Option<String>,

    /// Coordinate system name. Consulted only by variants that require it.
    pub sys: Option<String>,

    /// Coordinate pair as `<lat>,<lon>`.
    pub ll: Option<String>,

    /// Uncertainty extent around the place, in caller units.
    pub extent: Option<String>,

    /// Datum name. Defaults to WGS84 when absent.
    pub datum: Option<String>,

    /// Coordinate source name. Defaults to GAZETTEER when absent.
    pub source: Option<String>,

    /// JSONP callback function name. Honored only by variants that support it.
    pub callback: Option<String>,

    /// Caller correlation id, echoed verbatim in JSONP payloads.
    pub rid: Option<String>,
}

/// Per-endpoint configuration of the shared pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndpointVariant {
    /// Whether `sys` must be supplied and resolve.
    pub coordinate_system_required: bool,

    /// Whether the `callback` parameter switches output to JSONP.
    pub supports_callback: bool,

    /// Coordinate system to use when `sys` is not consulted.
    pub fixed_coordinate_system: Option<CoordinateSystem>,
}

impl EndpointVariant {
    /// Caller selects the coordinate system via `sys`; JSONP available.
    pub const SELECTABLE_SYSTEM: EndpointVariant = EndpointVariant {
        coordinate_system_required: true,
        supports_callback: true,
        fixed_coordinate_system: None,
    };

    /// Coordinate system pinned to decimal degrees; plain JSON only.
    pub const FIXED_DECIMAL_DEGREES: EndpointVariant = EndpointVariant {
        coordinate_system_required: false,
        supports_callback: false,
        fixed_coordinate_system: Some(CoordinateSystem::DecimalDegrees),
    };
}

/// Supported place types. The service only georeferences localities that are
/// described by a place name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceType {
    PlaceNameOnly,
}

/// A fully validated georeferencing request. Construction goes through
/// [`GeoRequest::from_params`]; a value of this type always holds resolved
/// enumeration members and finite numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoRequest {
    pub place_type: PlaceType,
    pub coordinate_system: CoordinateSystem,
    pub datum: Datum,
    pub coordinate_source: CoordinateSource,
    pub latitude: f64,
    pub longitude: f64,
    pub extent: f64,
}

impl GeoRequest {
    /// Validate raw parameters against an endpoint variant.
    ///
    /// Checks run in a fixed order and stop at the first failure: place type,
    /// coordinate system, coordinate pair, extent, datum, source. Clients see
    /// a uniform error response, but the order keeps the logged diagnostics
    /// stable. Latitude/longitude magnitude and extent sign are not checked
    /// here; range handling belongs to the engine.
    pub fn from_params(
        params: &PlaceQueryParams,
        variant: &EndpointVariant,
    ) -> GeorefResult<GeoRequest> {
        // 1. Place type
        let raw_type = params.place_type.as_deref().unwrap_or("").trim();
        if raw_type.is_empty() || !raw_type.eq_ignore_ascii_case("PNO") {
            return Err(GeorefError::UnsupportedPlaceType(raw_type.to_string()));
        }

        // 2. Coordinate system
        let coordinate_system = match variant.fixed_coordinate_system {
            Some(sys) => sys,
            None => {
                let raw = params.sys.as_deref().unwrap_or("");
                CoordinateSystem::from_name(raw)
                    .ok_or_else(|| GeorefError::InvalidCoordinateSystem(raw.to_string()))?
            }
        };

        // 3. Coordinate pair
        let raw_ll = params
            .ll
            .as_deref()
            .ok_or(GeorefError::MissingParameter("ll"))?;
        let (latitude, longitude) = parse_coordinate_pair(raw_ll)?;

        // 4. Extent
        let raw_extent = params
            .extent
            .as_deref()
            .ok_or(GeorefError::MissingParameter("extent"))?;
        let extent = parse_finite(raw_extent)
            .ok_or_else(|| GeorefError::InvalidExtent(raw_extent.to_string()))?;

        // 5. Datum
        let datum = match params.datum.as_deref() {
            Some(raw) => Datum::from_name(raw)
                .ok_or_else(|| GeorefError::InvalidDatum(raw.to_string()))?,
            None => Datum::Wgs84,
        };

        // 6. Coordinate source
        let coordinate_source = match params.source.as_deref() {
            Some(raw) => CoordinateSource::from_name(raw)
                .ok_or_else(|| GeorefError::InvalidCoordinateSource(raw.to_string()))?,
            None => CoordinateSource::Gazetteer,
        };

        Ok(GeoRequest {
            place_type: PlaceType::PlaceNameOnly,
            coordinate_system,
            datum,
            coordinate_source,
            latitude,
            longitude,
            extent,
        })
    }
}

/// Parse a `<lat>,<lon>` pair. Exactly two comma-separated tokens, each a
/// finite float.
fn parse_coordinate_pair(raw: &str) -> GeorefResult<(f64, f64)> {
    let tokens: Vec<&str> = raw.split(',').collect();
    if tokens.len() != 2 {
        return Err(GeorefError::MalformedCoordinatePair(raw.to_string()));
    }
    let lat = parse_finite(tokens[0])
        .ok_or_else(|| GeorefError::MalformedCoordinatePair(raw.to_string()))?;
    let lon = parse_finite(tokens[1])
        .ok_or_else(|| GeorefError::MalformedCoordinatePair(raw.to_string()))?;
    Ok((lat, lon))
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_params() -> PlaceQueryParams {
        PlaceQueryParams {
            place_type: Some("PNO".to_string()),
            sys: Some("DD".to_string()),
            ll: Some("37.8,-122.2".to_string()),
            extent: Some("1000".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_request_with_defaults() {
        let req =
            GeoRequest::from_params(&valid_params(), &EndpointVariant::SELECTABLE_SYSTEM).unwrap();
        assert_eq!(req.place_type, PlaceType::PlaceNameOnly);
        assert_eq!(req.coordinate_system, CoordinateSystem::DecimalDegrees);
        assert_eq!(req.datum, Datum::Wgs84);
        assert_eq!(req.coordinate_source, CoordinateSource::Gazetteer);
        assert_eq!(req.latitude, 37.8);
        assert_eq!(req.longitude, -122.2);
        assert_eq!(req.extent, 1000.0);
    }

    #[test]
    fn test_explicit_datum_and_source() {
        let mut params = valid_params();
        params.datum = Some("nad27".to_string());
        params.source = Some("GPS".to_string());
        let req =
            GeoRequest::from_params(&params, &EndpointVariant::SELECTABLE_SYSTEM).unwrap();
        assert_eq!(req.datum, Datum::Nad27);
        assert_eq!(req.coordinate_source, CoordinateSource::Gps);
    }

    #[test]
    fn test_missing_type_fails() {
        let mut params = valid_params();
        params.place_type = None;
        let err =
            GeoRequest::from_params(&params, &EndpointVariant::SELECTABLE_SYSTEM).unwrap_err();
        assert_eq!(err, GeorefError::UnsupportedPlaceType(String::new()));
    }

    #[test]
    fn test_blank_type_fails() {
        let mut params = valid_params();
        params.place_type = Some("   ".to_string());
        assert!(GeoRequest::from_params(&params, &EndpointVariant::SELECTABLE_SYSTEM).is_err());
    }

    #[test]
    fn test_non_pno_type_fails() {
        let mut params = valid_params();
        params.place_type = Some("BF".to_string());
        let err =
            GeoRequest::from_params(&params, &EndpointVariant::SELECTABLE_SYSTEM).unwrap_err();
        assert_eq!(err, GeorefError::UnsupportedPlaceType("BF".to_string()));
    }

    #[test]
    fn test_type_is_case_insensitive() {
        let mut params = valid_params();
        params.place_type = Some("pno".to_string());
        assert!(GeoRequest::from_params(&params, &EndpointVariant::SELECTABLE_SYSTEM).is_ok());
    }

    #[test]
    fn test_type_checked_before_system() {
        // Both type and sys are bad; the place type failure wins.
        let mut params = valid_params();
        params.place_type = Some("BF".to_string());
        params.sys = Some("UTM".to_string());
        let err =
            GeoRequest::from_params(&params, &EndpointVariant::SELECTABLE_SYSTEM).unwrap_err();
        assert!(matches!(err, GeorefError::UnsupportedPlaceType(_)));
    }

    #[test]
    fn test_missing_system_fails_when_required() {
        let mut params = valid_params();
        params.sys = None;
        let err =
            GeoRequest::from_params(&params, &EndpointVariant::SELECTABLE_SYSTEM).unwrap_err();
        assert_eq!(err, GeorefError::InvalidCoordinateSystem(String::new()));
    }

    #[test]
    fn test_unresolvable_system_fails() {
        let mut params = valid_params();
        params.sys = Some("UTM".to_string());
        let err =
            GeoRequest::from_params(&params, &EndpointVariant::SELECTABLE_SYSTEM).unwrap_err();
        assert_eq!(err, GeorefError::InvalidCoordinateSystem("UTM".to_string()));
    }

    #[test]
    fn test_fixed_system_ignores_sys_param() {
        // The fixed-system variant never consults sys, even a garbage value.
        let mut params = valid_params();
        params.sys = Some("UTM".to_string());
        let req =
            GeoRequest::from_params(&params, &EndpointVariant::FIXED_DECIMAL_DEGREES).unwrap();
        assert_eq!(req.coordinate_system, CoordinateSystem::DecimalDegrees);
    }

    #[test]
    fn test_single_token_ll_fails() {
        let mut params = valid_params();
        params.ll = Some("37.8".to_string());
        let err =
            GeoRequest::from_params(&params, &EndpointVariant::SELECTABLE_SYSTEM).unwrap_err();
        assert_eq!(err, GeorefError::MalformedCoordinatePair("37.8".to_string()));
    }

    #[test]
    fn test_three_token_ll_fails() {
        let mut params = valid_params();
        params.ll = Some("1,2,3".to_string());
        assert!(GeoRequest::from_params(&params, &EndpointVariant::SELECTABLE_SYSTEM).is_err());
    }

    #[test]
    fn test_non_numeric_ll_fails() {
        let mut params = valid_params();
        params.ll = Some("abc,def".to_string());
        assert!(GeoRequest::from_params(&params, &EndpointVariant::SELECTABLE_SYSTEM).is_err());
    }

    #[test]
    fn test_non_finite_ll_fails() {
        let mut params = valid_params();
        params.ll = Some("NaN,-122.2".to_string());
        assert!(GeoRequest::from_params(&params, &EndpointVariant::SELECTABLE_SYSTEM).is_err());
        params.ll = Some("inf,-122.2".to_string());
        assert!(GeoRequest::from_params(&params, &EndpointVariant::SELECTABLE_SYSTEM).is_err());
    }

    #[test]
    fn test_missing_ll_fails() {
        let mut params = valid_params();
        params.ll = None;
        let err =
            GeoRequest::from_params(&params, &EndpointVariant::SELECTABLE_SYSTEM).unwrap_err();
        assert_eq!(err, GeorefError::MissingParameter("ll"));
    }

    #[test]
    fn test_missing_extent_fails() {
        let mut params = valid_params();
        params.extent = None;
        let err =
            GeoRequest::from_params(&params, &EndpointVariant::SELECTABLE_SYSTEM).unwrap_err();
        assert_eq!(err, GeorefError::MissingParameter("extent"));
    }

    #[test]
    fn test_non_numeric_extent_fails() {
        let mut params = valid_params();
        params.extent = Some("wide".to_string());
        let err =
            GeoRequest::from_params(&params, &EndpointVariant::SELECTABLE_SYSTEM).unwrap_err();
        assert_eq!(err, GeorefError::InvalidExtent("wide".to_string()));
    }

    #[test]
    fn test_negative_extent_passes_through() {
        // Sign is not checked at this layer.
        let mut params = valid_params();
        params.extent = Some("-50".to_string());
        let req =
            GeoRequest::from_params(&params, &EndpointVariant::SELECTABLE_SYSTEM).unwrap();
        assert_eq!(req.extent, -50.0);
    }

    #[test]
    fn test_unresolvable_datum_fails() {
        let mut params = valid_params();
        params.datum = Some("NAD99".to_string());
        let err =
            GeoRequest::from_params(&params, &EndpointVariant::SELECTABLE_SYSTEM).unwrap_err();
        assert_eq!(err, GeorefError::InvalidDatum("NAD99".to_string()));
    }

    #[test]
    fn test_unresolvable_source_fails() {
        let mut params = valid_params();
        params.source = Some("hearsay".to_string());
        let err =
            GeoRequest::from_params(&params, &EndpointVariant::SELECTABLE_SYSTEM).unwrap_err();
        assert_eq!(err, GeorefError::InvalidCoordinateSource("hearsay".to_string()));
    }

    #[test]
    fn test_ll_checked_before_datum() {
        let mut params = valid_params();
        params.ll = Some("bogus".to_string());
        params.datum = Some("NAD99".to_string());
        let err =
            GeoRequest::from_params(&params, &EndpointVariant::SELECTABLE_SYSTEM).unwrap_err();
        assert!(matches!(err, GeorefError::MalformedCoordinatePair(_)));
    }

    #[test]
    fn test_params_deserialize_from_query_keys() {
        let params: PlaceQueryParams = serde_json::from_value(serde_json::json!({
            "type": "PNO",
            "sys": "DD",
            "ll": "37.8,-122.2",
            "extent": "1000",
            "callback": "foo",
            "rid": "42"
        }))
        .unwrap();
        assert_eq!(params.place_type.as_deref(), Some("PNO"));
        assert_eq!(params.callback.as_deref(), Some("foo"));
        assert_eq!(params.rid.as_deref(), Some("42"));
    }
}
