//! Georeferencing engine contract and the built-in implementation.
//!
//! The engine is the one external collaborator of this service: it takes a
//! validated request and produces the canonical point with its uncertainty
//! radius. Handlers only see the trait, so a full engine (datum shifts,
//! coordinate-system conversion, gazetteer lookups) can be swapped in behind
//! [`crate::state::AppState`] without touching the pipeline.

use async_trait::async_trait;
use georef_protocol::{GeoPoint, GeoRequest, GeoResult, GeorefResult};

/// Computes the canonical point and uncertainty radius for a validated
/// request. Called once per request, synchronously from the handler's point
/// of view; no retries are performed on failure.
#[async_trait]
pub trait GeorefEngine: Send + Sync {
    async fn georeference(&self, request: &GeoRequest) -> GeorefResult<GeoResult>;
}

/// Minimal named-place-only engine.
///
/// The point passes through unchanged and the radius is the caller's extent
/// plus the ground accuracy implied by the coordinate source, both in
/// meters. Datum and coordinate-system transformations are out of scope
/// here; the trait seam above is where they would live.
#[derive(Debug, Default)]
pub struct PlaceNameEngine;

impl PlaceNameEngine {
    pub fn new() -> Self {
        PlaceNameEngine
    }
}

#[async_trait]
impl GeorefEngine for PlaceNameEngine {
    async fn georeference(&self, request: &GeoRequest) -> GeorefResult<GeoResult> {
        let point = GeoPoint {
            lat: request.latitude,
            lng: request.longitude,
        };
        let radius = request.extent + request.coordinate_source.accuracy_meters();
        Ok(GeoResult::new(point, radius))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use georef_protocol::{CoordinateSource, CoordinateSystem, Datum, PlaceType};

    fn request(source: CoordinateSource, extent: f64) -> GeoRequest {
        GeoRequest {
            place_type: PlaceType::PlaceNameOnly,
            coordinate_system: CoordinateSystem::DecimalDegrees,
            datum: Datum::Wgs84,
            coordinate_source: source,
            latitude: 37.8,
            longitude: -122.2,
            extent,
        }
    }

    #[tokio::test]
    async fn test_point_passes_through() {
        let engine = PlaceNameEngine::new();
        let result = engine
            .georeference(&request(CoordinateSource::Gazetteer, 1000.0))
            .await
            .unwrap();
        assert_eq!(result.point, GeoPoint { lat: 37.8, lng: -122.2 });
        assert_eq!(result.radius, 1000.0);
    }

    #[tokio::test]
    async fn test_source_accuracy_widens_radius() {
        let engine = PlaceNameEngine::new();
        let result = engine
            .georeference(&request(CoordinateSource::Usgs24000, 100.0))
            .await
            .unwrap();
        assert!(result.radius > 100.0);
        let expected = 100.0 + CoordinateSource::Usgs24000.accuracy_meters();
        assert!((result.radius - expected).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_map_series_source_radius_in_meters() {
        // NTS series accuracy is 125 m at 1:250,000, giving extent + 125.
        let engine = PlaceNameEngine::new();
        let result = engine
            .georeference(&request(CoordinateSource::NtsA250000, 100.0))
            .await
            .unwrap();
        assert!((result.radius - 225.0).abs() < 1e-9);
    }
}
