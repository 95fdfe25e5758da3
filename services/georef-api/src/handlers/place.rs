//! Place georeferencing handlers.
//!
//! Both endpoints run the same pipeline: validate the query parameters
//! against the endpoint's variant policy, hand the typed request to the
//! engine, and format the answer as JSON or JSONP. Failures of either stage
//! funnel through one mapping to the uniform opaque 404.

use axum::{
    body::Body,
    extract::{rejection::QueryRejection, Extension, Query},
    http::{header, StatusCode},
    response::Response,
};
use georef_protocol::{jsonp_body, EndpointVariant, GeoRequest, GeorefError, PlaceQueryParams};
use std::sync::Arc;

use crate::state::AppState;

/// GET /georef - coordinate system selected via `sys`, JSONP supported.
pub async fn place_handler(
    Extension(state): Extension<Arc<AppState>>,
    params: Result<Query<PlaceQueryParams>, QueryRejection>,
) -> Response {
    match params {
        Ok(Query(params)) => {
            place_query(state, EndpointVariant::SELECTABLE_SYSTEM, params).await
        }
        Err(rejection) => query_rejection_response(rejection),
    }
}

/// GET /georef/dd - coordinate system fixed to decimal degrees, JSON only.
pub async fn place_dd_handler(
    Extension(state): Extension<Arc<AppState>>,
    params: Result<Query<PlaceQueryParams>, QueryRejection>,
) -> Response {
    match params {
        Ok(Query(params)) => {
            place_query(state, EndpointVariant::FIXED_DECIMAL_DEGREES, params).await
        }
        Err(rejection) => query_rejection_response(rejection),
    }
}

/// Query strings the extractor cannot deserialize (for example a repeated
/// key) get the same opaque response as every other malformed input,
/// instead of the extractor's own 400.
fn query_rejection_response(rejection: QueryRejection) -> Response {
    tracing::warn!("rejected place query string: {}", rejection);
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Body::empty())
        .unwrap()
}

async fn place_query(
    state: Arc<AppState>,
    variant: EndpointVariant,
    params: PlaceQueryParams,
) -> Response {
    let request = match GeoRequest::from_params(&params, &variant) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!("rejected place query: {}", e);
            return failure_response(&e);
        }
    };

    let result = match state.engine.georeference(&request).await {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!("georeferencing failed: {}", e);
            return failure_response(&e);
        }
    };

    // JSONP when the variant supports it and a callback was supplied. The
    // JSONP mode keeps the plain text content type; only the JSON mode
    // declares application/json.
    match params.callback.as_deref() {
        Some(callback) if variant.supports_callback => {
            let body = jsonp_body(callback, params.rid.as_deref(), &result);
            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
                .body(body.into())
                .unwrap()
        }
        _ => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "application/json; charset=utf-8")
            .body(result.to_json().into())
            .unwrap(),
    }
}

/// Uniform failure response: status from the error, empty body. Failure
/// reasons are logged for operators, never returned to the caller.
fn failure_response(err: &GeorefError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status_code()).unwrap_or(StatusCode::NOT_FOUND);
    Response::builder()
        .status(status)
        .body(Body::empty())
        .unwrap()
}
