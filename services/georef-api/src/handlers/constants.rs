//! Constants discovery endpoint handler.

use axum::{
    http::{header, StatusCode},
    response::Response,
};
use georef_protocol::ConstantsResponse;

/// GET /georef/constants and /georef/dd/constants - enumeration listing.
///
/// Never touches the request validator; any query parameters present are
/// ignored.
pub async fn constants_handler() -> Response {
    let json = serde_json::to_string_pretty(&ConstantsResponse::current()).unwrap_or_default();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CACHE_CONTROL, "max-age=3600")
        .body(json.into())
        .unwrap()
}
