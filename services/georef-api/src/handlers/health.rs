//! Health endpoint handler.

use axum::{
    http::{header, StatusCode},
    response::Response,
};

/// GET /health - liveness probe.
pub async fn health_handler() -> Response {
    let body = serde_json::json!({
        "status": "ok",
        "service": "georef-api",
        "version": env!("CARGO_PKG_VERSION"),
    });

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.to_string().into())
        .unwrap()
}
