//! Georef API Server
//!
//! HTTP API for place-name-only georeferencing: validates a coordinate
//! guess plus uncertainty extent and returns the canonical point with its
//! uncertainty radius in meters.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use clap::Parser;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use georef_api::handlers;
use georef_api::state::AppState;

/// Georef API Server
#[derive(Parser, Debug)]
#[command(name = "georef-api")]
#[command(about = "Place-name-only georeferencing server")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:8084", env = "GEOREF_LISTEN_ADDR")]
    listen: String,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Number of worker threads
    #[arg(long, env = "GEOREF_WORKER_THREADS")]
    worker_threads: Option<usize>,
}

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Build runtime with configured threads
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder
        .build()
        .expect("Failed to create Tokio runtime");

    runtime.block_on(async move {
        run_server(args).await;
    });
}

async fn run_server(args: Args) {
    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    info!("Starting georef API server");

    let state = Arc::new(AppState::new());

    // Build router
    let app = Router::new()
        // Variant with caller-selected coordinate system, JSONP capable
        .route("/georef", get(handlers::place::place_handler))
        // Variant with the coordinate system fixed to decimal degrees
        .route("/georef/dd", get(handlers::place::place_dd_handler))
        // Constants discovery, reachable under both base paths
        .route("/georef/constants", get(handlers::constants::constants_handler))
        .route(
            "/georef/dd/constants",
            get(handlers::constants::constants_handler),
        )
        // Health
        .route("/health", get(handlers::health::health_handler))
        // Middleware
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Parse listen address
    let addr: SocketAddr = args.listen.parse().expect("Invalid listen address");

    info!("Georef API listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");
    axum::serve(listener, app).await.expect("Server failed");
}
