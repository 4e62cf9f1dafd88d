//! Axum router configuration with middleware.
//!
//! - `/api/meta/webhook`: Meta verification handshake and event intake
//! - `/` and `/workflow`: the server-rendered workflow page
//! - `/health`: liveness
//!
//! Middleware: CORS, tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/meta/webhook",
            get(handlers::webhook::verify_webhook).post(handlers::webhook::receive_webhook),
        )
        .route("/", get(handlers::workflow::show_page))
        .route("/workflow", post(handlers::workflow::submit_workflow))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
