//! API module
//!
//! Contains the HTTP router and request handlers for the activity roster

pub mod activities;
pub mod middleware;

use crate::config::Config;
use crate::state::SharedState;
use axum::{
    response::Redirect,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

/// Landing page the root path redirects to
pub const INDEX_PATH: &str = "/static/index.html";

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status
    pub status: String,
    /// Crate version
    pub version: String,
    /// Human-readable message
    pub message: String,
}

/// GET / - Redirect to the static front end
pub async fn root() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

/// GET /api/health - Liveness probe
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        message: "Activities API is healthy".to_string(),
    })
}

/// Build the application router
pub fn router(state: SharedState, config: &Config) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/health", get(health_check))
        .route("/activities", get(activities::list_activities))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(activities::unregister),
        )
        .nest_service("/static", ServeDir::new(&config.static_dir))
        // Last layer added is outermost: CORS wraps TraceLayer wraps request ids
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
