//! API routes for admin-proxy

pub mod health;
pub mod youtube;

use axum::Router;
use axum::routing::get;
use http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the router with CORS and request tracing
pub fn create_router(state: AppState, cors_origin: Option<HeaderValue>) -> Router {
    let cors = match cors_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET])
            .allow_headers(Any),
        None => CorsLayer::permissive(),
    };

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/youtube", get(youtube::lookup_video))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
