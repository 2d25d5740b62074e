//! Route definitions for the dashboard service.

pub mod dashboard;
pub mod health;

use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let cors = match state.config.frontend_url.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET])
            .allow_credentials(true),
        Err(e) => {
            tracing::warn!(error = %e, "Invalid FRONTEND_URL, CORS disabled");
            CorsLayer::new()
        }
    };

    let api_routes = Router::new().route("/admin/dashboard", get(dashboard::view));

    Router::new()
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .route("/admin", get(dashboard::page))
        .nest("/api/v1", api_routes)
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
