//! Top-level router configuration combining API, redirect and page routes.
//!
//! # Route Structure
//!
//! - `GET  /`                   - Shortening form
//! - `POST /api`                - Shorten a URL (rate limited)
//! - `GET  /api/resolve/{code}` - Resolve a code as JSON
//! - `GET  /c/{code}`           - Short link redirect (302 Found)
//! - `GET  /health`             - Store health check
//! - `/static/*`                - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// Requires connect info (`SocketAddr`) on every request for rate limiting.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(web::routes::public_routes())
        .route("/c/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
