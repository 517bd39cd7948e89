//! API route configuration.

use crate::api::handlers::{resolve_handler, shorten_handler};
use crate::api::middleware::rate_limit;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /`                - Shorten a URL (form or JSON body), rate limited per IP
/// - `GET  /resolve/{code}`  - Look up the original URL for a code
pub fn api_routes() -> Router<AppState> {
    let shorten = Router::new()
        .route("/", post(shorten_handler))
        .layer(rate_limit::layer());

    Router::new()
        .merge(shorten)
        .route("/resolve/{code}", get(resolve_handler))
}
