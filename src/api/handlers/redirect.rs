//! Handlers that resolve short codes.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;

use crate::api::dto::shorten::ResolveResponse;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::location::location_header;
use crate::web::handlers::NotFoundTemplate;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /c/{code}`
///
/// # Responses
///
/// - **302 Found** with `Location: <original URL>` when the code is known.
///   Control characters, spaces and non-ASCII characters in the stored URL
///   are percent-encoded.
/// - **404 Not Found** rendering `templates/not_found.html` otherwise
///
/// Codes are matched case-sensitively.
///
/// # Errors
///
/// Returns 500 Internal Server Error if the store fails.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    match state.shortener.resolve(&code).await? {
        Some(original_url) => {
            let location = location_header(&original_url).map_err(|e| {
                tracing::error!(code = %code, error = %e, "Stored URL is not a valid redirect target");
                AppError::internal("Stored URL cannot be redirected to", json!({ "code": code }))
            })?;

            debug!(code = %code, "Redirecting");
            Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
        }
        None => {
            debug!(code = %code, "Unknown short code");
            Ok((StatusCode::NOT_FOUND, NotFoundTemplate { code }).into_response())
        }
    }
}

/// Returns the original URL for a code as JSON.
///
/// # Endpoint
///
/// `GET /api/resolve/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown.
/// Returns 500 Internal Server Error if the store fails.
pub async fn resolve_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ResolveResponse>, AppError> {
    let original_url = state
        .shortener
        .resolve(&code)
        .await?
        .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

    Ok(Json(ResolveResponse { code, original_url }))
}
