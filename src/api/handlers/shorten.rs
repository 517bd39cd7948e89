//! Handler for link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the short link for a URL, creating it on first use.
///
/// # Endpoint
///
/// `POST /api`
///
/// # Request Body
///
/// Either `application/x-www-form-urlencoded`:
///
/// ```text
/// original_url=https%3A%2F%2Fexample.com%2Fa
/// ```
///
/// or JSON:
///
/// ```json
/// { "original_url": "https://example.com/a" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_url": "http://localhost:8080/c/abcXYZ",
///   "code": "abcXYZ"
/// }
/// ```
///
/// Submitting the same URL again returns the same code.
///
/// # Errors
///
/// Returns 400 Bad Request for an empty or oversized URL.
/// Returns 500 Internal Server Error if the store fails or no free code is found.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: ShortenRequest,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let code = state.shortener.shorten(&payload.original_url).await?;
    let short_url = state.short_url(&code);

    tracing::info!(code = %code, "Shortened URL");

    Ok(Json(ShortenResponse { short_url, code }))
}
