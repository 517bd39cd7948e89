//! DTOs for the shortening and resolution endpoints.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::error::AppError;

/// Request to shorten a single URL.
///
/// A missing `original_url` deserializes as empty and is rejected by the
/// shortening service. URLs longer than 8192 characters are rejected.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[serde(default)]
    #[validate(length(max = 8192))]
    pub original_url: String,
}

impl<S> FromRequest<S> for ShortenRequest
where
    S: Send + Sync,
{
    type Rejection = AppError;

    /// Reads the body as JSON when the content type says so, and as an
    /// urlencoded form otherwise (the browser form posts urlencoded data).
    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        if is_json {
            let Json(payload) = Json::<ShortenRequest>::from_request(req, state)
                .await
                .map_err(|e| {
                    AppError::bad_request("Invalid JSON body", json!({ "reason": e.body_text() }))
                })?;
            Ok(payload)
        } else {
            let Form(payload) = Form::<ShortenRequest>::from_request(req, state)
                .await
                .map_err(|e| {
                    AppError::bad_request("Invalid form body", json!({ "reason": e.body_text() }))
                })?;
            Ok(payload)
        }
    }
}

/// Successful shortening result.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub code: String,
}

/// Successful resolution result.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub code: String,
    pub original_url: String,
}
