//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Store reachable
/// - **503 Service Unavailable**: Store query failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected, 42 mappings" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;
    let healthy = db_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { database: db_check },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks database connectivity by counting mappings.
async fn check_database(state: &AppState) -> CheckStatus {
    match state.shortener.mapping_count().await {
        Ok(count) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Connected, {} mappings", count)),
        },
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            CheckStatus {
                status: "error".to_string(),
                message: Some(format!("Database error: {}", e)),
            }
        }
    }
}
