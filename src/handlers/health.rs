//! Liveness endpoints for service monitoring.

use crate::{app::AppState, error::AppError};
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Plain-text liveness probe served at `/`.
pub async fn root() -> &'static str {
    "OK - WA Bot Keuangan running"
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Number of senders with an account in memory
    pub accounts: usize,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "accounts": 3,
///   "timestamp": "2026-10-15T19:00:00Z"
/// }
/// ```
///
/// # Response (500 Internal Server Error)
///
/// If the ledger state is poisoned, returns the standard error response.
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    let accounts = state.ledger.account_count()?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        accounts,
        timestamp: Utc::now(),
    }))
}
