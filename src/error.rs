//! Error types for the parser, the ledger engine and the HTTP boundary.
//!
//! Only `AppError` ever reaches a client as an HTTP error. Parse rejections
//! and ledger arithmetic rejections are turned into reply text by the engine.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::models::transaction::Direction;

/// Why a line of inbound text did not produce a [`Command`](crate::models::command::Command).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Empty text or text that does not start with `/`. Never answered.
    #[error("not a command")]
    NotACommand,

    /// Starts with `/` but the keyword (or its argument shape) is not known.
    #[error("unknown command: {keyword}")]
    UnknownCommand { keyword: String },

    /// `/masuk` or `/keluar` without a positive amount.
    #[error("expected positive amount for {kind:?}")]
    InvalidAmount { kind: Direction },
}

/// Failures while applying a command to an account.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// A running total would leave the `i64` range. The account is unchanged.
    #[error("amount overflows running totals")]
    AmountOverflow,

    /// A lock guarding the registry or an account was poisoned by a panic.
    #[error("ledger state poisoned")]
    Poisoned,
}

/// Errors returned by the HTTP layer.
///
/// # Status Code Mapping
///
/// - `InvalidSignature` → 401 Unauthorized
/// - `InvalidRequest` → 400 Bad Request
/// - `Ledger` → 500 Internal Server Error (details are logged, not returned)
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or wrong `X-Signature` header while a webhook secret is configured.
    #[error("Invalid signature")]
    InvalidSignature,

    /// Request body or parameters are invalid.
    #[error("Invalid request")]
    InvalidRequest(String),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::InvalidSignature => (
                StatusCode::UNAUTHORIZED,
                "invalid_signature",
                self.to_string(),
            ),
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::Ledger(ref err) => {
                tracing::error!(error = %err, "ledger failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
