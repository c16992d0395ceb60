//! Inbound signature verification middleware.
//!
//! When a webhook secret is configured, every inbound message must carry
//!
//! ```text
//! X-Signature: sha256=<hex encoded HMAC-SHA256 of the raw body>
//! ```
//!
//! computed with that secret. Requests without a valid signature are
//! rejected with HTTP 401 before they reach the ledger.

use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::{app::AppState, error::AppError};

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the body signature.
pub const SIGNATURE_HEADER: &str = "X-Signature";

/// Upper bound on buffered request bodies.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Verify the `X-Signature` header of the request, if a secret is configured.
///
/// # Flow
///
/// 1. Without a configured secret, pass the request through unchanged
/// 2. Extract `sha256=<hex>` from the header
/// 3. Buffer the body and check its HMAC in constant time
/// 4. Rebuild the request from the buffered body and call the next handler
pub async fn signature_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(secret) = state.webhook_secret.as_deref() else {
        return Ok(next.run(request).await);
    };

    let (parts, body) = request.into_parts();

    let signature = parts
        .headers
        .get(SIGNATURE_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("sha256="))
        .ok_or_else(|| {
            tracing::warn!(uri = %parts.uri, "missing or malformed signature header");
            AppError::InvalidSignature
        })?;

    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| AppError::InvalidRequest(format!("Unreadable body: {e}")))?;

    if let Err(err) = verify_signature(secret, &bytes, signature) {
        tracing::warn!(uri = %parts.uri, "signature mismatch");
        return Err(err);
    }

    let request = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(request).await)
}

/// Compute the header value for `body`.
///
/// Format: `sha256=<hex_encoded_hmac>`
pub fn sign(secret: &str, body: &[u8]) -> Result<String, AppError> {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| AppError::InvalidSignature)?;
    mac.update(body);
    Ok(format!("sha256={}", hex::encode(mac.finalize().into_bytes())))
}

/// Check a hex encoded HMAC (without the `sha256=` prefix) against `body`.
pub fn verify_signature(secret: &str, body: &[u8], signature_hex: &str) -> Result<(), AppError> {
    let expected = hex::decode(signature_hex).map_err(|_| AppError::InvalidSignature)?;
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| AppError::InvalidSignature)?;
    mac.update(body);
    mac.verify_slice(&expected)
        .map_err(|_| AppError::InvalidSignature)
}
