//! Shared application state and the HTTP router.

use std::sync::Arc;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{handlers, middleware, services::ledger_service::Ledger};

/// State shared with every handler via axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<Ledger>,

    /// HMAC key for inbound signatures; `None` disables the check
    pub webhook_secret: Option<Arc<str>>,
}

impl AppState {
    pub fn new(ledger: Ledger, webhook_secret: Option<String>) -> Self {
        Self {
            ledger: Arc::new(ledger),
            webhook_secret: webhook_secret.map(Arc::from),
        }
    }
}

/// Build the HTTP router.
///
/// - `GET /` and `GET /health`: liveness, no signature required
/// - `POST /api/v1/messages`: inbound messages, behind the signature check
pub fn router(state: AppState) -> Router {
    let signed_routes = Router::new()
        .route(
            "/api/v1/messages",
            post(handlers::messages::receive_message),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::signature::signature_middleware,
        ));

    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health_check))
        .merge(signed_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
