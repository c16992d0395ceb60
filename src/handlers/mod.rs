//! HTTP request handlers.

/// Liveness endpoints
pub mod health;
/// Inbound messages from the messaging gateway
pub mod messages;
