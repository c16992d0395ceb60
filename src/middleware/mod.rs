//! HTTP middleware components.

/// HMAC signature check for inbound messages
pub mod signature;
