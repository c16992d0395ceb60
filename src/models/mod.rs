//! Domain entities and the bodies of the HTTP boundary.

/// Per-sender ledger state
pub mod account;
/// Typed commands
pub mod command;
/// Gateway request/response bodies
pub mod message;
/// History entries
pub mod transaction;
