//! Conversational ledger.
//!
//! A messaging gateway forwards chat text to this service; short commands
//! such as `/masuk 5000000 gaji` or `/saldo` are parsed into typed commands,
//! applied to the sender's in-memory ledger and answered with a reply text.
//!
//! # Layout
//!
//! - [`services::command_parser`]: text → [`models::command::Command`]
//! - [`services::ledger_service`]: account registry and command application
//! - [`services::reply`]: reply rendering and money formatting
//! - [`app`], [`handlers`], [`middleware`]: the HTTP boundary

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
