//! Business logic services.
//!
//! Services hold the command interpreter and the ledger engine, separated
//! from the HTTP handlers that host them.

pub mod command_parser;
pub mod ledger_service;
pub mod reply;
