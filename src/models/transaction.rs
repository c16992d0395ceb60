//! Ledger transaction entries.
//!
//! This module defines:
//! - `Direction`: whether an entry adds to or subtracts from the balance
//! - `Transaction`: one immutable history entry of an account

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Income (`/masuk`), increases the balance.
    Credit,
    /// Expense (`/keluar`), decreases the balance.
    Debit,
}

impl Direction {
    /// Note used when the user records an entry without one.
    pub fn default_note(self) -> &'static str {
        match self {
            Direction::Credit => "pemasukan",
            Direction::Debit => "pengeluaran",
        }
    }

    /// Sign shown in front of the amount in replies.
    pub fn sign(self) -> char {
        match self {
            Direction::Credit => '+',
            Direction::Debit => '-',
        }
    }

    /// Effect of `amount` on the balance.
    pub fn signed(self, amount: i64) -> i64 {
        match self {
            Direction::Credit => amount,
            Direction::Debit => -amount,
        }
    }
}

/// One recorded income or expense.
///
/// Entries are only ever created by [`Account::record`](super::account::Account::record)
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Unique identifier, used to correlate log lines
    pub id: Uuid,

    pub direction: Direction,

    /// Always positive
    pub amount: i64,

    pub note: String,

    /// Creation instant
    ///
    /// Never earlier than the previous entry of the same account.
    pub timestamp: DateTime<Utc>,

    /// Account balance right after this entry was applied
    ///
    /// Captured at append time and never recomputed, so the history stays a
    /// faithful audit trail.
    pub balance_after: i64,
}
