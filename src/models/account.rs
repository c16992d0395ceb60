//! Per-sender ledger state.
//!
//! # Balance Invariant
//!
//! `balance == total_income - total_expense` holds after every mutation.
//! `record` is the only mutator of the monetary fields; it computes every new
//! value first and assigns them together, so a rejected entry leaves the
//! account untouched.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::LedgerError;
use crate::models::transaction::{Direction, Transaction};

/// Display name used until the sender sets one with `/nama`.
pub const DEFAULT_DISPLAY_NAME: &str = "teman";

/// Ledger state of one sender.
#[derive(Debug, Clone)]
pub struct Account {
    /// Label shown in `/saldo`
    pub display_name: String,

    /// Sum of all credits, never negative
    total_income: i64,

    /// Sum of all debits, never negative
    total_expense: i64,

    /// Signed running total
    balance: i64,

    /// All entries in chronological order
    history: Vec<Transaction>,
}

impl Default for Account {
    fn default() -> Self {
        Self {
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            total_income: 0,
            total_expense: 0,
            balance: 0,
            history: Vec::new(),
        }
    }
}

impl Account {
    pub fn total_income(&self) -> i64 {
        self.total_income
    }

    pub fn total_expense(&self) -> i64 {
        self.total_expense
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Full history, oldest first.
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    /// Up to `limit` most recent entries, newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &Transaction> {
        self.history.iter().rev().take(limit)
    }

    /// Apply one income or expense and append it to the history.
    ///
    /// `now` is clamped to the previous entry's timestamp so that the history
    /// stays monotonic even if the wall clock steps backwards.
    ///
    /// # Errors
    ///
    /// - `AmountOverflow`: a running total would leave the `i64` range
    ///
    /// # Panics
    ///
    /// If the balance invariant breaks, which indicates a logic bug.
    pub fn record(
        &mut self,
        direction: Direction,
        amount: i64,
        note: String,
        now: DateTime<Utc>,
    ) -> Result<&Transaction, LedgerError> {
        debug_assert!(amount > 0, "amounts are validated by the parser");

        let (total_income, total_expense) = match direction {
            Direction::Credit => (
                self.total_income
                    .checked_add(amount)
                    .ok_or(LedgerError::AmountOverflow)?,
                self.total_expense,
            ),
            Direction::Debit => (
                self.total_income,
                self.total_expense
                    .checked_add(amount)
                    .ok_or(LedgerError::AmountOverflow)?,
            ),
        };
        let balance = self
            .balance
            .checked_add(direction.signed(amount))
            .ok_or(LedgerError::AmountOverflow)?;

        let timestamp = match self.history.last() {
            Some(last) if last.timestamp > now => last.timestamp,
            _ => now,
        };

        self.total_income = total_income;
        self.total_expense = total_expense;
        self.balance = balance;
        self.history.push(Transaction {
            id: Uuid::new_v4(),
            direction,
            amount,
            note,
            timestamp,
            balance_after: balance,
        });

        self.assert_invariant();

        // Just pushed, so the history is non-empty.
        Ok(&self.history[self.history.len() - 1])
    }

    fn assert_invariant(&self) {
        assert!(
            self.total_income >= 0 && self.total_expense >= 0,
            "running totals went negative: income={} expense={}",
            self.total_income,
            self.total_expense,
        );
        assert_eq!(
            Some(self.balance),
            self.total_income.checked_sub(self.total_expense),
            "balance invariant violated",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn new_account_is_empty() {
        let account = Account::default();
        assert_eq!(account.display_name, "teman");
        assert_eq!(account.balance(), 0);
        assert!(account.history().is_empty());
    }

    #[test]
    fn record_updates_totals_and_snapshots_balance() {
        let mut account = Account::default();
        account
            .record(Direction::Credit, 5_000, "gaji".into(), at(0))
            .unwrap();
        let entry = account
            .record(Direction::Debit, 7_000, "sewa".into(), at(1))
            .unwrap()
            .clone();

        assert_eq!(entry.balance_after, -2_000);
        assert_eq!(account.total_income(), 5_000);
        assert_eq!(account.total_expense(), 7_000);
        assert_eq!(account.balance(), -2_000);
        assert_eq!(account.history()[0].balance_after, 5_000);
    }

    #[test]
    fn overflow_leaves_account_untouched() {
        let mut account = Account::default();
        account
            .record(Direction::Credit, i64::MAX, "jackpot".into(), at(0))
            .unwrap();

        let err = account
            .record(Direction::Credit, 1, "lagi".into(), at(1))
            .unwrap_err();

        assert!(matches!(err, LedgerError::AmountOverflow));
        assert_eq!(account.total_income(), i64::MAX);
        assert_eq!(account.balance(), i64::MAX);
        assert_eq!(account.history().len(), 1);
    }

    #[test]
    fn timestamps_never_go_backwards() {
        let mut account = Account::default();
        account
            .record(Direction::Credit, 1, "a".into(), at(60))
            .unwrap();
        let entry = account
            .record(Direction::Credit, 1, "b".into(), at(60) - Duration::seconds(30))
            .unwrap();

        assert_eq!(entry.timestamp, at(60));
    }

    #[test]
    fn recent_is_newest_first_and_capped() {
        let mut account = Account::default();
        for i in 1..=4 {
            account
                .record(Direction::Credit, i, format!("n{i}"), at(i))
                .unwrap();
        }

        let notes: Vec<_> = account.recent(3).map(|t| t.note.as_str()).collect();
        assert_eq!(notes, ["n4", "n3", "n2"]);
    }
}
