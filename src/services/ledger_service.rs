//! Ledger engine - owns every account and applies commands to them.
//!
//! # Concurrency
//!
//! The registry maps sender ids to individually locked accounts. A command
//! holds its account's mutex for the whole apply-and-render step, so two
//! messages from the same sender are serialized while different senders
//! proceed in parallel. The registry write lock is only taken when a sender
//! is seen for the first time.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use chrono::{DateTime, FixedOffset, Utc};

use crate::error::{LedgerError, ParseError};
use crate::models::account::Account;
use crate::models::command::Command;
use crate::models::transaction::Direction;
use crate::services::{command_parser, reply};

/// Source of transaction timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// In-memory account registry plus the command interpreter.
pub struct Ledger {
    accounts: RwLock<HashMap<String, Arc<Mutex<Account>>>>,
    clock: Arc<dyn Clock>,
    /// Offset used to render history timestamps
    offset: FixedOffset,
}

impl Ledger {
    pub fn new(clock: Arc<dyn Clock>, offset: FixedOffset) -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            clock,
            offset,
        }
    }

    /// Number of senders seen so far.
    pub fn account_count(&self) -> Result<usize, LedgerError> {
        Ok(self
            .accounts
            .read()
            .map_err(|_| LedgerError::Poisoned)?
            .len())
    }

    /// Copy of a sender's account, if it exists.
    pub fn snapshot(&self, sender_id: &str) -> Result<Option<Account>, LedgerError> {
        let entry = self
            .accounts
            .read()
            .map_err(|_| LedgerError::Poisoned)?
            .get(sender_id)
            .cloned();

        match entry {
            Some(account) => Ok(Some(
                account.lock().map_err(|_| LedgerError::Poisoned)?.clone(),
            )),
            None => Ok(None),
        }
    }

    /// Parse `text` from `sender_id`, apply it and render the reply.
    ///
    /// Returns `Ok(None)` when nothing should be sent back.
    pub fn handle_message(&self, sender_id: &str, text: &str) -> Result<Option<String>, LedgerError> {
        match command_parser::parse(text) {
            Ok(command) => self.apply(sender_id, command).map(Some),
            Err(ParseError::NotACommand) => {
                tracing::trace!(sender_id, "ignoring non-command text");
                Ok(None)
            }
            Err(rejection) => {
                tracing::debug!(sender_id, %rejection, "command rejected");
                self.account(sender_id)?;
                Ok(Some(render_rejection(&rejection)))
            }
        }
    }

    /// Apply an already parsed command to the sender's account.
    pub fn apply(&self, sender_id: &str, command: Command) -> Result<String, LedgerError> {
        let account = self.account(sender_id)?;
        let mut account = account.lock().map_err(|_| LedgerError::Poisoned)?;

        let text = match command {
            Command::ShowHelp => reply::HELP.to_string(),
            Command::SetName { name } => {
                tracing::info!(sender_id, %name, "display name set");
                let text = reply::name_set(&name);
                account.display_name = name;
                text
            }
            Command::RecordIncome { amount, note } => {
                self.record(&mut account, sender_id, Direction::Credit, amount, note)
            }
            Command::RecordExpense { amount, note } => {
                self.record(&mut account, sender_id, Direction::Debit, amount, note)
            }
            Command::ShowBalance => reply::balance(&account),
            Command::ShowHistory => reply::history(&account, self.offset),
        };

        Ok(text)
    }

    fn record(
        &self,
        account: &mut Account,
        sender_id: &str,
        direction: Direction,
        amount: i64,
        note: String,
    ) -> String {
        match account.record(direction, amount, note, self.clock.now()) {
            Ok(entry) => {
                tracing::info!(
                    sender_id,
                    transaction_id = %entry.id,
                    ?direction,
                    amount,
                    balance_after = entry.balance_after,
                    "transaction recorded"
                );
                reply::recorded(entry)
            }
            Err(err) => {
                tracing::warn!(sender_id, ?direction, amount, error = %err, "transaction rejected");
                reply::AMOUNT_TOO_LARGE.to_string()
            }
        }
    }

    /// Get-or-create the account of `sender_id`.
    fn account(&self, sender_id: &str) -> Result<Arc<Mutex<Account>>, LedgerError> {
        if let Some(account) = self
            .accounts
            .read()
            .map_err(|_| LedgerError::Poisoned)?
            .get(sender_id)
        {
            return Ok(Arc::clone(account));
        }

        let mut accounts = self.accounts.write().map_err(|_| LedgerError::Poisoned)?;
        let account = accounts.entry(sender_id.to_string()).or_insert_with(|| {
            tracing::info!(sender_id, "new account");
            Arc::new(Mutex::new(Account::default()))
        });
        Ok(Arc::clone(account))
    }
}

fn render_rejection(rejection: &ParseError) -> String {
    match rejection {
        ParseError::InvalidAmount { kind } => reply::format_hint(*kind).to_string(),
        ParseError::UnknownCommand { .. } | ParseError::NotACommand => {
            reply::UNKNOWN_COMMAND.to_string()
        }
    }
}
