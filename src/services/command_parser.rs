//! Command parser - turns one line of chat text into a typed [`Command`].
//!
//! Keywords are matched case-insensitively on the first whitespace-delimited
//! token only; arguments keep their original case. The parser has no state
//! and no side effects.

use crate::error::ParseError;
use crate::models::account::DEFAULT_DISPLAY_NAME;
use crate::models::command::Command;
use crate::models::transaction::Direction;

/// Parse inbound text.
///
/// # Errors
///
/// - `NotACommand`: empty after trimming, or does not start with `/`
/// - `UnknownCommand`: unknown keyword, or arguments given to a command that takes none
/// - `InvalidAmount`: `/masuk` or `/keluar` without a positive amount
pub fn parse(text: &str) -> Result<Command, ParseError> {
    let text = text.trim();
    if !text.starts_with('/') {
        return Err(ParseError::NotACommand);
    }

    let (keyword, rest) = text.split_once(char::is_whitespace).unwrap_or((text, ""));
    let has_args = !rest.trim().is_empty();

    match (keyword.to_lowercase().as_str(), has_args) {
        ("/start", false) => Ok(Command::ShowHelp),
        ("/nama", _) => Ok(Command::SetName {
            name: parse_name(rest),
        }),
        ("/masuk", _) => {
            let (amount, note) = parse_entry(Direction::Credit, rest)?;
            Ok(Command::RecordIncome { amount, note })
        }
        ("/keluar", _) => {
            let (amount, note) = parse_entry(Direction::Debit, rest)?;
            Ok(Command::RecordExpense { amount, note })
        }
        ("/saldo", false) => Ok(Command::ShowBalance),
        ("/histori", false) => Ok(Command::ShowHistory),
        _ => Err(ParseError::UnknownCommand {
            keyword: keyword.to_string(),
        }),
    }
}

/// Lenient amount conversion.
///
/// Every character that is not an ASCII digit is discarded and the remaining
/// digits are parsed as an integer, so `"5.000.000"`, `"Rp5000000"` and
/// `"5,000,000"` all give `5000000`. This is deliberately not a locale-aware
/// number parser: `"1.5"` gives `15`.
///
/// Returns `None` when no digits remain, when the value is zero, or when it
/// does not fit in an `i64`.
pub fn extract_amount(token: &str) -> Option<i64> {
    let digits: String = token.chars().filter(char::is_ascii_digit).collect();
    digits.parse::<i64>().ok().filter(|amount| *amount > 0)
}

fn parse_name(rest: &str) -> String {
    let name = rest.trim();
    if name.is_empty() {
        DEFAULT_DISPLAY_NAME.to_string()
    } else {
        name.to_string()
    }
}

fn parse_entry(direction: Direction, rest: &str) -> Result<(i64, String), ParseError> {
    let mut tokens = rest.split_whitespace();
    let amount = tokens
        .next()
        .and_then(extract_amount)
        .ok_or(ParseError::InvalidAmount { kind: direction })?;

    let note = tokens.collect::<Vec<_>>().join(" ");
    let note = if note.is_empty() {
        direction.default_note().to_string()
    } else {
        note
    };

    Ok((amount, note))
}
