//! Reply rendering.
//!
//! All user-facing text lives here. Monetary values use the Indonesian
//! grouping convention (`.` as thousands separator, no decimals).

use chrono::{DateTime, FixedOffset, Utc};

use crate::models::account::Account;
use crate::models::transaction::{Direction, Transaction};

/// Number of history entries shown by `/histori`.
pub const HISTORY_DISPLAY_LIMIT: usize = 10;

pub const HELP: &str = "Halo 👋 aku Bot Keuangan.\n\n\
Perintah:\n\
/nama Febri\n\
/masuk 5000000 gaji\n\
/keluar 10000 pulsa\n\
/saldo\n\
/histori";

pub const UNKNOWN_COMMAND: &str = "Perintah tidak dikenal. Ketik /start";

pub const NO_TRANSACTIONS: &str = "Belum ada transaksi.";

pub const AMOUNT_TOO_LARGE: &str = "Nominal terlalu besar. Saldo tidak berubah.";

/// Format an integer with `.` thousands separators, e.g. `-4990000` → `-4.990.000`.
pub fn format_rupiah(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format an instant in local time as `d/m/yyyy, HH.MM.SS`.
pub fn format_timestamp(timestamp: DateTime<Utc>, offset: FixedOffset) -> String {
    timestamp
        .with_timezone(&offset)
        .format("%-d/%-m/%Y, %H.%M.%S")
        .to_string()
}

/// Format hint sent back when an amount is missing or invalid.
pub fn format_hint(direction: Direction) -> &'static str {
    match direction {
        Direction::Credit => "Format: /masuk 5000000 gaji",
        Direction::Debit => "Format: /keluar 10000 pulsa",
    }
}

pub fn name_set(name: &str) -> String {
    format!("✅ Nama: *{name}*")
}

/// Confirmation for a freshly recorded entry.
pub fn recorded(entry: &Transaction) -> String {
    let label = match entry.direction {
        Direction::Credit => "Saldo",
        Direction::Debit => "Sisa",
    };
    format!(
        "✅ {} Rp {} ({})\n{}: Rp {}",
        entry.direction.sign(),
        format_rupiah(entry.amount),
        entry.note,
        label,
        format_rupiah(entry.balance_after),
    )
}

pub fn balance(account: &Account) -> String {
    format!(
        "👤 {}\nPemasukan: Rp {}\nPengeluaran: Rp {}\nSaldo: Rp {}",
        account.display_name,
        format_rupiah(account.total_income()),
        format_rupiah(account.total_expense()),
        format_rupiah(account.balance()),
    )
}

/// Last [`HISTORY_DISPLAY_LIMIT`] entries, newest first, numbered from 1.
pub fn history(account: &Account, offset: FixedOffset) -> String {
    let lines: Vec<String> = account
        .recent(HISTORY_DISPLAY_LIMIT)
        .enumerate()
        .map(|(i, entry)| {
            format!(
                "{}. {}\n{}Rp {} ({})\nsisa: Rp {}",
                i + 1,
                format_timestamp(entry.timestamp, offset),
                entry.direction.sign(),
                format_rupiah(entry.amount),
                entry.note,
                format_rupiah(entry.balance_after),
            )
        })
        .collect();

    if lines.is_empty() {
        return NO_TRANSACTIONS.to_string();
    }

    format!(
        "📜 Histori ({HISTORY_DISPLAY_LIMIT} terakhir)\n\n{}",
        lines.join("\n\n")
    )
}
