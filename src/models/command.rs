//! Typed commands produced by the parser.

/// A validated instruction derived from one line of inbound text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/start`
    ShowHelp,

    /// `/nama <name>`
    SetName { name: String },

    /// `/masuk <amount> <note>`
    RecordIncome { amount: i64, note: String },

    /// `/keluar <amount> <note>`
    RecordExpense { amount: i64, note: String },

    /// `/saldo`
    ShowBalance,

    /// `/histori`
    ShowHistory,
}
