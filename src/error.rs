//! Error types for the ledger engine.

use crate::money::Money;
use thiserror::Error;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors that can occur while building or querying a ledger.
///
/// All of these are local, synchronous failures raised at the offending
/// call; none are transient. A failed `add_expense` stores nothing.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Roster created with fewer than one roommate
    #[error("Roster needs at least 1 roommate, got {size}")]
    InvalidRosterSize { size: usize },

    /// A roommate index outside the roster
    #[error("Roommate index {index} is out of range for a roster of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Expense label missing or blank
    #[error("Expense label must not be empty")]
    EmptyLabel,

    /// Expense amount zero or negative
    #[error("Expense amount must be positive, got {amount}")]
    NonPositiveAmount { amount: Money },

    /// Expense row without a payer
    #[error("No payer selected")]
    MissingPayer,

    /// Expense with an empty participant set
    #[error("Expense needs at least one involved roommate")]
    NoParticipants,

    /// Unparseable price field
    #[error("Invalid amount {value:?}")]
    InvalidAmount { value: String },

    /// Unparseable or out-of-calendar date field
    #[error("Invalid date {value:?}, expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// A payer or participant name that is not on the roster
    #[error("Unknown roommate {name:?}")]
    UnknownName { name: String },

    /// Bad command line
    #[error(
        "Invalid arguments. Usage: split-ledger <report|export> <name1,name2,...> <expenses.csv> [<start> <end>]"
    )]
    Usage,
}
