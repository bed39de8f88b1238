//! # Split Ledger
//!
//! A shared-expense ledger for a fixed roster of roommates: record who paid
//! for what and who took part, then derive net balances and consolidated
//! pairwise debts.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: Amounts are cents via `rust_decimal`, with
//!   one rounding step when an expense's per-person share is computed
//! - **Derive, don't store**: Balances and debts are recomputed from the
//!   append-only expense sequence; only the rounded share is persisted
//! - **Deterministic output**: Participants and debts iterate in roster
//!   index order
//! - **Forgiving ingestion**: Malformed CSV rows are logged and skipped,
//!   never fatal
//!
//! ## Example
//!
//! ```no_run
//! use split_ledger::{Ledger, Roster};
//! use std::io::Cursor;
//!
//! let csv = "Date,Article,Price,Payer,Involved Roommates\n\
//!            2024-01-01,Pizza,30.00,Alice,Alice;Bob;Carol\n";
//! let roster = Roster::from_names(["Alice", "Bob", "Carol"]).unwrap();
//! let mut ledger = Ledger::new(roster);
//! ledger.load_csv(Cursor::new(csv)).unwrap();
//! println!("{}", split_ledger::report::render_report(&ledger, None, None));
//! ```

pub mod balance;
pub mod error;
pub mod expense;
pub mod export;
pub mod ledger;
pub mod money;
pub mod report;
pub mod roster;

pub use balance::BalanceSummary;
pub use error::{LedgerError, Result};
pub use expense::{parse_date, Expense, ExpenseRecord, NewExpense};
pub use export::{export_filename, to_csv, CSV_HEADER};
pub use ledger::Ledger;
pub use money::Money;
pub use report::render_report;
pub use roster::Roster;
