//! Core ledger engine.
//!
//! Owns the roster and the append-only expense sequence. Expenses enter
//! through validation and are never mutated or removed afterwards; balances
//! and debts are derived from the full sequence on demand, never cached.

use crate::balance::BalanceSummary;
use crate::error::{LedgerError, Result};
use crate::expense::{Expense, ExpenseRecord, NewExpense};
use crate::export;
use crate::roster::Roster;
use chrono::{NaiveDate, Utc};
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use std::collections::BTreeSet;
use std::io::Read;

/// The shared-expense ledger for one roster of roommates.
///
/// Append-only: `add_expense` either stores a fully validated record or
/// stores nothing. All reads are pure; recomputing balances twice over the
/// same sequence gives identical results.
pub struct Ledger {
    /// The fixed roster the expense indices point into.
    roster: Roster,

    /// Expenses in entry order (independent of their `date` field).
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Creates an empty ledger over `roster`.
    pub fn new(roster: Roster) -> Self {
        Ledger {
            roster,
            expenses: Vec::new(),
        }
    }

    /// The roster this ledger records expenses against.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Sets the display name of the roommate at `index`.
    ///
    /// Safe at any time: expenses reference indices, not names.
    pub fn rename_participant(&mut self, index: usize, name: impl Into<String>) -> Result<()> {
        self.roster.rename(index, name)
    }

    /// The full stored expense sequence, in entry order.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Validates a draft and appends it as an immutable expense.
    ///
    /// Checks, in order: non-blank label, positive amount, payer index in
    /// range, non-empty participant set (duplicates collapsed), every
    /// participant index in range. On failure nothing is stored. On success
    /// the per-person share is rounded to cents once and stored with the
    /// record, and a missing date defaults to today (UTC).
    pub fn add_expense(&mut self, draft: NewExpense) -> Result<&Expense> {
        if draft.label.trim().is_empty() {
            return Err(LedgerError::EmptyLabel);
        }
        if !draft.amount.is_positive() {
            return Err(LedgerError::NonPositiveAmount {
                amount: draft.amount,
            });
        }
        self.roster.check_index(draft.payer)?;

        let participants: BTreeSet<usize> = draft.participants.iter().copied().collect();
        if participants.is_empty() {
            return Err(LedgerError::NoParticipants);
        }
        for &index in &participants {
            self.roster.check_index(index)?;
        }

        let share = draft.amount.split_between(participants.len());
        let date = draft.date.unwrap_or_else(|| Utc::now().date_naive());

        self.expenses.push(Expense {
            label: draft.label,
            amount: draft.amount,
            payer: draft.payer,
            participants,
            share,
            date,
        });

        Ok(self.expenses.last().expect("expense just appended"))
    }

    /// Read-only view of the expenses whose date falls in `[start, end]`,
    /// both bounds inclusive, in stored order.
    ///
    /// When either bound is absent every expense is returned. Filtering is
    /// display-side only: it never affects `compute_balances`, which always
    /// folds the complete sequence.
    pub fn expenses_between(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Vec<&Expense> {
        match (start, end) {
            (Some(start), Some(end)) => self
                .expenses
                .iter()
                .filter(|e| e.date >= start && e.date <= end)
                .collect(),
            _ => self.expenses.iter().collect(),
        }
    }

    /// Derives net balances and consolidated debts from the full sequence.
    pub fn compute_balances(&self) -> BalanceSummary {
        BalanceSummary::compute(self.roster.len(), &self.expenses)
    }

    /// Serializes the `[start, end]` view as export CSV text.
    pub fn export_csv(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
        export::to_csv(&self.roster, self.expenses_between(start, end))
    }

    /// Loads expense rows from a CSV reader in streaming fashion.
    ///
    /// Records are read one at a time. Rows that fail to parse or validate
    /// are logged at warn level and skipped; well-formed rows are appended
    /// in file order. An I/O failure on the underlying reader aborts the
    /// load, since that is a broken stream rather than a bad row. Returns
    /// the number of expenses appended.
    pub fn load_csv<R: Read>(&mut self, reader: R) -> Result<usize> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut added = 0;
        for (row_idx, result) in csv_reader.deserialize::<ExpenseRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            let record = match result {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                    continue;
                }
            };

            let draft = match record.parse(&self.roster) {
                Ok(draft) => draft,
                Err(e) => {
                    warn!("Row {}: {}", row_num, e);
                    continue;
                }
            };

            match self.add_expense(draft) {
                Ok(expense) => {
                    debug!(
                        "Row {}: Recorded {:?} at {} split {} ways",
                        row_num,
                        expense.label,
                        expense.amount,
                        expense.participants.len()
                    );
                    added += 1;
                }
                Err(e) => warn!("Row {}: {}", row_num, e),
            }
        }

        Ok(added)
    }
}
