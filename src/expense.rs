//! Expense models for CSV parsing and internal representation.

use crate::error::{LedgerError, Result};
use crate::money::Money;
use crate::roster::Roster;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::str::FromStr;

/// A shared purchase, immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    /// Free-text description of the purchase. Never empty.
    pub label: String,

    /// Full price paid, at 2-decimal precision.
    pub amount: Money,

    /// Roster index of the roommate who paid.
    pub payer: usize,

    /// Roster indices of everyone splitting the cost. Never empty. The payer
    /// may or may not be included.
    pub participants: BTreeSet<usize>,

    /// `amount / |participants|`, rounded to cents once when the expense is
    /// recorded. All later math reuses this stored value; the rounding drift
    /// across many small expenses is accepted, not corrected.
    pub share: Money,

    /// Calendar date of the purchase (distinct from entry order).
    pub date: NaiveDate,
}

/// A draft expense as supplied by the caller.
///
/// Carries the caller's raw choices; `Ledger::add_expense` validates them
/// and derives the stored form. Duplicate participants collapse there.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub label: String,
    pub amount: Money,
    pub payer: usize,
    pub participants: Vec<usize>,
    /// `None` means "today" (UTC) at the moment the expense is recorded.
    pub date: Option<NaiveDate>,
}

impl NewExpense {
    /// Creates a draft with no explicit date.
    pub fn new(
        label: impl Into<String>,
        amount: Money,
        payer: usize,
        participants: impl IntoIterator<Item = usize>,
    ) -> Self {
        NewExpense {
            label: label.into(),
            amount,
            payer,
            participants: participants.into_iter().collect(),
            date: None,
        }
    }

    /// Sets an explicit purchase date.
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// Raw expense row as read from CSV.
///
/// Column names match the export header, so the tool can re-ingest its own
/// exports. A trailing "Amount Per Person" column is ignored when present;
/// shares are always recomputed from the price and the participant count.
#[derive(Debug, Deserialize)]
pub struct ExpenseRecord {
    /// Purchase date, `YYYY-MM-DD`. Empty or absent means "today".
    #[serde(rename = "Date", default)]
    pub date: String,

    /// Expense label
    #[serde(rename = "Article")]
    pub article: String,

    /// Full price paid
    #[serde(rename = "Price")]
    pub price: String,

    /// Name of the roommate who paid
    #[serde(rename = "Payer")]
    pub payer: String,

    /// Semicolon-joined names of the roommates splitting the cost
    #[serde(rename = "Involved Roommates")]
    pub involved: String,
}

impl ExpenseRecord {
    /// Resolves the raw row against a roster into a draft expense.
    ///
    /// Names resolve to the first exact roster match after trimming. The
    /// returned draft still goes through `Ledger::add_expense` validation.
    pub fn parse(&self, roster: &Roster) -> Result<NewExpense> {
        let date = match self.date.trim() {
            "" => None,
            s => Some(parse_date(s)?),
        };

        let price = self.price.trim();
        let amount = Money::from_str(price).map_err(|_| LedgerError::InvalidAmount {
            value: price.to_string(),
        })?;

        let payer_name = self.payer.trim();
        if payer_name.is_empty() {
            return Err(LedgerError::MissingPayer);
        }
        let payer = roster
            .index_of(payer_name)
            .ok_or_else(|| LedgerError::UnknownName {
                name: payer_name.to_string(),
            })?;

        let mut participants = Vec::new();
        for name in self
            .involved
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            let index = roster
                .index_of(name)
                .ok_or_else(|| LedgerError::UnknownName {
                    name: name.to_string(),
                })?;
            participants.push(index);
        }

        Ok(NewExpense {
            label: self.article.trim().to_string(),
            amount,
            payer,
            participants,
            date,
        })
    }
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| LedgerError::InvalidDate {
        value: s.trim().to_string(),
    })
}
