//! Roster of roommates sharing a ledger.
//!
//! A roommate is identified by their stable 0-based position in the roster.
//! The roster size is fixed at creation. Names may change at any time;
//! expenses reference indices, never names, so renaming is always safe.

use crate::error::{LedgerError, Result};

/// The fixed-size ordered list of roommates for a ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Creates a roster of `size` roommates with empty names.
    ///
    /// Fails with `InvalidRosterSize` when `size` is zero.
    pub fn new(size: usize) -> Result<Self> {
        if size < 1 {
            return Err(LedgerError::InvalidRosterSize { size });
        }
        Ok(Roster {
            names: vec![String::new(); size],
        })
    }

    /// Creates a roster from a list of names, one roommate per entry.
    ///
    /// Names may be blank; the entry count fixes the roster size.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(LedgerError::InvalidRosterSize { size: 0 });
        }
        Ok(Roster { names })
    }

    /// Number of roommates.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false` for a successfully created roster.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Verifies that `index` addresses a roommate on this roster.
    pub fn check_index(&self, index: usize) -> Result<()> {
        if index < self.names.len() {
            Ok(())
        } else {
            Err(LedgerError::IndexOutOfRange {
                index,
                len: self.names.len(),
            })
        }
    }

    /// Returns the display name at `index`.
    pub fn name(&self, index: usize) -> Result<&str> {
        self.check_index(index)?;
        Ok(&self.names[index])
    }

    /// All names in roster order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Sets the display name at `index`.
    ///
    /// Fails with `IndexOutOfRange` when `index` is not a valid roster index.
    pub fn rename(&mut self, index: usize, name: impl Into<String>) -> Result<()> {
        self.check_index(index)?;
        self.names[index] = name.into();
        Ok(())
    }

    /// Position of the first roommate whose name equals `name` exactly.
    ///
    /// Used to resolve names from CSV rows back to indices.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}
