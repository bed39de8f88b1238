//! Derived net balances and consolidated pairwise debts.
//!
//! Nothing in this module is stored state: a summary is recomputed from the
//! full expense sequence every time one is requested.

use crate::expense::Expense;
use crate::money::Money;
use std::collections::BTreeMap;

/// Net balances and consolidated debts derived from an expense sequence.
///
/// `balances[i]` is roommate `i`'s signed net position: positive means they
/// are owed money, negative means they owe.
///
/// `debts` maps `(debtor, creditor)` to the total the debtor owes the
/// creditor across every expense where the creditor paid and the debtor
/// participated. This is direct accumulation, not settlement: opposite
/// directions are kept as separate entries ((a, b) and (b, a) never cancel)
/// and debts are never chained through a third roommate.
///
/// # Invariants
///
/// - The signed balances sum to exactly zero: every share subtracted from a
///   participant is added to the payer.
/// - Debt amounts are never negative. A share that rounds down to zero
///   still records its pair at 0.00 rather than disappearing, so such a
///   ledger does not count as settled.
/// - No debt entry is keyed `(i, i)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceSummary {
    /// Signed net position per roster index.
    pub balances: Vec<Money>,

    /// Accumulated (debtor, creditor) -> amount owed.
    pub debts: BTreeMap<(usize, usize), Money>,
}

impl BalanceSummary {
    /// Folds an expense sequence into net balances and pairwise debts.
    ///
    /// Expenses are visited in stored order for reproducibility, though the
    /// totals are order-independent. For each expense, every participant
    /// other than the payer owes the payer one stored share. A participant
    /// who is also the payer contributes nothing for themselves: they
    /// effectively cover their own portion.
    pub fn compute(roster_len: usize, expenses: &[Expense]) -> Self {
        let mut balances = vec![Money::ZERO; roster_len];
        let mut debts: BTreeMap<(usize, usize), Money> = BTreeMap::new();

        for expense in expenses {
            for &member in &expense.participants {
                if member == expense.payer {
                    continue;
                }

                balances[member] -= expense.share;
                balances[expense.payer] += expense.share;
                *debts.entry((member, expense.payer)).or_insert(Money::ZERO) += expense.share;
            }
        }

        BalanceSummary { balances, debts }
    }

    /// `true` when nobody owes anybody.
    pub fn is_settled(&self) -> bool {
        self.debts.is_empty()
    }
}
