//! Plain-text report rendering for terminal output.
//!
//! Mirrors the two sections an interactive session shows: the expense list
//! for the selected date range, and the balance summary. The date range
//! narrows only the list; the summary always covers the whole ledger.

use crate::ledger::Ledger;
use chrono::NaiveDate;

/// Display name for roster slot `index`.
///
/// Falls back to a positional label when the roommate has not been named.
fn display_name(ledger: &Ledger, index: usize) -> String {
    match ledger.roster().name(index) {
        Ok(name) if !name.is_empty() => name.to_string(),
        _ => format!("Roommate {}", index + 1),
    }
}

fn section_header(output: &mut String, title: &str) {
    output.push_str(title);
    output.push('\n');
    output.push_str(&"-".repeat(title.len()));
    output.push('\n');
}

/// Renders the expense list and balance summary as terminal text.
pub fn render_report(ledger: &Ledger, start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    let mut output = String::new();

    section_header(&mut output, "Expenses List");
    let expenses = ledger.expenses_between(start, end);
    if expenses.is_empty() {
        output.push_str("No expenses added yet.\n");
    } else {
        for expense in expenses {
            let involved: Vec<String> = expense
                .participants
                .iter()
                .map(|&i| display_name(ledger, i))
                .collect();

            output.push_str(&format!("Date: {}\n", expense.date));
            output.push_str(&format!("{} - {}\n", expense.label, expense.amount));
            output.push_str(&format!(
                "Paid by: {}\n",
                display_name(ledger, expense.payer)
            ));
            output.push_str(&format!("Split among: {}\n", involved.join(", ")));
            output.push_str(&format!("Each involved pays: {}\n", expense.share));
            output.push('\n');
        }
    }

    output.push('\n');
    section_header(&mut output, "Balance Summary");
    let summary = ledger.compute_balances();
    for (index, balance) in summary.balances.iter().enumerate() {
        output.push_str(&format!("{}: {}\n", display_name(ledger, index), balance));
    }
    output.push('\n');

    if summary.is_settled() {
        output.push_str("All balances are settled.\n");
    } else {
        for ((debtor, creditor), amount) in &summary.debts {
            output.push_str(&format!(
                "{} owes {} to {}\n",
                display_name(ledger, *debtor),
                amount,
                display_name(ledger, *creditor)
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expense::{parse_date, NewExpense};
    use crate::money::Money;
    use crate::roster::Roster;
    use std::str::FromStr;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new(Roster::from_names(["Alice", "Bob", "Carol"]).unwrap());
        let pizza = NewExpense::new("Pizza", money("30.00"), 0, [0, 1, 2])
            .on(parse_date("2024-01-01").unwrap());
        ledger.add_expense(pizza).unwrap();
        ledger
    }

    #[test]
    fn test_empty_ledger_report() {
        let ledger = Ledger::new(Roster::from_names(["Alice", "Bob"]).unwrap());
        let report = render_report(&ledger, None, None);

        assert!(report.contains("No expenses added yet."));
        assert!(report.contains("All balances are settled."));
        assert!(report.contains("Alice: 0.00"));
        assert!(report.contains("Bob: 0.00"));
    }

    #[test]
    fn test_report_lists_expense_details() {
        let report = render_report(&sample_ledger(), None, None);

        assert!(report.contains("Expenses List"));
        assert!(report.contains("Date: 2024-01-01"));
        assert!(report.contains("Pizza - 30.00"));
        assert!(report.contains("Paid by: Alice"));
        assert!(report.contains("Split among: Alice, Bob, Carol"));
        assert!(report.contains("Each involved pays: 10.00"));
    }

    #[test]
    fn test_report_balance_summary() {
        let report = render_report(&sample_ledger(), None, None);

        assert!(report.contains("Balance Summary"));
        assert!(report.contains("Alice: 20.00"));
        assert!(report.contains("Bob: -10.00"));
        assert!(report.contains("Carol: -10.00"));
        assert!(report.contains("Bob owes 10.00 to Alice"));
        assert!(report.contains("Carol owes 10.00 to Alice"));
        assert!(!report.contains("settled"));
    }

    #[test]
    fn test_date_range_narrows_list_but_not_summary() {
        let ledger = sample_ledger();
        let report = render_report(
            &ledger,
            Some(parse_date("2025-01-01").unwrap()),
            Some(parse_date("2025-12-31").unwrap()),
        );

        assert!(report.contains("No expenses added yet."));
        assert!(report.contains("Bob owes 10.00 to Alice"));
    }

    #[test]
    fn test_unnamed_roommates_get_positional_labels() {
        let mut ledger = Ledger::new(Roster::new(2).unwrap());
        ledger
            .add_expense(NewExpense::new("Rent", money("900.00"), 0, [0, 1]))
            .unwrap();
        let report = render_report(&ledger, None, None);

        assert!(report.contains("Paid by: Roommate 1"));
        assert!(report.contains("Roommate 2 owes 450.00 to Roommate 1"));
    }

    #[test]
    fn test_debt_lines_follow_index_order() {
        let mut ledger = Ledger::new(Roster::from_names(["Alice", "Bob", "Carol"]).unwrap());
        let draft = NewExpense::new("Taxi", money("9.00"), 2, [0, 1, 2])
            .on(parse_date("2024-01-01").unwrap());
        ledger.add_expense(draft).unwrap();
        let report = render_report(&ledger, None, None);

        let alice = report.find("Alice owes 3.00 to Carol").unwrap();
        let bob = report.find("Bob owes 3.00 to Carol").unwrap();
        assert!(alice < bob);
    }
}
