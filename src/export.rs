//! Plain-text CSV export of expense views.
//!
//! Rows are assembled by hand instead of going through a `csv` writer. The
//! export format is fixed and unquoted: fields are written verbatim, with
//! participants joined by `;` inside a single column. A label or name that
//! itself contains a comma or semicolon will shift columns for downstream
//! parsers; ingestion makes no attempt to undo that.

use crate::expense::Expense;
use crate::roster::Roster;
use chrono::NaiveDate;

/// Header line of the export format, without trailing newline.
pub const CSV_HEADER: &str = "Date,Article,Price,Payer,Involved Roommates,Amount Per Person";

/// Renders an expense view as CSV text.
///
/// One row per expense in iteration order, after the header. Payer and
/// participants appear as display names resolved against `roster`, with
/// participants in roster-index order. The last column is the stored
/// per-person share, not a recomputed one.
pub fn to_csv<'a, I>(roster: &Roster, expenses: I) -> String
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut out = String::new();
    out.push_str(CSV_HEADER);
    out.push('\n');

    for expense in expenses {
        let payer = roster.name(expense.payer).unwrap_or_default();
        let involved: Vec<&str> = expense
            .participants
            .iter()
            .map(|&i| roster.name(i).unwrap_or_default())
            .collect();
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            expense.date,
            expense.label,
            expense.amount,
            payer,
            involved.join(";"),
            expense.share
        ));
    }

    out
}

/// Suggested file name for an exported `[start, end]` view.
///
/// Absent bounds are rendered as empty strings, so exporting an unfiltered
/// ledger yields `expenses__to_.csv`.
pub fn export_filename(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    format!(
        "expenses_{}_to_{}.csv",
        start.map(|d| d.to_string()).unwrap_or_default(),
        end.map(|d| d.to_string()).unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expense::{parse_date, NewExpense};
    use crate::ledger::Ledger;
    use crate::money::Money;
    use std::str::FromStr;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new(Roster::from_names(["Alice", "Bob", "Carol"]).unwrap());
        let pizza = NewExpense::new("Pizza", money("30.00"), 0, [0, 1, 2])
            .on(parse_date("2024-01-01").unwrap());
        ledger.add_expense(pizza).unwrap();
        let beer = NewExpense::new("Beer", money("12.00"), 1, [1, 2])
            .on(parse_date("2024-01-02").unwrap());
        ledger.add_expense(beer).unwrap();
        ledger
    }

    #[test]
    fn test_header_layout() {
        assert_eq!(
            CSV_HEADER,
            "Date,Article,Price,Payer,Involved Roommates,Amount Per Person"
        );
    }

    #[test]
    fn test_to_csv_renders_exact_rows() {
        let ledger = sample_ledger();
        let text = to_csv(ledger.roster(), ledger.expenses());

        let expected = "\
Date,Article,Price,Payer,Involved Roommates,Amount Per Person
2024-01-01,Pizza,30.00,Alice,Alice;Bob;Carol,10.00
2024-01-02,Beer,12.00,Bob,Bob;Carol,6.00
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_to_csv_empty_view_is_header_only() {
        let ledger = Ledger::new(Roster::from_names(["Alice", "Bob"]).unwrap());
        let text = to_csv(ledger.roster(), ledger.expenses());

        assert_eq!(text, format!("{}\n", CSV_HEADER));
    }

    #[test]
    fn test_to_csv_participants_follow_roster_order() {
        let mut ledger = Ledger::new(Roster::from_names(["Alice", "Bob", "Carol"]).unwrap());
        let draft = NewExpense::new("Taxi", money("9.00"), 2, [2, 0, 1])
            .on(parse_date("2024-03-01").unwrap());
        ledger.add_expense(draft).unwrap();

        let text = to_csv(ledger.roster(), ledger.expenses());
        assert!(text.contains(",Carol,Alice;Bob;Carol,"));
    }

    #[test]
    fn test_to_csv_does_not_escape_fields() {
        let mut ledger = Ledger::new(Roster::from_names(["Alice", "Bob"]).unwrap());
        let draft = NewExpense::new("Bread, milk", money("8.00"), 0, [0, 1])
            .on(parse_date("2024-03-01").unwrap());
        ledger.add_expense(draft).unwrap();

        let text = to_csv(ledger.roster(), ledger.expenses());
        assert!(text.contains("2024-03-01,Bread, milk,8.00,Alice,Alice;Bob,4.00"));
        assert!(!text.contains('"'));
    }

    #[test]
    fn test_export_filename_with_bounds() {
        let start = parse_date("2024-01-01").unwrap();
        let end = parse_date("2024-02-01").unwrap();

        assert_eq!(
            export_filename(Some(start), Some(end)),
            "expenses_2024-01-01_to_2024-02-01.csv"
        );
    }

    #[test]
    fn test_export_filename_without_bounds() {
        assert_eq!(export_filename(None, None), "expenses__to_.csv");

        let start = parse_date("2024-01-01").unwrap();
        assert_eq!(
            export_filename(Some(start), None),
            "expenses_2024-01-01_to_.csv"
        );
    }
}
