//! Split Ledger CLI
//!
//! Loads roommate expenses from a CSV file, then either prints the expense
//! report or writes a date-filtered CSV export to the working directory.
//!
//! # Usage
//!
//! ```bash
//! split-ledger report Alice,Bob,Carol expenses.csv
//! split-ledger report Alice,Bob,Carol expenses.csv 2024-01-01 2024-01-31
//! split-ledger export Alice,Bob,Carol expenses.csv 2024-01-01 2024-01-31
//! ```
//!
//! Dates are `YYYY-MM-DD`; pass both bounds or neither. `export` prints the
//! name of the file it wrote.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use chrono::NaiveDate;
use split_ledger::{
    export_filename, parse_date, render_report, to_csv, Ledger, LedgerError, Result, Roster,
};
use std::env;
use std::fs::{self, File};
use std::io::BufReader;
use std::process;

enum Command {
    Report,
    Export,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        return Err(LedgerError::Usage);
    }

    let command = match args[1].as_str() {
        "report" => Command::Report,
        "export" => Command::Export,
        _ => return Err(LedgerError::Usage),
    };
    let roster = Roster::from_names(
        args[2]
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty()),
    )?;
    let (start, end) = parse_range(&args[4..])?;

    let file = File::open(&args[3])?;
    let mut ledger = Ledger::new(roster);
    ledger.load_csv(BufReader::new(file))?;

    match command {
        Command::Report => print!("{}", render_report(&ledger, start, end)),
        Command::Export => {
            let text = to_csv(ledger.roster(), ledger.expenses_between(start, end));
            let filename = export_filename(start, end);
            fs::write(&filename, text)?;
            println!("{}", filename);
        }
    }

    Ok(())
}

fn parse_range(args: &[String]) -> Result<(Option<NaiveDate>, Option<NaiveDate>)> {
    match args {
        [] => Ok((None, None)),
        [start, end] => Ok((Some(parse_date(start)?), Some(parse_date(end)?))),
        _ => Err(LedgerError::Usage),
    }
}
