//! Demo command - scripted walkthrough of the catalog
//!
//! Loads the sample catalog, lends a book, shows that a patron with unpaid
//! fees is turned away, then lists debtors and the checkout history.

use std::io::{self, Write};

use libcat::config::Config;
use libcat::core::models::{Book, Isbn, LoanDate, Patron};
use libcat::output::{
    DebtorsResult, OperationResult, OutputMode, PatronListResult, Render, TransactionListResult,
};
use libcat::sample;
use log::warn;
use serde::Serialize;

/// Everything the demo did, in order
#[derive(Debug, Serialize)]
struct DemoReport {
    patrons: PatronListResult,
    steps: Vec<OperationResult>,
    debtors: DebtorsResult,
    transactions: TransactionListResult,
}

impl Render for DemoReport {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        self.patrons.write_human(out)?;
        writeln!(out)?;
        for step in &self.steps {
            step.write_human(out)?;
        }
        writeln!(out)?;
        self.debtors.write_human(out)?;
        writeln!(out)?;
        self.transactions.write_human(out)
    }
}

/// Run the scripted walkthrough
pub fn demo(config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let mut catalog = sample::catalog()?;
    let patrons = PatronListResult::new(catalog.patrons(), &config.fees.currency);
    let today = LoanDate::today();
    let mut steps = Vec::new();

    let attempts = [("111-222-333-A", 1001), ("444-555-666-B", sample::OWING_CARD)];
    for (isbn, card) in attempts {
        let book = Book::reference(Isbn::parse(isbn)?);
        let step = match catalog.check_out(&book, &Patron::new("", card), today) {
            Ok(tx) => OperationResult::ok(format!(
                "Checked out \"{}\" to {}",
                tx.book().title(),
                tx.patron().name()
            )),
            Err(e) => {
                warn!("expected failure: {e}");
                OperationResult::failed(&e)
            },
        };
        steps.push(step);
    }

    let report = DemoReport {
        patrons,
        steps,
        debtors: DebtorsResult {
            names: catalog.patrons_with_fees(),
        },
        transactions: TransactionListResult::new(catalog.transactions()),
    };
    report.render(mode);
    Ok(())
}
