//! Loan transactions
//!
//! A transaction is the permanent record of a single checkout. It holds
//! snapshots of the book and patron as they were when the loan was made, so
//! later changes to either never rewrite history.

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

use super::{Book, Patron};

/// Calendar date of a loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LoanDate {
    /// Year
    pub year: i32,
    /// Month (1-12)
    pub month: u32,
    /// Day of month (1-31)
    pub day: u32,
}

impl LoanDate {
    /// Build a date from its parts
    ///
    /// The parts are stored as given; no calendar validation is applied.
    #[must_use]
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Today's date in local time
    #[must_use]
    pub fn today() -> Self {
        Local::now().date_naive().into()
    }
}

impl Default for LoanDate {
    fn default() -> Self {
        Self::today()
    }
}

impl From<NaiveDate> for LoanDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

impl std::fmt::Display for LoanDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

/// Immutable record of one checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    book: Book,
    patron: Patron,
    date: LoanDate,
}

impl Transaction {
    /// Only the catalog creates transactions
    pub(crate) const fn new(book: Book, patron: Patron, date: LoanDate) -> Self {
        Self { book, patron, date }
    }

    /// The book as it was when checked out
    #[must_use]
    pub const fn book(&self) -> &Book {
        &self.book
    }

    /// The patron as they were when the book was checked out
    #[must_use]
    pub const fn patron(&self) -> &Patron {
        &self.patron
    }

    /// Date of the checkout
    #[must_use]
    pub const fn date(&self) -> LoanDate {
        self.date
    }
}
