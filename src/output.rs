//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. Every result writes to an
//! arbitrary [`Write`] so the interactive menu can render into its own sink.

use std::io::{self, Write};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::CatalogError;
use crate::core::models::{Book, Patron, Transaction};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A result that can be rendered in either output mode
pub trait Render: Serialize {
    /// Write the human-readable form
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Write in the given mode
    fn write_to(&self, mode: OutputMode, out: &mut dyn Write) -> io::Result<()> {
        match mode {
            OutputMode::Human => self.write_human(out),
            OutputMode::Json => {
                let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
                writeln!(out, "{json}")
            },
        }
    }

    /// Render to stdout
    fn render(&self, mode: OutputMode) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.write_to(mode, &mut stdout) {
            log::warn!("failed to write output: {e}");
        }
    }
}

/// A book as shown in listings
#[derive(Debug, Serialize)]
pub struct BookInfo {
    /// ISBN
    pub isbn: String,
    /// Title
    pub title: String,
    /// Author
    pub author: String,
    /// Copyright year
    pub copyright_year: i32,
    /// Genre key (e.g. "fiction")
    pub genre: String,
    /// Whether the book is on loan
    pub checked_out: bool,
    #[serde(skip)]
    card: String,
}

impl From<&Book> for BookInfo {
    fn from(book: &Book) -> Self {
        Self {
            isbn: book.id().to_string(),
            title: book.title().to_string(),
            author: book.author().to_string(),
            copyright_year: book.copyright_year(),
            genre: book.genre().to_string(),
            checked_out: book.is_checked_out(),
            card: book.to_string(),
        }
    }
}

/// Result of listing books
#[derive(Debug, Serialize)]
pub struct BookListResult {
    /// Number of books listed
    pub total: usize,
    /// The books
    pub books: Vec<BookInfo>,
}

impl BookListResult {
    /// Build a listing from catalog books
    pub fn new<'a>(books: impl IntoIterator<Item = &'a Book>) -> Self {
        let books: Vec<BookInfo> = books.into_iter().map(BookInfo::from).collect();
        Self {
            total: books.len(),
            books,
        }
    }
}

impl Render for BookListResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.books.is_empty() {
            return writeln!(out, "No books in the catalog.");
        }
        writeln!(out, "Books ({}):\n", self.total)?;
        for b in &self.books {
            writeln!(out, "{}", b.card)?;
            let status = if b.checked_out { "Checked out" } else { "Available" };
            writeln!(out, "Status: {status}\n")?;
        }
        Ok(())
    }
}

/// A patron as shown in listings
#[derive(Debug, Serialize)]
pub struct PatronInfo {
    /// Name
    pub name: String,
    /// Library card number
    pub card_number: u32,
    /// Current fee balance
    pub fee_balance: Decimal,
    /// Whether the balance blocks checkouts
    pub owes_fees: bool,
}

impl From<&Patron> for PatronInfo {
    fn from(patron: &Patron) -> Self {
        Self {
            name: patron.name().to_string(),
            card_number: patron.card_number(),
            fee_balance: patron.fee_balance(),
            owes_fees: patron.owes_fees(),
        }
    }
}

/// Result of listing patrons
#[derive(Debug, Serialize)]
pub struct PatronListResult {
    /// Number of patrons listed
    pub total: usize,
    /// The patrons
    pub patrons: Vec<PatronInfo>,
    #[serde(skip)]
    currency: String,
}

impl PatronListResult {
    /// Build a listing, formatting balances with the given currency symbol
    pub fn new<'a>(patrons: impl IntoIterator<Item = &'a Patron>, currency: &str) -> Self {
        let patrons: Vec<PatronInfo> = patrons.into_iter().map(PatronInfo::from).collect();
        Self {
            total: patrons.len(),
            patrons,
            currency: currency.to_string(),
        }
    }
}

impl Render for PatronListResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.patrons.is_empty() {
            return writeln!(out, "No patrons registered.");
        }
        writeln!(out, "Patrons ({}):\n", self.total)?;
        for p in &self.patrons {
            writeln!(
                out,
                "  [{}] {}  fees: {}{:.2}",
                p.card_number, p.name, self.currency, p.fee_balance
            )?;
        }
        Ok(())
    }
}

/// A checkout as shown in the history
#[derive(Debug, Serialize)]
pub struct TransactionInfo {
    /// ISBN of the book lent
    pub isbn: String,
    /// Title of the book lent
    pub title: String,
    /// Borrower's name
    pub patron: String,
    /// Borrower's card number
    pub card_number: u32,
    /// Checkout date (`Y-M-D`)
    pub date: String,
}

impl From<&Transaction> for TransactionInfo {
    fn from(tx: &Transaction) -> Self {
        Self {
            isbn: tx.book().id().to_string(),
            title: tx.book().title().to_string(),
            patron: tx.patron().name().to_string(),
            card_number: tx.patron().card_number(),
            date: tx.date().to_string(),
        }
    }
}

/// Result of listing the checkout history
#[derive(Debug, Serialize)]
pub struct TransactionListResult {
    /// Number of transactions
    pub total: usize,
    /// The transactions, oldest first
    pub transactions: Vec<TransactionInfo>,
}

impl TransactionListResult {
    /// Build a listing from the catalog's log
    pub fn new<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Self {
        let transactions: Vec<TransactionInfo> =
            transactions.into_iter().map(TransactionInfo::from).collect();
        Self {
            total: transactions.len(),
            transactions,
        }
    }
}

impl Render for TransactionListResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.transactions.is_empty() {
            return writeln!(out, "No transactions recorded.");
        }
        writeln!(out, "Transactions:")?;
        for t in &self.transactions {
            writeln!(out, "  Patron: {}, Book: {}, Date: {}", t.patron, t.title, t.date)?;
        }
        Ok(())
    }
}

/// Names of patrons who owe fees
#[derive(Debug, Serialize)]
pub struct DebtorsResult {
    /// Patron names in registration order
    pub names: Vec<String>,
}

impl Render for DebtorsResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.names.is_empty() {
            return writeln!(out, "No patrons owe fees.");
        }
        writeln!(out, "Patrons with outstanding fees:")?;
        for name in &self.names {
            writeln!(out, "  {name}")?;
        }
        Ok(())
    }
}

/// Result of validating an ISBN
#[derive(Debug, Serialize)]
pub struct IsbnCheckResult {
    /// The identifier that was checked
    pub isbn: String,
    /// Whether it is well-formed
    pub valid: bool,
}

impl Render for IsbnCheckResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.valid {
            writeln!(out, "Valid ISBN: {}", self.isbn)
        } else {
            writeln!(out, "Invalid ISBN: {} (expected n-n-n-x, e.g. 111-222-333-A)", self.isbn)
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
    /// Error code when the operation failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl OperationResult {
    /// A successful operation
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            code: None,
        }
    }

    /// A failed operation
    #[must_use]
    pub fn failed(error: &CatalogError) -> Self {
        Self {
            success: false,
            message: error.to_string(),
            code: Some(error.code().to_string()),
        }
    }
}

impl Render for OperationResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.success {
            writeln!(out, "{}", self.message)
        } else {
            writeln!(out, "Error: {}", self.message)
        }
    }
}
