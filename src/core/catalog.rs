//! Catalog aggregate
//!
//! The catalog owns every book, patron, and transaction, and is the only
//! place cross-entity rules are enforced. Collections keep insertion order
//! and do not deduplicate; lookups always resolve to the first match.

use log::{debug, info};
use rust_decimal::Decimal;

use super::CatalogError;
use super::models::{Book, Isbn, LoanDate, Patron, Transaction};

/// In-memory library catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
    patrons: Vec<Patron>,
    transactions: Vec<Transaction>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub const fn new() -> Self {
        Self {
            books: Vec::new(),
            patrons: Vec::new(),
            transactions: Vec::new(),
        }
    }

    /// Add a book to the collection
    ///
    /// Books with an ISBN already in the catalog are still appended.
    pub fn add_book(&mut self, book: Book) {
        debug!("adding book {} ({})", book.id(), book.title());
        self.books.push(book);
    }

    /// Register a patron
    ///
    /// Patrons with a card number already in the catalog are still appended.
    pub fn add_patron(&mut self, patron: Patron) {
        debug!("registering patron {} (card {})", patron.name(), patron.card_number());
        self.patrons.push(patron);
    }

    /// Lend a book to a patron
    ///
    /// Preconditions are checked in a fixed order, and the first one that
    /// fails determines the error:
    ///
    /// 1. the book is in the catalog ([`CatalogError::BookNotFound`])
    /// 2. the patron is registered ([`CatalogError::PatronNotRegistered`])
    /// 3. the patron owes nothing ([`CatalogError::OutstandingFees`])
    /// 4. the book is on the shelf ([`CatalogError::BookUnavailable`])
    ///
    /// On success a transaction snapshotting the catalog's copies of the book
    /// and patron is appended, then the book is marked as checked out.
    pub fn check_out(
        &mut self,
        book: &Book,
        patron: &Patron,
        date: LoanDate,
    ) -> Result<&Transaction, CatalogError> {
        let book_idx = self.book_index(book.id())?;
        let patron = self.find_patron(patron.card_number())?.clone();

        if patron.owes_fees() {
            return Err(CatalogError::OutstandingFees {
                name: patron.name().to_string(),
                card_number: patron.card_number(),
                balance: patron.fee_balance(),
            });
        }

        let located = &self.books[book_idx];
        if located.is_checked_out() {
            return Err(CatalogError::BookUnavailable(located.id().clone()));
        }

        let snapshot = located.clone();
        self.books[book_idx].check_out()?;
        info!("checked out {} to card {} on {date}", book.id(), patron.card_number());
        self.transactions.push(Transaction::new(snapshot, patron, date));

        Ok(&self.transactions[self.transactions.len() - 1])
    }

    /// Put a loaned book back on the shelf
    ///
    /// The transaction log is not touched: it records checkouts only.
    pub fn return_book(&mut self, book: &Book) -> Result<&Book, CatalogError> {
        let idx = self.book_index(book.id())?;
        self.books[idx].return_book()?;
        info!("returned {}", book.id());
        Ok(&self.books[idx])
    }

    /// Replace a registered patron's fee balance
    pub fn set_patron_fees(
        &mut self,
        card_number: u32,
        amount: Decimal,
    ) -> Result<&Patron, CatalogError> {
        let patron = self
            .patrons
            .iter_mut()
            .find(|p| p.card_number() == card_number)
            .ok_or(CatalogError::PatronNotRegistered(card_number))?;
        patron.set_fee_balance(amount)?;
        debug!("card {card_number} fee balance set to {amount}");
        Ok(patron)
    }

    /// Find the first book with this ISBN
    pub fn find_book(&self, isbn: &Isbn) -> Result<&Book, CatalogError> {
        self.book_index(isbn).map(|idx| &self.books[idx])
    }

    /// Find the first patron with this card number
    pub fn find_patron(&self, card_number: u32) -> Result<&Patron, CatalogError> {
        self.patrons
            .iter()
            .find(|p| p.card_number() == card_number)
            .ok_or(CatalogError::PatronNotRegistered(card_number))
    }

    /// Names of patrons with an unpaid balance, in registration order
    #[must_use]
    pub fn patrons_with_fees(&self) -> Vec<String> {
        self.patrons.iter().filter(|p| p.owes_fees()).map(|p| p.name().to_string()).collect()
    }

    /// All books in insertion order
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// All patrons in registration order
    #[must_use]
    pub fn patrons(&self) -> &[Patron] {
        &self.patrons
    }

    /// Checkout history, oldest first
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    fn book_index(&self, isbn: &Isbn) -> Result<usize, CatalogError> {
        self.books
            .iter()
            .position(|b| b.id() == isbn)
            .ok_or_else(|| CatalogError::BookNotFound(isbn.clone()))
    }
}
