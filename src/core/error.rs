//! Catalog error taxonomy
//!
//! Every variant is a local validation or business-rule violation. None of
//! them are transient, so callers should report them rather than retry.

use rust_decimal::Decimal;
use thiserror::Error;

use super::models::Isbn;

/// Errors raised by the catalog and its domain models
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Identifier did not match `n-n-n-x`
    #[error("invalid ISBN format: {0:?} (expected n-n-n-x)")]
    InvalidFormat(String),

    /// Fee balances cannot go below zero
    #[error("fee balance cannot be negative: {0}")]
    NegativeAmount(Decimal),

    /// Book is already on loan
    #[error("book {0} is already checked out")]
    AlreadyCheckedOut(Isbn),

    /// Book is not on loan, so it cannot be returned
    #[error("book {0} is not checked out")]
    NotCheckedOut(Isbn),

    /// No book with this ISBN is in the catalog
    #[error("no book with ISBN {0} in the catalog")]
    BookNotFound(Isbn),

    /// No patron with this card number is registered
    #[error("no patron registered with card number {0}")]
    PatronNotRegistered(u32),

    /// Patron has an unpaid balance and may not borrow
    #[error("patron {name} (card {card_number}) owes {balance} in fees")]
    OutstandingFees {
        /// Patron name
        name: String,
        /// Patron card number
        card_number: u32,
        /// Outstanding balance
        balance: Decimal,
    },

    /// Book exists but is currently on loan
    #[error("book {0} is not available for checkout")]
    BookUnavailable(Isbn),
}

impl CatalogError {
    /// Short machine-readable code for the error kind
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidFormat(_) => "INVALID_FORMAT",
            Self::NegativeAmount(_) => "NEGATIVE_AMOUNT",
            Self::AlreadyCheckedOut(_) => "ALREADY_CHECKED_OUT",
            Self::NotCheckedOut(_) => "NOT_CHECKED_OUT",
            Self::BookNotFound(_) => "BOOK_NOT_FOUND",
            Self::PatronNotRegistered(_) => "PATRON_NOT_REGISTERED",
            Self::OutstandingFees { .. } => "OUTSTANDING_FEES",
            Self::BookUnavailable(_) => "BOOK_UNAVAILABLE",
        }
    }
}
