//! Sample catalog contents
//!
//! Used to bootstrap the interactive menu and the `demo` command so there is
//! something to browse right away.

use rust_decimal::Decimal;

use crate::core::models::{Book, Genre, Patron};
use crate::core::{Catalog, CatalogError};

/// Card number of the sample patron who owes fees
pub const OWING_CARD: u32 = 1003;

/// Books in the sample collection
pub fn books() -> Result<Vec<Book>, CatalogError> {
    Ok(vec![
        Book::new("111-222-333-A", "1984", "George Orwell", 1949, Genre::Fiction)?,
        Book::new(
            "444-555-666-B",
            "A Brief History of Time",
            "Stephen Hawking",
            1988,
            Genre::Nonfiction,
        )?,
        Book::new("777-888-999-C", "National Geographic", "Various", 2023, Genre::Periodical)?,
    ])
}

/// Patrons in the sample registry; card 1003 owes 10.50
pub fn patrons() -> Result<Vec<Patron>, CatalogError> {
    let mut owing = Patron::new("Wang Wu", OWING_CARD);
    owing.set_fee_balance(Decimal::new(1050, 2))?;
    Ok(vec![Patron::new("Zhang San", 1001), Patron::new("Li Si", 1002), owing])
}

/// A catalog pre-populated with the sample books and patrons
pub fn catalog() -> Result<Catalog, CatalogError> {
    let mut catalog = Catalog::new();
    for book in books()? {
        catalog.add_book(book);
    }
    for patron in patrons()? {
        catalog.add_patron(patron);
    }
    Ok(catalog)
}
