//! Domain models for the catalog
//!
//! Plain data with local validation and no I/O.
//!
//! - [`Isbn`] - Validated `n-n-n-x` book identifier
//! - [`Genre`] - Fixed set of book genres
//! - [`Book`] - A book and whether it is on loan
//! - [`Patron`] - A card holder and their fee balance
//! - [`Transaction`] - Permanent record of a checkout

mod book;
mod genre;
mod isbn;
mod patron;
mod transaction;

pub use book::Book;
pub use genre::Genre;
pub use isbn::Isbn;
pub use patron::Patron;
pub use transaction::{LoanDate, Transaction};
