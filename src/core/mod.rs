//! Core domain logic for the library catalog
//!
//! This module contains pure business logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Book, Patron, Transaction, Isbn, Genre)
//! - `catalog` - The aggregate that owns and mutates them
//! - `error` - The error taxonomy shared by both

mod catalog;
mod error;
pub mod models;

pub use catalog::Catalog;
pub use error::CatalogError;
