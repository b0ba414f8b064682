//! Book model
//!
//! A book carries immutable bibliographic fields and a single mutable flag
//! recording whether it is currently on loan.

use serde::Serialize;

use super::{Genre, Isbn};
use crate::core::CatalogError;

/// A book held by the library
///
/// Equality and hashing consider only the ISBN.
#[derive(Debug, Clone, Serialize)]
pub struct Book {
    id: Isbn,
    title: String,
    author: String,
    copyright_year: i32,
    genre: Genre,
    checked_out: bool,
}

impl Book {
    /// Create a book, validating its identifier
    pub fn new(
        id: &str,
        title: impl Into<String>,
        author: impl Into<String>,
        copyright_year: i32,
        genre: Genre,
    ) -> Result<Self, CatalogError> {
        Ok(Self::with_isbn(Isbn::parse(id)?, title, author, copyright_year, genre))
    }

    /// Create a book from an already validated identifier
    #[must_use]
    pub fn with_isbn(
        id: Isbn,
        title: impl Into<String>,
        author: impl Into<String>,
        copyright_year: i32,
        genre: Genre,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            copyright_year,
            genre,
            checked_out: false,
        }
    }

    /// A bare book carrying only an identifier
    ///
    /// Since equality is by ISBN, this is enough to look a book up in the
    /// catalog.
    #[must_use]
    pub fn reference(id: Isbn) -> Self {
        Self::with_isbn(id, "", "", 0, Genre::default())
    }

    /// Get the identifier
    #[must_use]
    pub const fn id(&self) -> &Isbn {
        &self.id
    }

    /// Get the title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the author
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Get the copyright year
    #[must_use]
    pub const fn copyright_year(&self) -> i32 {
        self.copyright_year
    }

    /// Get the genre
    #[must_use]
    pub const fn genre(&self) -> Genre {
        self.genre
    }

    /// Whether the book is currently on loan
    #[must_use]
    pub const fn is_checked_out(&self) -> bool {
        self.checked_out
    }

    /// Mark the book as on loan
    pub fn check_out(&mut self) -> Result<(), CatalogError> {
        if self.checked_out {
            return Err(CatalogError::AlreadyCheckedOut(self.id.clone()));
        }
        self.checked_out = true;
        Ok(())
    }

    /// Mark the book as back on the shelf
    pub fn return_book(&mut self) -> Result<(), CatalogError> {
        if !self.checked_out {
            return Err(CatalogError::NotCheckedOut(self.id.clone()));
        }
        self.checked_out = false;
        Ok(())
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Book {}

impl std::hash::Hash for Book {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Title:  {}", self.title)?;
        writeln!(f, "Author: {}", self.author)?;
        writeln!(f, "ISBN:   {}", self.id)?;
        write!(f, "Genre:  {}", self.genre.label())
    }
}
