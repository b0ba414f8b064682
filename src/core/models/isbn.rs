//! Catalog identifiers
//!
//! Books are keyed by a simplified ISBN of the form `n-n-n-x`: three runs of
//! ASCII digits followed by a single alphanumeric check character.
//!
//! # Examples
//!
//! ```
//! use libcat::core::models::Isbn;
//!
//! assert!(Isbn::parse("111-222-333-A").is_ok());
//! assert!(Isbn::parse("abc").is_err());
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::CatalogError;

static ISBN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+-[0-9]+-[0-9]+-[A-Za-z0-9]$").unwrap_or_else(|e| {
        unreachable!("ISBN pattern is a valid regex: {e}");
    })
});

/// A validated book identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Isbn(String);

impl Isbn {
    /// Validate and wrap an identifier
    ///
    /// The input is matched as-is; surrounding whitespace makes it invalid.
    pub fn parse(s: &str) -> Result<Self, CatalogError> {
        if Self::is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(CatalogError::InvalidFormat(s.to_string()))
        }
    }

    /// Check whether a string is a well-formed identifier
    #[must_use]
    pub fn is_valid(s: &str) -> bool {
        ISBN_PATTERN.is_match(s)
    }

    /// Get the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Isbn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Isbn {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Isbn {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Isbn> for String {
    fn from(isbn: Isbn) -> Self {
        isbn.0
    }
}

impl AsRef<str> for Isbn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
