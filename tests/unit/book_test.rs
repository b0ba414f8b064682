//! Tests for the book model

use std::collections::HashSet;

use libcat::core::CatalogError;
use libcat::core::models::{Book, Genre, Isbn};

use crate::common::BookBuilder;

#[test]
fn test_example_isbn_constructs() {
    let book = Book::new("111-222-333-A", "1984", "George Orwell", 1949, Genre::Fiction).unwrap();
    assert_eq!(book.id().as_str(), "111-222-333-A");
    assert_eq!(book.title(), "1984");
    assert_eq!(book.author(), "George Orwell");
    assert_eq!(book.copyright_year(), 1949);
    assert_eq!(book.genre(), Genre::Fiction);
    assert!(!book.is_checked_out());
}

#[test]
fn test_malformed_isbn_fails() {
    let err = Book::new("abc", "t", "a", 1, Genre::Fiction).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidFormat(ref s) if s == "abc"));
}

#[test]
fn test_state_transitions() {
    let mut book = BookBuilder::new().build();
    assert!(matches!(book.return_book(), Err(CatalogError::NotCheckedOut(_))));
    book.check_out().unwrap();
    assert!(matches!(book.check_out(), Err(CatalogError::AlreadyCheckedOut(_))));
    book.return_book().unwrap();
    book.check_out().unwrap();
    assert!(book.is_checked_out());
}

#[test]
fn test_equality_is_by_isbn_only() {
    let a = BookBuilder::new().isbn("1-2-3-A").title("One").genre(Genre::Fiction).build();
    let b = BookBuilder::new().isbn("1-2-3-A").title("Two").genre(Genre::Children).build();
    let c = BookBuilder::new().isbn("1-2-3-B").title("One").genre(Genre::Fiction).build();
    assert_eq!(a, b);
    assert_ne!(a, c);

    let set: HashSet<Book> = [a, b, c].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_reference_matches_full_book() {
    let full = BookBuilder::new().isbn("7-7-7-7").title("Full").build();
    let probe = Book::reference(Isbn::parse("7-7-7-7").unwrap());
    assert_eq!(full, probe);
    assert_eq!(probe.title(), "");
}

#[test]
fn test_display_uses_genre_label() {
    let book = BookBuilder::new()
        .isbn("444-555-666-B")
        .title("A Brief History of Time")
        .genre(Genre::Nonfiction)
        .build();
    let text = book.to_string();
    assert!(text.contains("Title:  A Brief History of Time"));
    assert!(text.contains("ISBN:   444-555-666-B"));
    assert!(text.ends_with("Genre:  Non-fiction"));
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn test_serializes_loan_state() {
    let mut book = BookBuilder::new().build();
    book.check_out().unwrap();
    let json = serde_json::to_value(&book).unwrap();
    assert_eq!(json["checked_out"], true);
    assert_eq!(json["genre"], "fiction");
    assert_eq!(json["id"], book.id().as_str());
}
