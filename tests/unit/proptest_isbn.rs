//! Property-based tests for ISBN validation and fee balances
//!
//! Uses proptest to verify properties that should hold for all inputs.

use libcat::core::CatalogError;
use libcat::core::models::{Isbn, Patron};
use proptest::prelude::*;
use rust_decimal::Decimal;

proptest! {
    /// Any three digit groups plus one alphanumeric character is accepted
    #[test]
    fn well_formed_isbn_accepted(s in "[0-9]{1,6}-[0-9]{1,6}-[0-9]{1,6}-[A-Za-z0-9]") {
        let isbn = Isbn::parse(&s).unwrap();
        prop_assert_eq!(isbn.as_str(), s.as_str());
    }

    /// Strings without exactly three dashes are always rejected
    #[test]
    fn wrong_dash_count_rejected(s in "[0-9A-Za-z-]{0,20}") {
        prop_assume!(s.matches('-').count() != 3);
        prop_assert_eq!(Isbn::parse(&s), Err(CatalogError::InvalidFormat(s.clone())));
    }

    /// A letter anywhere in the digit groups is rejected
    #[test]
    fn letter_in_digit_group_rejected(
        a in "[0-9]{0,3}",
        b in "[a-zA-Z]",
        c in "[0-9]{0,3}"
    ) {
        let s = format!("{a}{b}{c}-1-1-X");
        prop_assert!(!Isbn::is_valid(&s));
    }

    /// Negative balances fail and never change the stored balance
    #[test]
    fn negative_balance_never_applied(start in 0i64..100_000, bad in 1i64..100_000) {
        let mut patron = Patron::new("p", 1);
        let start = Decimal::new(start, 2);
        patron.set_fee_balance(start).unwrap();

        let result = patron.set_fee_balance(Decimal::new(-bad, 2));

        prop_assert!(matches!(result, Err(CatalogError::NegativeAmount(_))));
        prop_assert_eq!(patron.fee_balance(), start);
    }

    /// owes_fees is exactly "balance is positive"
    #[test]
    fn owes_fees_iff_positive(cents in 0i64..1_000_000) {
        let mut patron = Patron::new("p", 1);
        patron.set_fee_balance(Decimal::new(cents, 2)).unwrap();
        prop_assert_eq!(patron.owes_fees(), cents > 0);
    }
}
