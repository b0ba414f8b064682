//! Patron model

use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::CatalogError;

/// A registered library patron
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patron {
    name: String,
    card_number: u32,
    fee_balance: Decimal,
}

impl Patron {
    /// Create a patron with no outstanding fees
    #[must_use]
    pub fn new(name: impl Into<String>, card_number: u32) -> Self {
        Self {
            name: name.into(),
            card_number,
            fee_balance: Decimal::ZERO,
        }
    }

    /// Get the patron's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the library card number
    #[must_use]
    pub const fn card_number(&self) -> u32 {
        self.card_number
    }

    /// Get the current fee balance
    #[must_use]
    pub const fn fee_balance(&self) -> Decimal {
        self.fee_balance
    }

    /// Replace the fee balance
    ///
    /// Negative amounts are rejected and leave the balance untouched.
    pub fn set_fee_balance(&mut self, amount: Decimal) -> Result<(), CatalogError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(CatalogError::NegativeAmount(amount));
        }
        self.fee_balance = amount;
        Ok(())
    }

    /// Whether the patron has an unpaid balance
    #[must_use]
    pub fn owes_fees(&self) -> bool {
        self.fee_balance > Decimal::ZERO
    }
}
