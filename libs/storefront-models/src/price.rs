//! Price value object

use crate::error::{Error, Result};
use crate::format::format_currency;
use crate::product::{Currency, Product};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::cmp::Ordering;

/// An amount in a currency, optionally with the pre-discount original amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price {
    amount: Decimal,
    currency: Currency,
    original_amount: Option<Decimal>,
}

impl Price {
    pub fn new(amount: Decimal, currency: Currency, original_amount: Option<Decimal>) -> Result<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(Error::InvalidPrice(
                "Price amount cannot be negative".to_string(),
            ));
        }
        if let Some(original) = original_amount {
            if original.is_sign_negative() && !original.is_zero() {
                return Err(Error::InvalidPrice(
                    "Original price amount cannot be negative".to_string(),
                ));
            }
            if original < amount {
                return Err(Error::InvalidPrice(
                    "Original price cannot be less than current price".to_string(),
                ));
            }
        }
        Ok(Self {
            amount,
            currency,
            original_amount,
        })
    }

    /// Price of a product. Fails if the record's original price is below its price.
    pub fn of(product: &Product) -> Result<Self> {
        Self::new(product.price, product.currency, product.original_price)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn original_amount(&self) -> Option<Decimal> {
        self.original_amount
    }

    pub fn has_discount(&self) -> bool {
        matches!(self.original_amount, Some(original) if original > self.amount)
    }

    pub fn discount_amount(&self) -> Decimal {
        match self.original_amount {
            Some(original) if self.has_discount() => original - self.amount,
            _ => Decimal::ZERO,
        }
    }

    pub fn discount_percentage(&self) -> u32 {
        match self.original_amount {
            Some(original) if self.has_discount() => (self.discount_amount() / original
                * Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_u32()
                .unwrap_or(0),
            _ => 0,
        }
    }

    /// Compare amounts; prices in different currencies are not comparable.
    pub fn compare(&self, other: &Price) -> Result<Ordering> {
        if self.currency != other.currency {
            return Err(Error::CurrencyMismatch {
                left: self.currency.code().to_string(),
                right: other.currency.code().to_string(),
            });
        }
        Ok(self.amount.cmp(&other.amount))
    }

    pub fn is_greater_than(&self, other: &Price) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    pub fn is_less_than(&self, other: &Price) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    pub fn formatted(&self) -> String {
        format_currency(self.amount, self.currency)
    }

    pub fn formatted_original(&self) -> Option<String> {
        self.original_amount
            .filter(|_| self.has_discount())
            .map(|original| format_currency(original, self.currency))
    }
}
