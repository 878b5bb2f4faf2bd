//! Shopping cart kept by clients

use crate::product::{Currency, Product};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub title: String,
    pub price: Decimal,
    pub currency_id: Currency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub quantity: u32,
}

impl CartItem {
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Cart lines keyed by product id, in the order they were first added.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == product_id)
    }

    /// Add one unit of `product`; an existing line has its quantity incremented.
    pub fn add(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == product.id) {
            item.quantity = item.quantity.saturating_add(1);
            return;
        }
        self.items.push(CartItem {
            id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
            currency_id: product.currency,
            thumbnail: product.main_image_url().map(str::to_string),
            quantity: 1,
        });
    }

    /// Remove the line for `product_id`. Returns whether a line was removed.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != product_id);
        self.items.len() != before
    }

    /// Set the quantity of an existing line. Quantities below 1 are ignored.
    ///
    /// Returns whether a line was updated.
    pub fn update_quantity(&mut self, product_id: &str, quantity: u32) -> bool {
        if quantity < 1 {
            return false;
        }
        match self.items.iter_mut().find(|item| item.id == product_id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Units across all lines.
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn total_amount(&self) -> Decimal {
        self.items.iter().map(CartItem::subtotal).sum()
    }
}
