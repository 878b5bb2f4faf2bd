//! Catalog product model

use crate::format::format_number;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies the catalog lists prices in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Ars,
    Usd,
    Brl,
    Mxn,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Ars => "ARS",
            Currency::Usd => "USD",
            Currency::Brl => "BRL",
            Currency::Mxn => "MXN",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Ars => "$",
            Currency::Usd => "US$",
            Currency::Brl => "R$",
            Currency::Mxn => "MX$",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    New,
    Used,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::Used => "used",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipping {
    pub free_shipping: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logistic_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_pick_up: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Installments {
    pub quantity: u32,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_id: Option<Currency>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reviews {
    pub rating_average: f64,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SellerAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub id: String,
    pub name: String,
    pub value_name: String,
}

/// A catalog product.
///
/// List entries (search results, suggestions) only populate the summary
/// fields; detail lookups fill in quantities, pictures, attributes and the
/// remaining optional data.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub price: Decimal,
    pub currency: Currency,
    pub condition: Condition,
    pub thumbnail: Option<String>,
    pub original_price: Option<Decimal>,
    pub available_quantity: Option<u32>,
    pub sold_quantity: Option<u32>,
    pub permalink: Option<String>,
    pub pictures: Vec<Picture>,
    pub installments: Option<Installments>,
    pub shipping: Option<Shipping>,
    pub seller_address: Option<SellerAddress>,
    pub attributes: Vec<Attribute>,
    pub warranty: Option<String>,
    pub description: Option<String>,
    pub reviews: Option<Reviews>,
}

impl Product {
    pub fn has_discount(&self) -> bool {
        matches!(self.original_price, Some(original) if original > self.price)
    }

    /// Discount relative to the original price, rounded to a whole percent.
    pub fn discount_percentage(&self) -> u32 {
        match self.original_price {
            Some(original) if self.has_discount() => {
                let pct = (original - self.price) / original * Decimal::ONE_HUNDRED;
                pct.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                    .to_u32()
                    .unwrap_or(0)
            }
            _ => 0,
        }
    }

    pub fn discount_amount(&self) -> Decimal {
        match self.original_price {
            Some(original) if self.has_discount() => original - self.price,
            _ => Decimal::ZERO,
        }
    }

    pub fn has_free_shipping(&self) -> bool {
        self.shipping.as_ref().is_some_and(|s| s.free_shipping)
    }

    pub fn is_new(&self) -> bool {
        self.condition == Condition::New
    }

    pub fn is_available(&self) -> bool {
        self.available_quantity.unwrap_or(0) > 0
    }

    pub fn availability_status(&self) -> &'static str {
        match self.available_quantity.unwrap_or(0) {
            0 => "Sin stock",
            1 => "Último disponible",
            2..=4 => "Pocas unidades",
            _ => "Disponible",
        }
    }

    pub fn average_rating(&self) -> Option<f64> {
        self.reviews.as_ref().map(|r| r.rating_average)
    }

    pub fn has_good_rating(&self) -> bool {
        self.average_rating().is_some_and(|rating| rating >= 4.0)
    }

    /// Whole stars to draw for the average rating (0 when unrated).
    pub fn rating_stars(&self) -> u32 {
        self.average_rating()
            .map(|rating| rating.round().clamp(0.0, 5.0) as u32)
            .unwrap_or(0)
    }

    pub fn main_image_url(&self) -> Option<&str> {
        self.pictures
            .first()
            .map(|p| p.url.as_str())
            .or(self.thumbnail.as_deref())
    }

    pub fn image_urls(&self) -> Vec<&str> {
        if !self.pictures.is_empty() {
            return self.pictures.iter().map(|p| p.url.as_str()).collect();
        }
        self.thumbnail.as_deref().into_iter().collect()
    }

    pub fn attribute(&self, attribute_id: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.id == attribute_id)
            .map(|a| a.value_name.as_str())
    }

    pub fn brand(&self) -> Option<&str> {
        self.attribute("BRAND")
    }

    /// e.g. `12x $ 113.999`
    pub fn installment_text(&self) -> Option<String> {
        self.installments.as_ref().map(|i| {
            let symbol = i.currency_id.unwrap_or(self.currency).symbol();
            format!("{}x {} {}", i.quantity, symbol, format_number(i.amount))
        })
    }

    /// e.g. `Palermo, Capital Federal`
    pub fn seller_location(&self) -> Option<String> {
        let address = self.seller_address.as_ref()?;
        match (&address.city, &address.state) {
            (Some(city), Some(state)) => Some(format!("{}, {}", city.name, state.name)),
            (Some(city), None) => Some(city.name.clone()),
            (None, Some(state)) => Some(state.name.clone()),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn product(id: &str, title: &str, price: i64) -> Product {
        Product {
            id: id.to_string(),
            title: title.to_string(),
            price: Decimal::from(price),
            currency: Currency::Ars,
            condition: Condition::New,
            thumbnail: None,
            original_price: None,
            available_quantity: None,
            sold_quantity: None,
            permalink: None,
            pictures: Vec::new(),
            installments: None,
            shipping: None,
            seller_address: None,
            attributes: Vec::new(),
            warranty: None,
            description: None,
            reviews: None,
        }
    }

    #[test]
    fn discount_requires_higher_original_price() {
        let mut p = product("MLA1", "iPhone", 900);
        assert!(!p.has_discount());
        assert_eq!(p.discount_percentage(), 0);

        p.original_price = Some(Decimal::from(900));
        assert!(!p.has_discount());

        p.original_price = Some(Decimal::from(1200));
        assert!(p.has_discount());
        assert_eq!(p.discount_percentage(), 25);
        assert_eq!(p.discount_amount(), Decimal::from(300));
    }

    #[test]
    fn discount_percentage_rounds() {
        let mut p = product("MLA1", "iPhone", 1_367_999);
        p.original_price = Some(Decimal::new(152_324_499, 2));
        assert_eq!(p.discount_percentage(), 10);

        // 12.5% and 10.5% round away from zero
        p.price = Decimal::from(875);
        p.original_price = Some(Decimal::from(1000));
        assert_eq!(p.discount_percentage(), 13);
        p.price = Decimal::from(895);
        assert_eq!(p.discount_percentage(), 11);
    }

    #[test]
    fn availability_status_thresholds() {
        let mut p = product("MLA1", "iPhone", 1);
        assert!(!p.is_available());
        assert_eq!(p.availability_status(), "Sin stock");
        p.available_quantity = Some(1);
        assert_eq!(p.availability_status(), "Último disponible");
        p.available_quantity = Some(4);
        assert_eq!(p.availability_status(), "Pocas unidades");
        p.available_quantity = Some(5);
        assert_eq!(p.availability_status(), "Disponible");
        assert!(p.is_available());
    }

    #[test]
    fn rating_helpers() {
        let mut p = product("MLA1", "iPhone", 1);
        assert_eq!(p.rating_stars(), 0);
        assert!(!p.has_good_rating());
        p.reviews = Some(Reviews {
            rating_average: 4.6,
            total: 120,
        });
        assert!(p.has_good_rating());
        assert_eq!(p.rating_stars(), 5);
    }

    #[test]
    fn images_prefer_pictures_over_thumbnail() {
        let mut p = product("MLA1", "iPhone", 1);
        assert!(p.image_urls().is_empty());
        p.thumbnail = Some("thumb.webp".to_string());
        assert_eq!(p.main_image_url(), Some("thumb.webp"));
        assert_eq!(p.image_urls(), vec!["thumb.webp"]);
        p.pictures = vec![
            Picture {
                id: "a".to_string(),
                url: "a.webp".to_string(),
            },
            Picture {
                id: "b".to_string(),
                url: "b.webp".to_string(),
            },
        ];
        assert_eq!(p.main_image_url(), Some("a.webp"));
        assert_eq!(p.image_urls(), vec!["a.webp", "b.webp"]);
    }

    #[test]
    fn brand_and_location() {
        let mut p = product("MLA1", "iPhone", 1);
        assert_eq!(p.brand(), None);
        p.attributes = vec![Attribute {
            id: "BRAND".to_string(),
            name: "Marca".to_string(),
            value_name: "Apple".to_string(),
        }];
        assert_eq!(p.brand(), Some("Apple"));

        p.seller_address = Some(SellerAddress {
            city: Some(Location {
                name: "Palermo".to_string(),
            }),
            state: Some(Location {
                name: "Capital Federal".to_string(),
            }),
        });
        assert_eq!(p.seller_location().as_deref(), Some("Palermo, Capital Federal"));
    }

    #[test]
    fn installment_text_uses_grouped_amount() {
        let mut p = product("MLA1", "iPhone", 1_367_999);
        p.installments = Some(Installments {
            quantity: 12,
            amount: Decimal::new(11_399_992, 2),
            rate: Some(0.0),
            currency_id: Some(Currency::Ars),
        });
        assert_eq!(p.installment_text().as_deref(), Some("12x $ 114.000"));
    }

    #[test]
    fn currency_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Currency::Ars).unwrap(), "\"ARS\"");
        assert_eq!(
            serde_json::from_str::<Condition>("\"used\"").unwrap(),
            Condition::Used
        );
    }
}
