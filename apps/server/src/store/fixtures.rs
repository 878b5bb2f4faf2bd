//! Fixture loading
//!
//! Fixtures are JSON documents embedded in the binary. Their field names are
//! snake_case (`currency_id`, `free_shipping`, ...); they are converted into
//! catalog [`Product`]s here so nothing downstream sees the fixture format.
//!
//! Search fixtures list the summary fields of each result. The detail
//! fixture maps product ID to the full record.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use storefront_models::{
    query::normalize, Attribute, Condition, Currency, Installments, Picture, Price, Product,
    ProductId, Reviews, SellerAddress, Shipping,
};

use super::{CatalogStore, SearchIndexEntry};
use crate::{Error, Result};

/// Search fixtures in index order.
const SEARCH_FIXTURES: &[(&str, &str)] = &[
    (
        "search_iphone.json",
        include_str!("../../fixtures/search_iphone.json"),
    ),
    (
        "search_samsung_galaxy.json",
        include_str!("../../fixtures/search_samsung_galaxy.json"),
    ),
    (
        "search_notebook.json",
        include_str!("../../fixtures/search_notebook.json"),
    ),
];

const DETAIL_FIXTURE: (&str, &str) = (
    "products_detail.json",
    include_str!("../../fixtures/products_detail.json"),
);

#[derive(Debug, Deserialize)]
struct SearchFixture {
    query: String,
    results: Vec<ProductRecord>,
}

#[derive(Debug, Deserialize)]
struct ProductRecord {
    id: String,
    title: String,
    price: Decimal,
    currency_id: Currency,
    condition: Condition,
    #[serde(default)]
    thumbnail: Option<String>,
    #[serde(default)]
    original_price: Option<Decimal>,
    #[serde(default)]
    available_quantity: Option<u32>,
    #[serde(default)]
    sold_quantity: Option<u32>,
    #[serde(default)]
    permalink: Option<String>,
    #[serde(default)]
    pictures: Vec<Picture>,
    #[serde(default)]
    installments: Option<InstallmentsRecord>,
    #[serde(default)]
    shipping: Option<ShippingRecord>,
    #[serde(default)]
    seller_address: Option<SellerAddress>,
    #[serde(default)]
    attributes: Vec<AttributeRecord>,
    #[serde(default)]
    warranty: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    reviews: Option<ReviewsRecord>,
}

#[derive(Debug, Deserialize)]
struct InstallmentsRecord {
    quantity: u32,
    amount: Decimal,
    #[serde(default)]
    rate: Option<f64>,
    #[serde(default)]
    currency_id: Option<Currency>,
}

#[derive(Debug, Deserialize)]
struct ShippingRecord {
    free_shipping: bool,
    #[serde(default)]
    mode: Option<String>,
    #[serde(default)]
    logistic_type: Option<String>,
    #[serde(default)]
    store_pick_up: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct ReviewsRecord {
    rating_average: f64,
    total: u32,
}

#[derive(Debug, Deserialize)]
struct AttributeRecord {
    id: String,
    name: String,
    value_name: String,
}

impl ProductRecord {
    /// Full record, as served by the detail endpoint.
    fn into_detail(self) -> Product {
        Product {
            id: self.id,
            title: self.title,
            price: self.price,
            currency: self.currency_id,
            condition: self.condition,
            thumbnail: self.thumbnail,
            original_price: self.original_price,
            available_quantity: self.available_quantity,
            sold_quantity: self.sold_quantity,
            permalink: self.permalink,
            pictures: self.pictures,
            installments: self.installments.map(Into::into),
            shipping: self.shipping.map(Into::into),
            seller_address: self.seller_address,
            attributes: self.attributes.into_iter().map(Into::into).collect(),
            warranty: self.warranty,
            description: self.description,
            reviews: self.reviews.map(Into::into),
        }
    }

    /// List entry: only the fields search results carry.
    fn into_list_item(self) -> Product {
        let mut product = self.into_detail();
        product.original_price = None;
        product.available_quantity = None;
        product.sold_quantity = None;
        product.permalink = None;
        product.pictures.clear();
        product.seller_address = None;
        product.attributes.clear();
        product.warranty = None;
        product.description = None;
        product
    }
}

impl From<InstallmentsRecord> for Installments {
    fn from(record: InstallmentsRecord) -> Self {
        Installments {
            quantity: record.quantity,
            amount: record.amount,
            rate: record.rate,
            currency_id: record.currency_id,
        }
    }
}

impl From<ShippingRecord> for Shipping {
    fn from(record: ShippingRecord) -> Self {
        Shipping {
            free_shipping: record.free_shipping,
            mode: record.mode,
            logistic_type: record.logistic_type,
            store_pick_up: record.store_pick_up,
        }
    }
}

impl From<ReviewsRecord> for Reviews {
    fn from(record: ReviewsRecord) -> Self {
        Reviews {
            rating_average: record.rating_average,
            total: record.total,
        }
    }
}

impl From<AttributeRecord> for Attribute {
    fn from(record: AttributeRecord) -> Self {
        Attribute {
            id: record.id,
            name: record.name,
            value_name: record.value_name,
        }
    }
}

/// Build the catalog from the fixtures compiled into the binary.
pub fn load_embedded() -> Result<CatalogStore> {
    load(SEARCH_FIXTURES, DETAIL_FIXTURE)
}

/// Build a catalog from `(name, json)` fixture sources.
///
/// Search sources become index entries in the order given; a later source
/// with an already-indexed keyword is rejected. Every product must carry a
/// valid ID and a consistent price.
pub fn load(search_sources: &[(&str, &str)], detail_source: (&str, &str)) -> Result<CatalogStore> {
    let mut entries: Vec<SearchIndexEntry> = Vec::with_capacity(search_sources.len());

    for (name, json) in search_sources {
        let fixture: SearchFixture = serde_json::from_str(json)
            .map_err(|e| Error::Fixture(format!("{name}: {e}")))?;

        let keyword = normalize(&fixture.query);
        if keyword.is_empty() {
            return Err(Error::Fixture(format!("{name}: empty search keyword")));
        }
        if entries.iter().any(|e| e.keyword == keyword) {
            return Err(Error::Fixture(format!(
                "{name}: duplicate search keyword '{keyword}'"
            )));
        }

        let products = fixture
            .results
            .into_iter()
            .map(|record| check(name, record.into_list_item()))
            .collect::<Result<Vec<_>>>()?;

        entries.push(SearchIndexEntry { keyword, products });
    }

    let (name, json) = detail_source;
    let records: HashMap<String, ProductRecord> =
        serde_json::from_str(json).map_err(|e| Error::Fixture(format!("{name}: {e}")))?;

    let mut details = HashMap::with_capacity(records.len());
    for (key, record) in records {
        if key != record.id {
            return Err(Error::Fixture(format!(
                "{name}: key {key} does not match product id {}",
                record.id
            )));
        }
        let product = check(name, record.into_detail())?;
        details.insert(key, product);
    }

    Ok(CatalogStore::new(entries, details))
}

fn check(source: &str, product: Product) -> Result<Product> {
    ProductId::parse(&product.id)
        .map_err(|e| Error::Fixture(format!("{source}: {e}")))?;
    Price::of(&product).map_err(|e| Error::Fixture(format!("{source}: {}: {e}", product.id)))?;
    Ok(product)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_fixtures_load() {
        let store = load_embedded().unwrap();
        assert_eq!(store.dataset_count(), 3);
        let keywords: Vec<&str> = store.entries().iter().map(|e| e.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["iphone", "samsung galaxy", "notebook"]);
    }

    #[test]
    fn every_listed_product_has_a_detail_record() {
        let store = load_embedded().unwrap();
        for entry in store.entries() {
            for product in &entry.products {
                let id = ProductId::parse(&product.id).unwrap();
                assert!(store.find_by_id(&id).is_some(), "missing detail for {}", product.id);
            }
        }
    }

    #[test]
    fn list_items_carry_summary_fields_only() {
        let store = load_embedded().unwrap();
        let first = &store.entries()[0].products[0];
        assert!(first.thumbnail.is_some());
        assert!(first.shipping.is_some());
        assert!(first.pictures.is_empty());
        assert!(first.original_price.is_none());
        assert!(first.attributes.is_empty());
    }

    #[test]
    fn snake_case_fields_are_read() {
        let store = load_embedded().unwrap();
        let id = ProductId::parse("MLA1446234567").unwrap();
        let product = store.find_by_id(&id).unwrap();
        assert_eq!(product.currency, Currency::Ars);
        assert!(product.has_free_shipping());
        assert!(product.has_discount());
        assert_eq!(product.brand(), Some("Apple"));
        assert!(product.reviews.as_ref().unwrap().rating_average > 4.0);
        assert!(product.seller_location().is_some());
    }

    #[test]
    fn invalid_product_id_is_rejected() {
        let search = r#"{"query":"x","results":[{"id":"BAD1","title":"t","price":1,"currency_id":"ARS","condition":"new"}]}"#;
        let err = load(&[("bad.json", search)], ("d.json", "{}")).unwrap_err();
        assert!(matches!(err, Error::Fixture(_)));
    }

    #[test]
    fn duplicate_keyword_is_rejected() {
        let search = r#"{"query":"Phone","results":[]}"#;
        let err = load(&[("a.json", search), ("b.json", " { \"query\": \"phone \", \"results\": [] }")], ("d.json", "{}"))
            .unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn inverted_original_price_is_rejected() {
        let details = r#"{"MLA1":{"id":"MLA1","title":"t","price":10,"original_price":5,"currency_id":"ARS","condition":"new"}}"#;
        assert!(load(&[], ("d.json", details)).is_err());
    }
}
