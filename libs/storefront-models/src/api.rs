//! Wire shapes of the storefront REST API
//!
//! Every response body uses camelCase field names. Optional fields are
//! omitted when absent rather than serialized as `null`.

use crate::paging::Paging;
use crate::search::SearchResult;
use crate::product::{
    Attribute, Condition, Currency, Installments, Picture, Product, Reviews, SellerAddress,
    Shipping,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A product as listed in search results and suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: String,
    pub title: String,
    pub price: Decimal,
    pub currency_id: Currency,
    pub condition: Condition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Shipping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installments: Option<Installments>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Reviews>,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
            currency_id: product.currency,
            condition: product.condition,
            thumbnail: product.thumbnail.clone(),
            shipping: product.shipping.clone(),
            installments: product.installments.clone(),
            reviews: product.reviews.clone(),
        }
    }
}

impl From<ProductSummary> for Product {
    fn from(summary: ProductSummary) -> Self {
        Product {
            id: summary.id,
            title: summary.title,
            price: summary.price,
            currency: summary.currency_id,
            condition: summary.condition,
            thumbnail: summary.thumbnail,
            original_price: None,
            available_quantity: None,
            sold_quantity: None,
            permalink: None,
            pictures: Vec::new(),
            installments: summary.installments,
            shipping: summary.shipping,
            seller_address: None,
            attributes: Vec::new(),
            warranty: None,
            description: None,
            reviews: summary.reviews,
        }
    }
}

/// A single product with everything the detail page shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub id: String,
    pub title: String,
    pub price: Decimal,
    pub currency_id: Currency,
    pub condition: Condition,
    /// First picture, falling back to the record's own thumbnail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sold_quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pictures: Vec<Picture>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Shipping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installments: Option<Installments>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_address: Option<SellerAddress>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Reviews>,
}

impl From<&Product> for ProductDetail {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
            currency_id: product.currency,
            condition: product.condition,
            thumbnail: product.main_image_url().map(str::to_string),
            original_price: product.original_price,
            available_quantity: product.available_quantity,
            sold_quantity: product.sold_quantity,
            permalink: product.permalink.clone(),
            pictures: product.pictures.clone(),
            shipping: product.shipping.clone(),
            installments: product.installments.clone(),
            seller_address: product.seller_address.clone(),
            attributes: product.attributes.clone(),
            warranty: product.warranty.clone(),
            description: product.description.clone(),
            reviews: product.reviews.clone(),
        }
    }
}

impl From<ProductDetail> for Product {
    fn from(detail: ProductDetail) -> Self {
        Product {
            id: detail.id,
            title: detail.title,
            price: detail.price,
            currency: detail.currency_id,
            condition: detail.condition,
            thumbnail: detail.thumbnail,
            original_price: detail.original_price,
            available_quantity: detail.available_quantity,
            sold_quantity: detail.sold_quantity,
            permalink: detail.permalink,
            pictures: detail.pictures,
            installments: detail.installments,
            shipping: detail.shipping,
            seller_address: detail.seller_address,
            attributes: detail.attributes,
            warranty: detail.warranty,
            description: detail.description,
            reviews: detail.reviews,
        }
    }
}

/// Body of `GET /api/v1/products/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<ProductSummary>,
    pub paging: Paging,
}

impl From<SearchResult> for SearchResponse {
    fn from(result: SearchResult) -> Self {
        Self {
            results: result.products.iter().map(ProductSummary::from).collect(),
            query: result.query,
            paging: result.paging,
        }
    }
}

/// Machine-readable error codes carried in [`ErrorBody::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidSearchQuery,
    InvalidParameter,
    ValidationError,
    ProductNotFound,
    NotFound,
    MethodNotAllowed,
    RequestTimeout,
    InternalServerError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidSearchQuery => "INVALID_SEARCH_QUERY",
            ErrorCode::InvalidParameter => "INVALID_PARAMETER",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::ProductNotFound => "PRODUCT_NOT_FOUND",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ErrorCode::RequestTimeout => "REQUEST_TIMEOUT",
            ErrorCode::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub timestamp: String,
    pub path: String,
    pub method: String,
    pub message: String,
    /// Reason phrase of the status, e.g. `Bad Request`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::tests::product;
    use serde_json::json;

    #[test]
    fn summary_uses_camel_case_and_omits_missing_fields() {
        let mut p = product("MLA1", "iPhone 14", 1000);
        p.shipping = Some(Shipping {
            free_shipping: true,
            mode: None,
            logistic_type: Some("fulfillment".to_string()),
            store_pick_up: None,
        });

        let value = serde_json::to_value(ProductSummary::from(&p)).unwrap();
        assert_eq!(value["currencyId"], "ARS");
        assert_eq!(value["condition"], "new");
        assert_eq!(value["shipping"]["freeShipping"], true);
        assert_eq!(value["shipping"]["logisticType"], "fulfillment");
        assert!(value.get("thumbnail").is_none());
        assert!(value.get("originalPrice").is_none());
    }

    #[test]
    fn detail_thumbnail_is_first_picture() {
        let mut p = product("MLA1", "iPhone 14", 1000);
        p.thumbnail = Some("thumb.webp".to_string());
        p.pictures = vec![Picture {
            id: "p1".to_string(),
            url: "big.webp".to_string(),
        }];
        p.original_price = Some(Decimal::from(1200));

        let detail = ProductDetail::from(&p);
        assert_eq!(detail.thumbnail.as_deref(), Some("big.webp"));

        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["originalPrice"], json!(1200.0));
        assert_eq!(value["pictures"][0]["url"], "big.webp");
    }

    #[test]
    fn error_body_shape() {
        let body = ErrorBody {
            status_code: 404,
            timestamp: "2024-01-01T00:00:00.000Z".to_string(),
            path: "/api/v1/products/MLA999999".to_string(),
            method: "GET".to_string(),
            message: "Product with ID MLA999999 not found".to_string(),
            error: Some("Not Found".to_string()),
            code: Some(ErrorCode::ProductNotFound),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["statusCode"], 404);
        assert_eq!(value["code"], "PRODUCT_NOT_FOUND");
        assert_eq!(value["error"], "Not Found");
    }

    #[test]
    fn detail_converts_back_to_product() {
        let mut p = product("MLA1", "iPhone 14", 1000);
        p.available_quantity = Some(3);
        let back = Product::from(ProductDetail::from(&p));
        assert_eq!(back.availability_status(), "Pocas unidades");
        assert_eq!(back.id, "MLA1");
    }
}
