//! Storefront catalog models
//!
//! Types shared by the storefront server, its HTTP client and the CLI:
//! - Wire shapes for search results, suggestions, product detail and errors
//! - Domain helpers on products, prices and paging
//! - Validation rules for product IDs and search queries
//! - es-AR style number and currency formatting
//! - A small cart model used by clients

#![forbid(unsafe_code)]

pub mod api;
pub mod cart;
pub mod error;
pub mod format;
pub mod paging;
pub mod price;
pub mod product;
pub mod product_id;
pub mod query;
pub mod search;

pub use api::{
    ErrorBody, ErrorCode, HealthStatus, ProductDetail, ProductSummary, SearchResponse,
    ServiceInfo,
};
pub use cart::{Cart, CartItem};
pub use error::{Error, Result};
pub use format::{format_currency, format_discount, format_number};
pub use paging::{paginate, Paging};
pub use price::Price;
pub use product::{
    Attribute, Condition, Currency, Installments, Location, Picture, Product, Reviews,
    SellerAddress, Shipping,
};
pub use product_id::ProductId;
pub use query::{SearchQuery, SuggestionQuery};
pub use search::SearchResult;
