//! Error types for catalog models

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Validation failures raised while constructing catalog values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Product ID cannot be empty")]
    EmptyProductId,

    #[error("Invalid product ID format: {0}. Expected format: MLA followed by numbers")]
    InvalidProductId(String),

    #[error("Invalid search query: {0}")]
    InvalidQuery(String),

    #[error("Invalid paging: {0}")]
    InvalidPaging(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Cannot compare prices with different currencies: {left} vs {right}")]
    CurrencyMismatch { left: String, right: String },
}
