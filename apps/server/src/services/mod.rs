//! Catalog services used by the HTTP handlers

pub mod products;
pub mod search;
pub mod suggestions;

pub use products::ProductService;
pub use search::SearchService;
pub use suggestions::SuggestionService;
