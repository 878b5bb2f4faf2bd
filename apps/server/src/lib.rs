//! Storefront catalog server
//!
//! REST backend for a storefront:
//! - Product search with offset/limit paging
//! - Autocomplete suggestions
//! - Product detail lookup
//!
//! The catalog is an in-memory mock dataset built from fixtures embedded in
//! the binary. The repository in front of it adds a configurable random
//! latency (and optional failures) to behave like a remote catalog.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod repository;
pub mod request_context;
pub mod services;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
