//! Storefront API client
//!
//! Async client for the storefront catalog REST API. Transient failures
//! (network errors, timeouts, 5xx, 408 and 429 responses) are retried with
//! exponential backoff according to a [`RetryPolicy`].
//!
//! ```rust,no_run
//! use storefront_client::StorefrontClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = StorefrontClient::new("http://localhost:3000")?;
//! let page = client.search("iphone", Some(10), Some(0)).await?;
//! println!("{} results", page.paging.total());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod retry;

pub use client::{StorefrontClient, DEFAULT_TIMEOUT};
pub use error::{Error, Result};
pub use retry::RetryPolicy;
