//! Request handlers for API endpoints
//!
//! Handlers extract and validate request input, call a service and map the
//! result to a response shape. Errors are returned as [`crate::Error`].

pub mod health;
pub mod products;

pub use health::*;
pub use products::*;
