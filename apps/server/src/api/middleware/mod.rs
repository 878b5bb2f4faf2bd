//! Middleware stack for the API

pub mod error_context;
pub mod layers;
pub mod request_id;

pub use error_context::error_context_middleware;
pub use layers::{compression, cors, timeout, trace};
pub use request_id::request_id_middleware;
