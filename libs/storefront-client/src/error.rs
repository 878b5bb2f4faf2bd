//! Error types for storefront-client

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Client errors
#[derive(Error, Debug)]
pub enum Error {
    /// The API answered with a non-2xx status
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Network request failed: {0}")]
    Network(String),

    #[error("Request timeout after {0}ms")]
    Timeout(u128),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl Error {
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(400..=499))
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(500..=599))
    }

    /// Whether repeating the request may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Network(_) | Error::Timeout(_) => true,
            Error::Http { status, .. } => *status >= 500 || *status == 408 || *status == 429,
            Error::Decode(_) | Error::InvalidUrl(_) => false,
        }
    }
}
