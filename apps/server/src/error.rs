//! Error types for the storefront server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use storefront_models::{ErrorBody, ErrorCode};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid search query: {0}")]
    InvalidSearchQuery(String),

    #[error("Product with ID {0} not found")]
    ProductNotFound(String),

    #[error("{0}")]
    InvalidProductId(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Fixture error: {0}")]
    Fixture(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<storefront_models::Error> for Error {
    fn from(err: storefront_models::Error) -> Self {
        use storefront_models::Error as ModelError;

        match err {
            ModelError::InvalidQuery(reason) => Error::InvalidSearchQuery(reason),
            ModelError::EmptyProductId | ModelError::InvalidProductId(_) => {
                Error::InvalidProductId(err.to_string())
            }
            ModelError::InvalidPaging(_) => Error::Validation(err.to_string()),
            ModelError::InvalidPrice(_) | ModelError::CurrencyMismatch { .. } => {
                Error::Internal(err.to_string())
            }
        }
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {field}"))
                })
            })
            .collect();
        messages.sort();

        Error::Validation(messages.join(", "))
    }
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::InvalidSearchQuery(_) | Error::InvalidProductId(_) | Error::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::ProductNotFound(_) | Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Fixture(_) | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Error::InvalidSearchQuery(_) => ErrorCode::InvalidSearchQuery,
            Error::InvalidProductId(_) => ErrorCode::InvalidParameter,
            Error::Validation(_) => ErrorCode::ValidationError,
            Error::ProductNotFound(_) => ErrorCode::ProductNotFound,
            Error::NotFound(_) => ErrorCode::NotFound,
            Error::Fixture(_) | Error::Internal(_) => ErrorCode::InternalServerError,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!("Internal error: {}", self);
            "Internal server error".to_string()
        } else {
            tracing::debug!(code = %self.code(), "Request rejected: {}", self);
            self.to_string()
        };

        error_response(error_body(status, message, Some(self.code())))
    }
}

/// Error body for `status`, with `path` and `method` left for the
/// error-context middleware to fill in.
pub fn error_body(status: StatusCode, message: String, code: Option<ErrorCode>) -> ErrorBody {
    ErrorBody {
        status_code: status.as_u16(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        path: String::new(),
        method: String::new(),
        message,
        error: status.canonical_reason().map(str::to_string),
        code,
    }
}

/// Render an error body. The body is also stored as a response extension so
/// middleware can complete it with request details.
pub fn error_response(body: ErrorBody) -> Response {
    let status =
        StatusCode::from_u16(body.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut response = (status, Json(&body)).into_response();
    response.extensions_mut().insert(body);
    response
}
