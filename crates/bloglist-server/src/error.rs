use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use bloglist_store::StoreError;
use bloglist_types::{BlogId, ValidationError};

/// Every failure a request can end in.
///
/// [`IntoResponse`] below is the single place that picks a status code and
/// body for a failure; handlers and middleware only construct variants.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("request body too large")]
    PayloadTooLarge,

    #[error("malformatted id: {0}")]
    MalformedId(String),

    #[error("blog not found: {0}")]
    NotFound(BlogId),

    #[error("unknown endpoint: {method} {path}")]
    UnknownEndpoint { method: String, path: String },

    #[error("store error: {0}")]
    Store(StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ServerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MalformedId { raw, .. } => Self::MalformedId(raw),
            other => Self::Store(other),
        }
    }
}

pub type ServerResult<T> = Result<T, ServerError>;

/// JSON body of every error response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ServerError {
    /// HTTP status for this failure.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidBody(_) | Self::MalformedId(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::NotFound(_) | Self::UnknownEndpoint { .. } => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Config(_) | Self::Io(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Client-visible message. Server-side failures are reported generically.
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::InvalidBody(reason) => reason.clone(),
            Self::PayloadTooLarge => "request body too large".into(),
            Self::MalformedId(_) => "malformatted id".into(),
            Self::NotFound(_) => "blog not found".into(),
            Self::UnknownEndpoint { .. } => "unknown endpoint".into(),
            Self::Store(_) | Self::Config(_) | Self::Io(_) | Self::Internal(_) => {
                "internal server error".into()
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
        }
        let body = ErrorBody {
            error: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}
