//! Application error type mapping failures to the wire contract.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::time::Duration;

use crate::infrastructure::kv::KvError;

/// JSON error body returned to clients.
#[derive(Serialize)]
struct ErrorBody {
    error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    rate_limit_reset: Option<u64>,
}

/// Failures surfaced by the request pipeline.
///
/// Every variant short-circuits the handler and maps verbatim to one status
/// code and JSON body. There are no retries and no partial success reported
/// as success.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed request body or a URL that fails syntactic validation.
    #[error("Bad request")]
    BadRequest,

    /// The client's rate budget for the current window is exhausted.
    #[error("Rate limit exceeded")]
    RateLimitExceeded {
        /// Time until the client's budget window resets.
        reset_in: Duration,
    },

    /// The requested alias is already mapped to a URL.
    #[error("Custom short URL already exists")]
    AliasTaken,

    /// The target URL points back at the shortener's own domain.
    #[error("You cant hack the system :)")]
    SelfReferential,

    /// No mapping exists for the requested alias.
    #[error("Short URL not found")]
    NotFound,

    /// The key-value store could not complete a required operation.
    #[error("Unable to connect to server")]
    StoreUnavailable,
}

impl AppError {
    /// The HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::RateLimitExceeded { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::AliasTaken => StatusCode::FORBIDDEN,
            Self::SelfReferential => StatusCode::SERVICE_UNAVAILABLE,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::StoreUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        // Rate-limit rejections carry the window reset in whole minutes.
        let rate_limit_reset = match &self {
            Self::RateLimitExceeded { reset_in } => Some(reset_in.as_secs() / 60),
            _ => None,
        };

        let body = ErrorBody {
            error: self.to_string(),
            rate_limit_reset,
        };

        (status, Json(body)).into_response()
    }
}

impl From<KvError> for AppError {
    fn from(e: KvError) -> Self {
        tracing::error!("Store failure: {}", e);
        Self::StoreUnavailable
    }
}
