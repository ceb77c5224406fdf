/**
 * Backend Error Types
 *
 * This module defines the error type returned by HTTP handlers.
 * It wraps the shared validation and counter errors and adds
 * request-level failures raised by the transport itself.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Handler errors occur when processing HTTP requests:
 * - Body that does not deserialize
 * - Body over the request size limit
 * - Unknown routes
 *
 * ## Diagram Errors
 *
 * A candidate diagram failed validation. All map to 400 except
 * `TooLarge`, which maps to 413.
 *
 * ## Counter Errors
 *
 * `LimitReached` maps to 429, `Underflow` to 400.
 */

use crate::shared::error::{CounterError, DiagramError};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

/// Backend-specific error types
///
/// Each variant can be converted to an HTTP response through `IntoResponse`.
///
/// # Usage
///
/// ```rust
/// use bpmn_collab::backend::error::BackendError;
/// use bpmn_collab::shared::error::CounterError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::NOT_FOUND, "No such route");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
///
/// let err: BackendError = CounterError::LimitReached { limit: 1000 }.into();
/// assert_eq!(err.status_code(), StatusCode::TOO_MANY_REQUESTS);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., invalid request body)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Diagram validation error
    #[error(transparent)]
    Diagram(#[from] DiagramError),

    /// User counter bound error
    #[error(transparent)]
    Counter(#[from] CounterError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Diagram(TooLarge)` - 413 Payload Too Large
    /// - `Diagram(_)` - 400 Bad Request
    /// - `Counter(LimitReached)` - 429 Too Many Requests
    /// - `Counter(Underflow)` - 400 Bad Request
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Diagram(DiagramError::TooLarge { .. }) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Diagram(_) => StatusCode::BAD_REQUEST,
            Self::Counter(CounterError::LimitReached { .. }) => StatusCode::TOO_MANY_REQUESTS,
            Self::Counter(CounterError::Underflow) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Diagram(err) => err.to_string(),
            Self::Counter(err) => err.to_string(),
        }
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::handler(rejection.status(), rejection.body_text())
    }
}
