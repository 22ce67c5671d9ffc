//! Error types for web handlers.
//!
//! `AppError` bridges session failures and missing entities to HTTP
//! responses. Errors are rendered as HTML pages, since every client of this
//! server is a browser.

use crate::views;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use thiserror::Error;

/// Application error type for web handlers.
///
/// Implements Axum's `IntoResponse`, so handlers can return
/// `Result<_, AppError>` and use `?` on session operations.
///
/// # Examples
///
/// ```ignore
/// async fn list_title(session: Session, IdParam(list_id): IdParam<ListId>) -> WebResult<String> {
///     session
///         .read(|lists| lists.find_list(list_id).map(|list| list.title().to_string()))?
///         .ok_or_else(|| AppError::not_found("Todo list", list_id))
/// }
/// ```
#[derive(Debug)]
pub struct AppError {
    /// HTTP status code
    status: StatusCode,
    /// Error message (user-facing)
    message: String,
    /// Error code, recorded in logs
    code: &'static str,
    /// Internal error (for logging, not exposed to client)
    source: Option<anyhow::Error>,
}

impl AppError {
    /// Create a new application error.
    #[must_use]
    pub const fn new(status: StatusCode, message: String, code: &'static str) -> Self {
        Self {
            status,
            message,
            code,
            source: None,
        }
    }

    /// Create a new error with a source error.
    #[must_use]
    pub fn with_source(mut self, source: anyhow::Error) -> Self {
        self.source = Some(source);
        self
    }

    /// Create a 404 Not Found error for an addressed entity.
    #[must_use]
    pub fn not_found(resource: impl fmt::Display, id: impl fmt::Display) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            format!("{resource} with id {id} not found"),
            "NOT_FOUND",
        )
    }

    /// Create a 404 Not Found error for a path no route matches.
    #[must_use]
    pub fn page_not_found() -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "The page you requested does not exist.".to_string(),
            "NOT_FOUND",
        )
    }

    /// Create a 500 Internal Server Error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            message.into(),
            "INTERNAL_SERVER_ERROR",
        )
    }

    /// HTTP status this error is answered with
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            if let Some(source) = &self.source {
                tracing::error!(
                    status = %self.status,
                    code = self.code,
                    message = %self.message,
                    error = %source,
                    "Internal server error"
                );
            } else {
                tracing::error!(
                    status = %self.status,
                    code = self.code,
                    message = %self.message,
                    "Internal server error"
                );
            }
        } else {
            tracing::debug!(status = %self.status, message = %self.message, "Request failed");
        }

        (self.status, views::error_page(self.status, &self.message)).into_response()
    }
}

/// Convert `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::internal("An internal error occurred").with_source(err)
    }
}

/// Failures while loading, using, or saving a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Another request panicked while holding the session
    #[error("session lock poisoned")]
    LockPoisoned,

    /// A stored session could not be encoded or decoded
    #[error("corrupt session record: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// A handler asked for the session but no session layer ran
    #[error("session layer is not installed")]
    MissingLayer,
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        Self::internal("The session could not be used").with_source(err.into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::internal("Boom");
        assert_eq!(err.to_string(), "[INTERNAL_SERVER_ERROR] Boom");
    }

    #[test]
    fn test_not_found() {
        let err = AppError::not_found("Todo list", 7);
        assert_eq!(err.to_string(), "[NOT_FOUND] Todo list with id 7 not found");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_session_error_is_internal() {
        let err = AppError::from(SessionError::LockPoisoned);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_response_is_html() {
        let response = AppError::page_not_found().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let content_type = response.headers().get("content-type").unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
    }
}
