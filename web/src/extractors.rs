//! Custom Axum extractors.
//!
//! - [`Session`]: the current visitor's session, attached by
//!   [`SessionLayer`](crate::middleware::SessionLayer)
//! - [`IdParam`]: a numeric id taken from the path, where anything
//!   non-numeric answers 404
//!
//! # Example
//!
//! ```ignore
//! async fn show_list(session: Session, IdParam(list_id): IdParam<ListId>) -> WebResult<Html<String>> {
//!     // ...
//! }
//! ```

use crate::error::{AppError, SessionError};
use crate::session::Session;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use std::collections::HashMap;
use std::str::FromStr;
use todos_core::{ListId, TodoId};

#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Self>()
            .cloned()
            .ok_or_else(|| SessionError::MissingLayer.into())
    }
}

/// Identifier types that can be addressed by a named path parameter.
pub trait PathId: FromStr + Send {
    /// Name of the route parameter holding the id
    const PARAM: &'static str;
    /// Entity name used in the 404 message
    const RESOURCE: &'static str;
}

impl PathId for ListId {
    const PARAM: &'static str = "list_id";
    const RESOURCE: &'static str = "Todo list";
}

impl PathId for TodoId {
    const PARAM: &'static str = "todo_id";
    const RESOURCE: &'static str = "Todo";
}

/// Numeric id from the request path.
///
/// A missing or unparsable parameter is a 404, like an id that does not
/// exist.
#[derive(Debug, Clone, Copy)]
pub struct IdParam<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for IdParam<T>
where
    S: Send + Sync,
    T: PathId,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::page_not_found())?;

        let raw = params
            .get(T::PARAM)
            .ok_or_else(AppError::page_not_found)?;

        raw.parse()
            .map(Self)
            .map_err(|_| AppError::not_found(T::RESOURCE, raw))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, routing::get, Router};
    use tower::ServiceExt;

    async fn echo(IdParam(list_id): IdParam<ListId>, IdParam(todo_id): IdParam<TodoId>) -> String {
        format!("{list_id}/{todo_id}")
    }

    fn app() -> Router {
        Router::new().route("/lists/:list_id/todos/:todo_id", get(echo))
    }

    async fn get_path(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(axum::http::Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_numeric_ids_are_extracted() {
        let (status, body) = get_path("/lists/3/todos/12").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "3/12");
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_not_found() {
        let (status, body) = get_path("/lists/abc/todos/12").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Todo list with id abc not found"));
    }

    #[tokio::test]
    async fn test_session_without_layer_is_internal_error() {
        async fn needs_session(_session: Session) -> &'static str {
            "unreachable"
        }

        let response = Router::new()
            .route("/", get(needs_session))
            .oneshot(axum::http::Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
