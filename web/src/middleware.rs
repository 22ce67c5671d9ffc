//! Session middleware.
//!
//! For every request the layer:
//!
//! 1. **Reads** the session id from the configured cookie
//! 2. **Loads** the session from the store, or starts a new one
//! 3. **Inserts** a [`Session`] handle into the request extensions
//! 4. **Saves** the session after the handler has responded
//! 5. **Sets** the cookie again so its lifetime is renewed
//!
//! # Example
//!
//! ```ignore
//! use axum::Router;
//! use todos_web::middleware::SessionLayer;
//!
//! let app = Router::new()
//!     .route("/lists", get(all_lists))
//!     .layer(SessionLayer::new(InMemorySessionStore::new(), config.session.clone()));
//! ```

use crate::config::SessionConfig;
use crate::error::{AppError, SessionError};
use crate::session::{Session, SessionId, SessionStore};
use axum::{
    extract::Request,
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue,
    },
    response::{IntoResponse, Response},
};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use todos_core::{seed, TodoLists};
use tower::{Layer, Service};
use tracing::Instrument;

/// Layer that attaches a [`Session`] to every request.
#[derive(Clone, Debug)]
pub struct SessionLayer<St> {
    store: St,
    config: Arc<SessionConfig>,
}

impl<St: SessionStore> SessionLayer<St> {
    /// Create a session layer backed by `store`.
    #[must_use]
    pub fn new(store: St, config: SessionConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

impl<S, St: Clone> Layer<S> for SessionLayer<St> {
    type Service = SessionMiddleware<S, St>;

    fn layer(&self, inner: S) -> Self::Service {
        SessionMiddleware {
            inner,
            store: self.store.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

/// Middleware service produced by [`SessionLayer`].
#[derive(Clone, Debug)]
pub struct SessionMiddleware<S, St> {
    inner: S,
    store: St,
    config: Arc<SessionConfig>,
}

impl<S, St> Service<Request> for SessionMiddleware<S, St>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
    St: SessionStore,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        // Only the instance that was polled is known to be ready.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let store = self.store.clone();
        let config = Arc::clone(&self.config);

        Box::pin(async move {
            let session = match load_session(&store, &config, req.headers()).await {
                Ok(session) => session,
                Err(err) => return Ok(AppError::from(err).into_response()),
            };
            req.extensions_mut().insert(session.clone());

            let span = tracing::debug_span!("session", session_id = %session.id());
            let mut response = inner.call(req).instrument(span).await?;

            if let Err(err) = save_session(&store, &config, &session).await {
                return Ok(AppError::from(err).into_response());
            }

            match session_cookie(&config, session.id()) {
                Ok(cookie) => {
                    response.headers_mut().append(SET_COOKIE, cookie);
                }
                Err(err) => {
                    tracing::error!(
                        cookie_name = %config.cookie_name,
                        error = %err,
                        "Session cookie could not be encoded"
                    );
                }
            }

            Ok(response)
        })
    }
}

async fn load_session<St: SessionStore>(
    store: &St,
    config: &SessionConfig,
    headers: &HeaderMap,
) -> Result<Session, SessionError> {
    if let Some(id) = session_id_from_cookies(headers, &config.cookie_name) {
        if let Some(record) = store.load(id).await? {
            return Ok(Session::from_record(id, record));
        }
        tracing::debug!(session_id = %id, "Session cookie refers to an unknown or expired session");
    }

    let id = SessionId::new();
    let lists = if config.seed {
        seed::sample_lists()
    } else {
        TodoLists::new()
    };
    tracing::info!(session_id = %id, seeded = config.seed, "Starting new session");
    Ok(Session::new(id, lists))
}

async fn save_session<St: SessionStore>(
    store: &St,
    config: &SessionConfig,
    session: &Session,
) -> Result<(), SessionError> {
    let record = session.to_record()?;
    store.save(session.id(), &record, config.ttl()).await
}

/// Find the session id in the request's `Cookie` headers.
///
/// Returns `None` if the cookie is absent or is not a valid id.
#[must_use]
pub fn session_id_from_cookies(headers: &HeaderMap, cookie_name: &str) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .and_then(|(_, value)| value.trim().parse().ok())
}

fn session_cookie(
    config: &SessionConfig,
    id: SessionId,
) -> Result<HeaderValue, axum::http::header::InvalidHeaderValue> {
    HeaderValue::from_str(&format!(
        "{}={id}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        config.cookie_name, config.ttl_secs
    ))
}
