//! Router composition.
//!
//! # Routes
//!
//! ## Pages (session attached)
//! - `GET /` - Redirect to `/lists`
//! - `GET /lists` - All lists
//! - `POST /lists` - Create a list
//! - `GET /lists/new` - New list form
//! - `GET /lists/:list_id` - One list with its todos
//! - `GET /lists/:list_id/edit` - Rename form
//! - `POST /lists/:list_id/edit` - Rename a list
//! - `POST /lists/:list_id/destroy` - Delete a list
//! - `POST /lists/:list_id/complete_all` - Mark every todo done
//! - `POST /lists/:list_id/todos` - Add a todo
//! - `POST /lists/:list_id/todos/:todo_id/toggle` - Flip a todo
//! - `POST /lists/:list_id/todos/:todo_id/destroy` - Delete a todo
//!
//! ## Infrastructure
//! - `GET /health` - Liveness
//! - `GET /static/*` - Files from the public directory
//! - anything else - 404 page, without a session

use crate::config::Config;
use crate::handlers::{self, health, lists, todos};
use crate::middleware::SessionLayer;
use crate::session::SessionStore;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Create the application router.
///
/// Health checks, static files and unmatched paths bypass the session
/// layer, so they never create sessions.
///
/// # Example
///
/// ```rust,ignore
/// let app = app_router(&Config::from_env(), InMemorySessionStore::new());
/// axum::serve(listener, app).await?;
/// ```
pub fn app_router<St: SessionStore>(config: &Config, store: St) -> Router {
    let pages = Router::new()
        .route("/", get(lists::index))
        .route("/lists", get(lists::all_lists).post(lists::create_list))
        .route("/lists/new", get(lists::new_list))
        .route("/lists/:list_id", get(lists::show_list))
        .route(
            "/lists/:list_id/edit",
            get(lists::edit_list).post(lists::update_list),
        )
        .route("/lists/:list_id/destroy", post(lists::destroy_list))
        .route("/lists/:list_id/complete_all", post(lists::complete_all))
        .route("/lists/:list_id/todos", post(todos::create_todo))
        .route(
            "/lists/:list_id/todos/:todo_id/toggle",
            post(todos::toggle_todo),
        )
        .route(
            "/lists/:list_id/todos/:todo_id/destroy",
            post(todos::destroy_todo),
        )
        .layer(SessionLayer::new(store, config.session.clone()));

    Router::new()
        .route("/health", get(health::health_check))
        .nest_service("/static", ServeDir::new(&config.server.public_dir))
        .merge(pages)
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::from_config(config))
}
