//! Handlers for the todos inside a list.

use super::{interpret, lists::render_list, Outcome};
use crate::extractors::IdParam;
use crate::session::Session;
use crate::state::AppState;
use crate::WebResult;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use todos_core::{ListId, TodoId, TodosAction};

/// Form body for adding a todo.
#[derive(Debug, Deserialize)]
pub struct TodoForm {
    /// Submitted title, before trimming
    #[serde(rename = "todoTitle", default)]
    pub title: String,
}

/// `POST /lists/:list_id/todos`
///
/// A rejected title re-renders the list page with the entered text.
///
/// # Errors
///
/// Returns 404 if the list does not exist.
#[allow(clippy::unused_async)]
pub async fn create_todo(
    State(state): State<AppState>,
    session: Session,
    IdParam(list_id): IdParam<ListId>,
    Form(form): Form<TodoForm>,
) -> WebResult<Response> {
    let action = TodosAction::AddTodo {
        list_id,
        title: form.title,
    };
    let effects = state.dispatch(&session, action)?;

    match interpret(&session, effects)? {
        Outcome::Redirect(to) => Ok(Redirect::to(&to).into_response()),
        Outcome::Rejected { title } => {
            Ok(render_list(&session, list_id, &title)?.into_response())
        }
    }
}

/// `POST /lists/:list_id/todos/:todo_id/toggle`
///
/// # Errors
///
/// Returns 404 if the list or todo does not exist.
#[allow(clippy::unused_async)]
pub async fn toggle_todo(
    State(state): State<AppState>,
    session: Session,
    IdParam(list_id): IdParam<ListId>,
    IdParam(todo_id): IdParam<TodoId>,
) -> WebResult<Response> {
    let effects = state.dispatch(&session, TodosAction::ToggleTodo { list_id, todo_id })?;
    interpret(&session, effects)?.into_redirect()
}

/// `POST /lists/:list_id/todos/:todo_id/destroy`
///
/// # Errors
///
/// Returns 404 if the list or todo does not exist.
#[allow(clippy::unused_async)]
pub async fn destroy_todo(
    State(state): State<AppState>,
    session: Session,
    IdParam(list_id): IdParam<ListId>,
    IdParam(todo_id): IdParam<TodoId>,
) -> WebResult<Response> {
    let effects = state.dispatch(&session, TodosAction::DeleteTodo { list_id, todo_id })?;
    interpret(&session, effects)?.into_redirect()
}
