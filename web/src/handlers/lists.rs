//! Handlers for todo lists.

use super::{interpret, Outcome};
use crate::error::AppError;
use crate::extractors::IdParam;
use crate::session::Session;
use crate::state::AppState;
use crate::views;
use crate::WebResult;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use todos_core::{ListId, TodosAction};

/// Form body for creating or renaming a list.
#[derive(Debug, Deserialize)]
pub struct ListForm {
    /// Submitted title, before trimming
    #[serde(rename = "todoListTitle", default)]
    pub title: String,
}

/// `GET /`
#[allow(clippy::unused_async)]
pub async fn index() -> Redirect {
    Redirect::to("/lists")
}

/// `GET /lists`
///
/// # Errors
///
/// Returns an internal error if the session is unusable.
#[allow(clippy::unused_async)]
pub async fn all_lists(session: Session) -> WebResult<Html<String>> {
    let flash = session.take_flash()?;
    Ok(session.read(|lists| views::lists_page(lists, &flash))?)
}

/// `GET /lists/new`
///
/// # Errors
///
/// Returns an internal error if the session is unusable.
#[allow(clippy::unused_async)]
pub async fn new_list(session: Session) -> WebResult<Html<String>> {
    let flash = session.take_flash()?;
    Ok(views::new_list_page("", &flash))
}

/// `POST /lists`
///
/// # Errors
///
/// Returns an internal error if the session is unusable.
#[allow(clippy::unused_async)]
pub async fn create_list(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ListForm>,
) -> WebResult<Response> {
    let effects = state.dispatch(&session, TodosAction::CreateList { title: form.title })?;

    match interpret(&session, effects)? {
        Outcome::Redirect(to) => Ok(Redirect::to(&to).into_response()),
        Outcome::Rejected { title } => {
            let flash = session.take_flash()?;
            Ok(views::new_list_page(&title, &flash).into_response())
        }
    }
}

/// `GET /lists/:list_id`
///
/// # Errors
///
/// Returns 404 if the list does not exist.
#[allow(clippy::unused_async)]
pub async fn show_list(
    session: Session,
    IdParam(list_id): IdParam<ListId>,
) -> WebResult<Html<String>> {
    render_list(&session, list_id, "")
}

/// Render a list page, consuming pending flashes only if the list exists.
pub(crate) fn render_list(
    session: &Session,
    list_id: ListId,
    todo_title: &str,
) -> WebResult<Html<String>> {
    if session.read(|lists| lists.find_list(list_id).is_none())? {
        return Err(AppError::not_found("Todo list", list_id));
    }

    let flash = session.take_flash()?;
    session
        .read(|lists| {
            lists
                .find_list(list_id)
                .map(|list| views::list_page(list, todo_title, &flash))
        })?
        .ok_or_else(|| AppError::not_found("Todo list", list_id))
}

fn render_edit(session: &Session, list_id: ListId, title: Option<&str>) -> WebResult<Html<String>> {
    if session.read(|lists| lists.find_list(list_id).is_none())? {
        return Err(AppError::not_found("Todo list", list_id));
    }

    let flash = session.take_flash()?;
    session
        .read(|lists| {
            lists.find_list(list_id).map(|list| {
                views::edit_list_page(list, title.unwrap_or_else(|| list.title()), &flash)
            })
        })?
        .ok_or_else(|| AppError::not_found("Todo list", list_id))
}

/// `GET /lists/:list_id/edit`
///
/// # Errors
///
/// Returns 404 if the list does not exist.
#[allow(clippy::unused_async)]
pub async fn edit_list(
    session: Session,
    IdParam(list_id): IdParam<ListId>,
) -> WebResult<Html<String>> {
    render_edit(&session, list_id, None)
}

/// `POST /lists/:list_id/edit`
///
/// # Errors
///
/// Returns 404 if the list does not exist.
#[allow(clippy::unused_async)]
pub async fn update_list(
    State(state): State<AppState>,
    session: Session,
    IdParam(list_id): IdParam<ListId>,
    Form(form): Form<ListForm>,
) -> WebResult<Response> {
    let action = TodosAction::RenameList {
        list_id,
        title: form.title,
    };
    let effects = state.dispatch(&session, action)?;

    match interpret(&session, effects)? {
        Outcome::Redirect(to) => Ok(Redirect::to(&to).into_response()),
        Outcome::Rejected { title } => {
            Ok(render_edit(&session, list_id, Some(&title))?.into_response())
        }
    }
}

/// `POST /lists/:list_id/destroy`
///
/// # Errors
///
/// Returns 404 if the list does not exist.
#[allow(clippy::unused_async)]
pub async fn destroy_list(
    State(state): State<AppState>,
    session: Session,
    IdParam(list_id): IdParam<ListId>,
) -> WebResult<Response> {
    let effects = state.dispatch(&session, TodosAction::DeleteList { list_id })?;
    interpret(&session, effects)?.into_redirect()
}

/// `POST /lists/:list_id/complete_all`
///
/// # Errors
///
/// Returns 404 if the list does not exist.
#[allow(clippy::unused_async)]
pub async fn complete_all(
    State(state): State<AppState>,
    session: Session,
    IdParam(list_id): IdParam<ListId>,
) -> WebResult<Response> {
    let effects = state.dispatch(&session, TodosAction::CompleteAll { list_id })?;
    interpret(&session, effects)?.into_redirect()
}
