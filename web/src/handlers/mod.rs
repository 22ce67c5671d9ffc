//! HTTP request handlers.
//!
//! Page handlers read the session directly. Form handlers build a
//! [`TodosAction`](todos_core::TodosAction), dispatch it, and then
//! [`interpret`] the reducer's effects.

pub mod health;
pub mod lists;
pub mod todos;

pub use health::health_check;

use crate::error::AppError;
use crate::session::Session;
use crate::WebResult;
use axum::response::{IntoResponse, Redirect, Response};
use todos_core::{Effect, SmallVec};

/// What a form post resolved to once its effects were applied.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The change was applied; send the browser here
    Redirect(String),
    /// Input was rejected; show the form again with this title
    Rejected {
        /// Entered title, after trimming
        title: String,
    },
}

impl Outcome {
    /// Answer with a 303 redirect.
    ///
    /// Used by commands that carry no user input and so cannot be rejected.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the command was rejected anyway.
    pub fn into_redirect(self) -> WebResult<Response> {
        match self {
            Self::Redirect(to) => Ok(Redirect::to(&to).into_response()),
            Self::Rejected { .. } => Err(AppError::internal("Command was unexpectedly rejected")),
        }
    }
}

/// Apply reducer effects to the session and decide the response.
///
/// Flashes are queued in the session; a `NotFound` effect becomes a 404.
///
/// # Errors
///
/// Returns a 404 for missing entities, or an internal error if the session is
/// unusable or the effects name no response.
pub fn interpret(session: &Session, effects: SmallVec<[Effect; 4]>) -> WebResult<Outcome> {
    let mut outcome = None;

    for effect in effects {
        match effect {
            Effect::Flash(flash) => session.push_flash(flash)?,
            Effect::Redirect(to) => outcome = Some(Outcome::Redirect(to)),
            Effect::Rejected { title } => outcome = Some(Outcome::Rejected { title }),
            Effect::NotFound { resource, id } => return Err(AppError::not_found(resource, id)),
        }
    }

    outcome.ok_or_else(|| AppError::internal("Action produced no response"))
}

/// Fallback for paths no route matches.
#[allow(clippy::unused_async)]
pub async fn not_found() -> AppError {
    AppError::page_not_found()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::session::SessionId;
    use axum::http::StatusCode;
    use todos_core::{Flash, TodoLists};

    fn session() -> Session {
        Session::new(SessionId::new(), TodoLists::new())
    }

    #[test]
    fn test_flash_and_redirect() {
        let session = session();
        let effects = SmallVec::from_vec(vec![
            Effect::Flash(Flash::success("Todo list deleted.")),
            Effect::Redirect("/lists".to_string()),
        ]);

        let outcome = interpret(&session, effects).unwrap();

        assert_eq!(outcome, Outcome::Redirect("/lists".to_string()));
        assert_eq!(session.take_flash().unwrap(), vec![Flash::success("Todo list deleted.")]);
    }

    #[test]
    fn test_rejected_keeps_title() {
        let session = session();
        let effects = SmallVec::from_vec(vec![
            Effect::Flash(Flash::error("The list title is required.")),
            Effect::Rejected { title: String::new() },
        ]);

        let outcome = interpret(&session, effects).unwrap();

        assert_eq!(outcome, Outcome::Rejected { title: String::new() });
        assert_eq!(session.take_flash().unwrap().len(), 1);
    }

    #[test]
    fn test_not_found_is_404() {
        let effects = SmallVec::from_vec(vec![Effect::NotFound {
            resource: "Todo",
            id: 8,
        }]);

        let err = interpret(&session(), effects).unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_rejected_into_redirect_is_internal() {
        let err = Outcome::Rejected { title: String::new() }
            .into_redirect()
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
