//! Application state for Axum handlers.
//!
//! The state carries the reducer and its environment. Handlers turn form
//! posts into [`TodosAction`]s and [`AppState::dispatch`] them against the
//! current session's lists.

use crate::config::Config;
use crate::error::SessionError;
use crate::session::Session;
use std::sync::Arc;
use todos_core::{Effect, Reducer, SmallVec, TodosAction, TodosEnvironment, TodosReducer};

/// Application state shared across all HTTP handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    reducer: TodosReducer,
    environment: Arc<TodosEnvironment>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TodosEnvironment::default())
    }
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(environment: TodosEnvironment) -> Self {
        Self {
            reducer: TodosReducer::new(),
            environment: Arc::new(environment),
        }
    }

    /// Create the state described by `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(TodosEnvironment::new(config.max_title_len))
    }

    /// Run `action` against the session's lists and return its effects.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::LockPoisoned`] if the session is unusable.
    pub fn dispatch(
        &self,
        session: &Session,
        action: TodosAction,
    ) -> Result<SmallVec<[Effect; 4]>, SessionError> {
        let action_name = action.name();
        let effects =
            session.update(|lists| self.reducer.reduce(lists, action, &self.environment))?;

        let outcome = outcome_label(&effects);
        metrics::counter!("todos_actions_total", "action" => action_name, "outcome" => outcome)
            .increment(1);
        tracing::debug!(
            session_id = %session.id(),
            action = action_name,
            outcome,
            "Dispatched action"
        );

        Ok(effects)
    }
}

fn outcome_label(effects: &[Effect]) -> &'static str {
    if effects.iter().any(|e| matches!(e, Effect::NotFound { .. })) {
        "not_found"
    } else if effects.iter().any(|e| matches!(e, Effect::Rejected { .. })) {
        "rejected"
    } else {
        "applied"
    }
}
