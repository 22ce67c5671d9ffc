//! Reducer logic for a session's todo lists.
//!
//! Commands are validated against the current collection, applied in place,
//! and answered with effect descriptions for the HTTP shell.

use crate::actions::TodosAction;
use crate::effect::{Effect, Flash};
use crate::lists::TodoLists;
use crate::types::{ListId, TodoId};
use crate::validation::{self, DEFAULT_MAX_TITLE_LEN};
use smallvec::{smallvec, SmallVec};

/// The Reducer trait - core abstraction for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.
/// They validate the action, update state in place and return effect
/// descriptions to be interpreted by the caller.
///
/// # Example
///
/// ```
/// use todos_core::{Effect, Reducer, TodoLists, TodosAction, TodosEnvironment, TodosReducer};
///
/// let mut lists = TodoLists::new();
/// let effects = TodosReducer::new().reduce(
///     &mut lists,
///     TodosAction::CreateList { title: "Groceries".to_string() },
///     &TodosEnvironment::default(),
/// );
///
/// assert_eq!(lists.len(), 1);
/// assert!(effects.contains(&Effect::Redirect("/lists".to_string())));
/// ```
pub trait Reducer {
    /// The state type this reducer operates on
    type State;

    /// The action type this reducer processes
    type Action;

    /// The environment type with injected dependencies
    type Environment;

    /// Reduce an action into state changes and effects
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect; 4]>;
}

/// Environment dependencies for the todos reducer
#[derive(Clone, Debug)]
pub struct TodosEnvironment {
    /// Upper bound on list and todo titles, in characters
    pub max_title_len: usize,
}

impl TodosEnvironment {
    /// Creates a new `TodosEnvironment`
    #[must_use]
    pub const fn new(max_title_len: usize) -> Self {
        Self { max_title_len }
    }
}

impl Default for TodosEnvironment {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TITLE_LEN)
    }
}

/// Reducer for a session's todo lists
#[derive(Clone, Copy, Debug, Default)]
pub struct TodosReducer;

impl TodosReducer {
    /// Creates a new `TodosReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn list_path(list_id: ListId) -> String {
        format!("/lists/{list_id}")
    }

    fn done(message: impl Into<String>, redirect: String) -> SmallVec<[Effect; 4]> {
        smallvec![Effect::Flash(Flash::success(message)), Effect::Redirect(redirect)]
    }

    fn rejected(errors: Vec<String>, title: String) -> SmallVec<[Effect; 4]> {
        let mut effects: SmallVec<[Effect; 4]> = errors
            .into_iter()
            .map(|error| Effect::Flash(Flash::error(error)))
            .collect();
        effects.push(Effect::Rejected { title });
        effects
    }

    fn list_not_found(list_id: ListId) -> SmallVec<[Effect; 4]> {
        smallvec![Effect::NotFound {
            resource: "Todo list",
            id: list_id.get(),
        }]
    }

    fn todo_not_found(state: &TodoLists, list_id: ListId, todo_id: TodoId) -> SmallVec<[Effect; 4]> {
        if state.find_list(list_id).is_none() {
            return Self::list_not_found(list_id);
        }
        smallvec![Effect::NotFound {
            resource: "Todo",
            id: todo_id.get(),
        }]
    }
}

impl Reducer for TodosReducer {
    type State = TodoLists;
    type Action = TodosAction;
    type Environment = TodosEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect; 4]> {
        match action {
            TodosAction::CreateList { title } => {
                let title = title.trim().to_string();
                let errors = validation::validate_list_title(
                    &title,
                    env.max_title_len,
                    state.title_taken(&title, None),
                );
                if !errors.is_empty() {
                    return Self::rejected(errors, title);
                }

                state.create_list(title);
                Self::done("The todo list has been created.", "/lists".to_string())
            }

            TodosAction::RenameList { list_id, title } => {
                if state.find_list(list_id).is_none() {
                    return Self::list_not_found(list_id);
                }

                let title = title.trim().to_string();
                let errors = validation::validate_list_title(
                    &title,
                    env.max_title_len,
                    state.title_taken(&title, Some(list_id)),
                );
                if !errors.is_empty() {
                    return Self::rejected(errors, title);
                }

                if let Some(list) = state.find_list_mut(list_id) {
                    list.set_title(title);
                }
                Self::done("Todo list updated.", Self::list_path(list_id))
            }

            TodosAction::DeleteList { list_id } => {
                if state.remove_list(list_id).is_none() {
                    return Self::list_not_found(list_id);
                }
                Self::done("Todo list deleted.", "/lists".to_string())
            }

            TodosAction::AddTodo { list_id, title } => {
                if state.find_list(list_id).is_none() {
                    return Self::list_not_found(list_id);
                }

                let title = title.trim().to_string();
                let errors = validation::validate_todo_title(&title, env.max_title_len);
                if !errors.is_empty() {
                    return Self::rejected(errors, title);
                }

                // Both failure modes were ruled out above.
                if state.add_todo(list_id, title).is_err() {
                    return Self::list_not_found(list_id);
                }
                Self::done("The todo has been created.", Self::list_path(list_id))
            }

            TodosAction::ToggleTodo { list_id, todo_id } => {
                let Some(todo) = state.find_todo_mut(list_id, todo_id) else {
                    return Self::todo_not_found(state, list_id, todo_id);
                };

                let message = if todo.toggle() {
                    format!("\"{}\" marked done.", todo.title())
                } else {
                    format!("\"{}\" marked as NOT done!", todo.title())
                };
                Self::done(message, Self::list_path(list_id))
            }

            TodosAction::DeleteTodo { list_id, todo_id } => {
                if state.remove_todo(list_id, todo_id).is_none() {
                    return Self::todo_not_found(state, list_id, todo_id);
                }
                Self::done("The todo has been deleted.", Self::list_path(list_id))
            }

            TodosAction::CompleteAll { list_id } => {
                let Some(list) = state.find_list_mut(list_id) else {
                    return Self::list_not_found(list_id);
                };

                list.mark_all_done();
                Self::done("All todos have been marked as done.", Self::list_path(list_id))
            }
        }
    }
}
