//! # Todos Testing
//!
//! Testing utilities and helpers for the todos workspace.
//!
//! This crate provides:
//! - `ReducerTest`, a Given-When-Then harness for reducers
//! - Assertion helpers for the effects a reducer returns
//! - Fixtures that build list collections in a known state
//!
//! ## Example
//!
//! ```
//! use todos_core::{TodosAction, TodosEnvironment, TodosReducer};
//! use todos_testing::{assertions, fixtures, ReducerTest};
//!
//! ReducerTest::new(TodosReducer::new())
//!     .with_env(TodosEnvironment::default())
//!     .given_state(fixtures::lists(&[("Home", &[("Buy milk", false)])]))
//!     .when_action(TodosAction::CreateList { title: "Work".to_string() })
//!     .then_state(|lists| assert_eq!(lists.len(), 2))
//!     .then_effects(|effects| assertions::assert_redirects_to(effects, "/lists"))
//!     .run();
//! ```


/// Builders for list collections in a known state.
pub mod fixtures {
    use todos_core::{ListId, TodoLists};

    /// Builds a collection from `(list title, [(todo title, done)])` entries,
    /// created in the order given.
    ///
    /// Ids come from the collection's counter, so the first list is id 1 and
    /// its todos follow.
    #[must_use]
    pub fn lists(entries: &[(&str, &[(&str, bool)])]) -> TodoLists {
        let mut lists = TodoLists::new();
        for &(title, todos) in entries {
            let list_id = lists.create_list(title).id();
            for &(todo_title, done) in todos {
                let Ok(todo_id) = lists.add_todo(list_id, todo_title).map(|todo| todo.id()) else {
                    continue;
                };
                if done {
                    if let Some(todo) = lists.find_todo_mut(list_id, todo_id) {
                        todo.mark_done();
                    }
                }
            }
        }
        lists
    }

    /// Returns the id of the first list with the given title.
    #[must_use]
    pub fn list_id(lists: &TodoLists, title: &str) -> Option<ListId> {
        lists
            .lists()
            .iter()
            .find(|list| list.title() == title)
            .map(todos_core::TodoList::id)
    }
}

// Re-export commonly used items
pub use reducer_test::{assertions, ReducerTest};
