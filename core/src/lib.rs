//! # Todos Core
//!
//! Domain model and business rules for a multi-list todo manager.
//!
//! This crate is the functional core of the application: it owns no I/O and
//! knows nothing about HTTP or sessions.
//!
//! ## Core Concepts
//!
//! - **Todo**: a single task with a title and a done flag
//! - **`TodoList`**: an ordered collection of todos with a title
//! - **`TodoLists`**: all lists of one session, plus the id counter
//! - **Display order**: not-done before done, then case-insensitive title
//! - **Reducer**: `(TodoLists, TodosAction, TodosEnvironment) → (TodoLists, Effects)`
//! - **Plain data**: serde records a session persists between requests
//!
//! ## Example
//!
//! ```
//! use todos_core::{sort_todos, TodoLists};
//!
//! let mut lists = TodoLists::new();
//! let home = lists.create_list("Home").id();
//! let milk = lists.add_todo(home, "Buy milk")?.id();
//! lists.add_todo(home, "Call mom")?;
//!
//! if let Some(todo) = lists.find_todo_mut(home, milk) {
//!     todo.mark_done();
//! }
//!
//! let list = lists.find_list(home).expect("list was just created");
//! let titles: Vec<&str> = sort_todos(list).iter().map(|todo| todo.title()).collect();
//! assert_eq!(titles, ["Call mom", "Buy milk"]);
//! # Ok::<(), todos_core::DomainError>(())
//! ```

pub mod actions;
pub mod effect;
pub mod error;
pub mod list;
pub mod lists;
pub mod plain;
pub mod reducer;
pub mod seed;
pub mod sorting;
pub mod todo;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use actions::TodosAction;
pub use effect::{Effect, Flash, FlashKind};
pub use error::{DomainError, Result};
pub use list::TodoList;
pub use lists::TodoLists;
pub use plain::{PlainTodo, PlainTodoList, PlainTodoLists};
pub use reducer::{Reducer, TodosEnvironment, TodosReducer};
pub use smallvec::SmallVec;
pub use sorting::{compare_by_title, sort_todo_lists, sort_todos, DisplayOrder};
pub use todo::Todo;
pub use types::{ListId, TodoId};
