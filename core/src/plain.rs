//! Plain records persisted in the session between requests.
//!
//! These carry no behaviour. The domain types rebuild themselves from them
//! through their `from_plain` factories and project back through `to_plain`,
//! so a change to the persisted shape only touches those two functions per
//! entity.

use crate::types::{ListId, TodoId};
use serde::{Deserialize, Serialize};

/// Persisted shape of a single todo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainTodo {
    /// Todo identifier
    pub id: TodoId,
    /// Title of the todo
    pub title: String,
    /// Whether the todo is done
    #[serde(default)]
    pub done: bool,
}

/// Persisted shape of a todo list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainTodoList {
    /// List identifier
    pub id: ListId,
    /// Title of the list
    pub title: String,
    /// Todos in insertion order
    #[serde(default)]
    pub todos: Vec<PlainTodo>,
}

/// Persisted shape of a session's whole list collection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainTodoLists {
    /// Next id the collection will hand out
    #[serde(default)]
    pub next_id: u64,
    /// Lists in insertion order
    #[serde(default)]
    pub lists: Vec<PlainTodoList>,
}
