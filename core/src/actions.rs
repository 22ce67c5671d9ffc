//! Commands a user can issue against their lists.

use crate::types::{ListId, TodoId};

/// Actions handled by [`TodosReducer`](crate::reducer::TodosReducer).
///
/// Titles arrive exactly as submitted; the reducer trims and validates them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodosAction {
    /// Create a new, empty list
    CreateList {
        /// Requested title
        title: String,
    },

    /// Rename an existing list
    RenameList {
        /// List to rename
        list_id: ListId,
        /// Requested title
        title: String,
    },

    /// Delete a list and its todos
    DeleteList {
        /// List to delete
        list_id: ListId,
    },

    /// Append a todo to a list
    AddTodo {
        /// Owning list
        list_id: ListId,
        /// Requested title
        title: String,
    },

    /// Flip a todo between done and not done
    ToggleTodo {
        /// Owning list
        list_id: ListId,
        /// Todo to toggle
        todo_id: TodoId,
    },

    /// Delete a todo
    DeleteTodo {
        /// Owning list
        list_id: ListId,
        /// Todo to delete
        todo_id: TodoId,
    },

    /// Mark every todo in a list as done
    CompleteAll {
        /// List to complete
        list_id: ListId,
    },
}

impl TodosAction {
    /// Short, stable name for logs and metrics labels
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateList { .. } => "create_list",
            Self::RenameList { .. } => "rename_list",
            Self::DeleteList { .. } => "delete_list",
            Self::AddTodo { .. } => "add_todo",
            Self::ToggleTodo { .. } => "toggle_todo",
            Self::DeleteTodo { .. } => "delete_todo",
            Self::CompleteAll { .. } => "complete_all",
        }
    }
}
