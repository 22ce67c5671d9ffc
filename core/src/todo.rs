//! A single task with a title and a done flag.

use crate::error::{DomainError, Result};
use crate::plain::PlainTodo;
use crate::types::TodoId;

/// A single todo item.
///
/// Owned by exactly one [`TodoList`](crate::list::TodoList); removing it from
/// that list destroys it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Todo {
    id: TodoId,
    title: String,
    done: bool,
}

impl Todo {
    /// Creates a todo that is not yet done.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidArgument`] if `title` is empty.
    pub fn new(id: TodoId, title: impl Into<String>) -> Result<Self> {
        let title = title.into();
        if title.is_empty() {
            return Err(DomainError::InvalidArgument(
                "todo title cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id,
            title,
            done: false,
        })
    }

    /// Rebuilds a todo from its persisted record, keeping its id.
    #[must_use]
    pub fn from_plain(plain: PlainTodo) -> Self {
        Self {
            id: plain.id,
            title: plain.title,
            done: plain.done,
        }
    }

    /// Projects the todo onto its persisted record.
    #[must_use]
    pub fn to_plain(&self) -> PlainTodo {
        PlainTodo {
            id: self.id,
            title: self.title.clone(),
            done: self.done,
        }
    }

    /// Returns the todo's id
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the todo's title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns whether the todo is done
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Marks the todo as done
    pub const fn mark_done(&mut self) {
        self.done = true;
    }

    /// Marks the todo as not done
    pub const fn mark_undone(&mut self) {
        self.done = false;
    }

    /// Flips the done flag and returns the new value.
    pub const fn toggle(&mut self) -> bool {
        self.done = !self.done;
        self.done
    }
}
