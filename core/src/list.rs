//! An ordered, titled collection of todos.

use crate::error::{DomainError, Result};
use crate::plain::PlainTodoList;
use crate::todo::Todo;
use crate::types::{ListId, TodoId};

/// A todo list.
///
/// `todos` keeps insertion order. Positions shift when a todo is removed, so
/// only [`TodoId`] identifies a todo across requests; positions are valid only
/// until the next mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoList {
    id: ListId,
    title: String,
    todos: Vec<Todo>,
}

impl TodoList {
    /// Creates an empty list.
    ///
    /// Titles are not checked here; validation happens before a command
    /// reaches the model.
    #[must_use]
    pub fn new(id: ListId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            todos: Vec::new(),
        }
    }

    /// Rebuilds a list and its todos from the persisted record, keeping ids
    /// and relative order.
    #[must_use]
    pub fn from_plain(plain: PlainTodoList) -> Self {
        Self {
            id: plain.id,
            title: plain.title,
            todos: plain.todos.into_iter().map(Todo::from_plain).collect(),
        }
    }

    /// Projects the list onto its persisted record.
    #[must_use]
    pub fn to_plain(&self) -> PlainTodoList {
        PlainTodoList {
            id: self.id,
            title: self.title.clone(),
            todos: self.todos.iter().map(Todo::to_plain).collect(),
        }
    }

    /// Returns the list's id
    #[must_use]
    pub const fn id(&self) -> ListId {
        self.id
    }

    /// Returns the list's title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replaces the title. Uniqueness among sibling lists is the caller's concern.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Returns the todos in insertion order
    #[must_use]
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Returns the number of todos
    #[must_use]
    pub const fn len(&self) -> usize {
        self.todos.len()
    }

    /// Returns true if the list holds no todos
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns the number of todos marked done
    #[must_use]
    pub fn done_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.is_done()).count()
    }

    /// Appends a todo. Duplicate titles are allowed.
    pub fn add(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Looks up a todo by id
    #[must_use]
    pub fn find_by_id(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id() == id)
    }

    /// Looks up a todo by id for mutation
    pub fn find_by_id_mut(&mut self, id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id() == id)
    }

    /// Returns the current position of the todo with the given id
    #[must_use]
    pub fn find_index_of(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id() == id)
    }

    /// Removes the todo at `index`, shifting later todos left.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::IndexOutOfRange`] if `index` is not a valid position.
    pub fn remove_at(&mut self, index: usize) -> Result<Todo> {
        if index >= self.todos.len() {
            return Err(DomainError::IndexOutOfRange {
                index,
                len: self.todos.len(),
            });
        }
        Ok(self.todos.remove(index))
    }

    /// Removes the todo with the given id, or returns `None` if it is absent.
    pub fn remove_by_id(&mut self, id: TodoId) -> Option<Todo> {
        let index = self.find_index_of(id)?;
        Some(self.todos.remove(index))
    }

    /// Marks every todo done. No-op on an empty list.
    pub fn mark_all_done(&mut self) {
        for todo in &mut self.todos {
            todo.mark_done();
        }
    }

    /// A list is done when it has at least one todo and all of them are done.
    /// An empty list is never done.
    #[must_use]
    pub fn is_done(&self) -> bool {
        !self.todos.is_empty() && self.todos.iter().all(Todo::is_done)
    }
}
