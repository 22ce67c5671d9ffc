//! The collection of lists belonging to one session.

use crate::error::{DomainError, Result};
use crate::list::TodoList;
use crate::plain::PlainTodoLists;
use crate::sorting::sort_todo_lists;
use crate::todo::Todo;
use crate::types::{ListId, TodoId};

/// All todo lists of one session, in insertion order.
///
/// List ids and todo ids are drawn from one monotonic counter owned by the
/// collection and persisted with it, so an id is never handed out twice even
/// after the entity carrying it has been removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoLists {
    lists: Vec<TodoList>,
    next_id: u64,
}

impl Default for TodoLists {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoLists {
    /// Creates an empty collection
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lists: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuilds the collection from persisted data.
    ///
    /// The counter is raised past every persisted id if the stored value is
    /// missing or stale.
    #[must_use]
    pub fn from_plain(plain: PlainTodoLists) -> Self {
        let highest = plain
            .lists
            .iter()
            .flat_map(|list| {
                std::iter::once(list.id.get()).chain(list.todos.iter().map(|todo| todo.id.get()))
            })
            .max()
            .unwrap_or(0);

        Self {
            next_id: plain.next_id.max(highest + 1),
            lists: plain.lists.into_iter().map(TodoList::from_plain).collect(),
        }
    }

    /// Projects the collection onto its persisted record.
    #[must_use]
    pub fn to_plain(&self) -> PlainTodoLists {
        PlainTodoLists {
            next_id: self.next_id,
            lists: self.lists.iter().map(TodoList::to_plain).collect(),
        }
    }

    /// Returns the lists in insertion order
    #[must_use]
    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    /// Returns the lists in display order
    #[must_use]
    pub fn sorted(&self) -> Vec<&TodoList> {
        sort_todo_lists(&self.lists)
    }

    /// Returns the number of lists
    #[must_use]
    pub const fn len(&self) -> usize {
        self.lists.len()
    }

    /// Returns true if there are no lists
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    const fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Appends a new, empty list and returns it.
    pub fn create_list(&mut self, title: impl Into<String>) -> &TodoList {
        let id = ListId::new(self.allocate_id());
        let index = self.lists.len();
        self.lists.push(TodoList::new(id, title));
        &self.lists[index]
    }

    /// Creates a todo at the end of the given list and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NotFound`] if the list does not exist, or
    /// [`DomainError::InvalidArgument`] if `title` is empty.
    pub fn add_todo(&mut self, list_id: ListId, title: impl Into<String>) -> Result<&Todo> {
        let Some(index) = self.lists.iter().position(|list| list.id() == list_id) else {
            return Err(DomainError::NotFound {
                resource: "Todo list",
                id: list_id.get(),
            });
        };

        let todo = Todo::new(TodoId::new(self.next_id), title)?;
        self.allocate_id();

        let list = &mut self.lists[index];
        list.add(todo);
        Ok(&list.todos()[list.len() - 1])
    }

    /// Looks up a list by id
    #[must_use]
    pub fn find_list(&self, id: ListId) -> Option<&TodoList> {
        self.lists.iter().find(|list| list.id() == id)
    }

    /// Looks up a list by id for mutation
    pub fn find_list_mut(&mut self, id: ListId) -> Option<&mut TodoList> {
        self.lists.iter_mut().find(|list| list.id() == id)
    }

    /// Looks up a todo by its list and its own id
    #[must_use]
    pub fn find_todo(&self, list_id: ListId, todo_id: TodoId) -> Option<&Todo> {
        self.find_list(list_id)?.find_by_id(todo_id)
    }

    /// Looks up a todo by its list and its own id for mutation
    pub fn find_todo_mut(&mut self, list_id: ListId, todo_id: TodoId) -> Option<&mut Todo> {
        self.find_list_mut(list_id)?.find_by_id_mut(todo_id)
    }

    /// Removes a list and all of its todos.
    pub fn remove_list(&mut self, id: ListId) -> Option<TodoList> {
        let index = self.lists.iter().position(|list| list.id() == id)?;
        Some(self.lists.remove(index))
    }

    /// Removes a single todo from a list.
    pub fn remove_todo(&mut self, list_id: ListId, todo_id: TodoId) -> Option<Todo> {
        self.find_list_mut(list_id)?.remove_by_id(todo_id)
    }

    /// Returns true if a list other than `except` already uses `title`.
    ///
    /// Titles are compared exactly, including case.
    #[must_use]
    pub fn title_taken(&self, title: &str, except: Option<ListId>) -> bool {
        self.lists
            .iter()
            .any(|list| list.title() == title && Some(list.id()) != except)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::plain::{PlainTodo, PlainTodoList};

    #[test]
    fn created_lists_get_distinct_ids() {
        let mut lists = TodoLists::new();
        let first = lists.create_list("Work").id();
        let second = lists.create_list("Home").id();

        assert_ne!(first, second);
        assert_eq!(lists.len(), 2);
        assert_eq!(lists.find_list(second).map(TodoList::title), Some("Home"));
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut lists = TodoLists::new();
        let list_id = lists.create_list("Work").id();
        let todo_id = lists.add_todo(list_id, "Get coffee").unwrap().id();

        assert!(lists.remove_todo(list_id, todo_id).is_some());
        let next = lists.add_todo(list_id, "Get coffee").unwrap().id();
        assert_ne!(next, todo_id);

        assert!(lists.remove_list(list_id).is_some());
        let replacement = lists.create_list("Work").id();
        assert_ne!(replacement, list_id);
    }

    #[test]
    fn add_todo_to_missing_list_fails() {
        let mut lists = TodoLists::new();
        let err = lists.add_todo(ListId::new(42), "Orphan").unwrap_err();
        assert_eq!(
            err,
            DomainError::NotFound {
                resource: "Todo list",
                id: 42
            }
        );
    }

    #[test]
    fn add_todo_with_empty_title_does_not_consume_an_id() {
        let mut lists = TodoLists::new();
        let list_id = lists.create_list("Work").id();
        assert!(lists.add_todo(list_id, "").is_err());

        let plain = lists.to_plain();
        assert_eq!(plain.next_id, list_id.get() + 1);
    }

    #[test]
    fn lookups_return_none_when_missing() {
        let mut lists = TodoLists::new();
        let list_id = lists.create_list("Work").id();

        assert!(lists.find_list(ListId::new(999)).is_none());
        assert!(lists.find_todo(list_id, TodoId::new(999)).is_none());
        assert!(lists.find_todo(ListId::new(999), TodoId::new(1)).is_none());
        assert!(lists.remove_list(ListId::new(999)).is_none());
        assert!(lists.remove_todo(list_id, TodoId::new(999)).is_none());
    }

    #[test]
    fn title_taken_ignores_the_list_being_renamed() {
        let mut lists = TodoLists::new();
        let work = lists.create_list("Work").id();
        lists.create_list("Home");

        assert!(lists.title_taken("Home", Some(work)));
        assert!(lists.title_taken("Work", None));
        assert!(!lists.title_taken("Work", Some(work)));
        assert!(!lists.title_taken("work", None));
    }

    #[test]
    fn from_plain_repairs_stale_counter() {
        let plain = PlainTodoLists {
            next_id: 0,
            lists: vec![PlainTodoList {
                id: ListId::new(3),
                title: "Home".to_string(),
                todos: vec![PlainTodo {
                    id: TodoId::new(8),
                    title: "Feed the cats".to_string(),
                    done: true,
                }],
            }],
        };

        let mut lists = TodoLists::from_plain(plain);
        let created = lists.create_list("Work").id();
        assert_eq!(created, ListId::new(9));
    }

    #[test]
    fn plain_round_trip_preserves_everything() {
        let mut lists = TodoLists::new();
        let home = lists.create_list("Home").id();
        lists.add_todo(home, "Buy milk").unwrap();
        lists.create_list("Work");

        let plain = lists.to_plain();
        assert_eq!(TodoLists::from_plain(plain), lists);
    }

    #[test]
    fn sorted_uses_display_order() {
        let mut lists = TodoLists::new();
        let done = lists.create_list("Alpha").id();
        let todo_id = lists.add_todo(done, "x").unwrap().id();
        if let Some(todo) = lists.find_todo_mut(done, todo_id) {
            todo.mark_done();
        }
        lists.create_list("beta");

        let titles: Vec<&str> = lists.sorted().iter().map(|list| list.title()).collect();
        assert_eq!(titles, vec!["beta", "Alpha"]);
        assert_eq!(lists.lists()[0].title(), "Alpha");
    }
}
