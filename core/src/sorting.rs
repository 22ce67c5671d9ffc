//! Display ordering for lists and todos.
//!
//! Lists and todos are ranked with the same two-tier rule: everything not
//! done comes before everything done, and each group is ordered by title,
//! ignoring case. Display order never changes the insertion order stored in
//! the model.

use crate::list::TodoList;
use crate::todo::Todo;
use std::cmp::Ordering;

/// Something that can be placed in display order.
pub trait DisplayOrder {
    /// Title used for ordering within a group
    fn title(&self) -> &str;

    /// Whether the item belongs to the done group
    fn is_done(&self) -> bool;
}

impl DisplayOrder for Todo {
    fn title(&self) -> &str {
        Todo::title(self)
    }

    fn is_done(&self) -> bool {
        Todo::is_done(self)
    }
}

impl DisplayOrder for TodoList {
    fn title(&self) -> &str {
        TodoList::title(self)
    }

    fn is_done(&self) -> bool {
        TodoList::is_done(self)
    }
}

/// Compares two items by lower-cased title.
///
/// Returns `Less` only when `a` sorts strictly before `b`. Equal titles
/// compare as `Greater`; this comparator never reports `Equal`.
pub fn compare_by_title<T: DisplayOrder + ?Sized>(a: &T, b: &T) -> Ordering {
    if a.title().to_lowercase() < b.title().to_lowercase() {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Returns the lists in display order: not-done lists first, then done
/// lists, each group ordered by title. The input is left untouched.
#[must_use]
pub fn sort_todo_lists(lists: &[TodoList]) -> Vec<&TodoList> {
    display_order(lists)
}

/// Returns the list's todos in display order: not-done todos first, then
/// done todos, each group ordered by title.
#[must_use]
pub fn sort_todos(list: &TodoList) -> Vec<&Todo> {
    display_order(list.todos())
}

fn display_order<T: DisplayOrder>(items: &[T]) -> Vec<&T> {
    let (done, not_done): (Vec<&T>, Vec<&T>) = items.iter().partition(|item| item.is_done());

    let mut ordered = sort_by_title(not_done);
    ordered.extend(sort_by_title(done));
    ordered
}

// std's slice sorts may panic when a comparator never returns `Equal`, so
// groups are merge sorted by hand.
fn sort_by_title<T: DisplayOrder>(mut items: Vec<&T>) -> Vec<&T> {
    if items.len() <= 1 {
        return items;
    }

    let right = sort_by_title(items.split_off(items.len() / 2));
    let left = sort_by_title(items);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        // The later item is compared against the earlier one, so a tie
        // keeps insertion order.
        if compare_by_title(right[j], left[i]) == Ordering::Less {
            merged.push(right[j]);
            j += 1;
        } else {
            merged.push(left[i]);
            i += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}
