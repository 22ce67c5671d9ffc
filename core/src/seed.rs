//! Sample lists given to a brand-new session.

use crate::lists::TodoLists;

/// Builds the sample collection: a mix of done, partly done, empty and
/// lower-case titled lists so every display rule is visible on first load.
#[must_use]
pub fn sample_lists() -> TodoLists {
    let samples: [(&str, &[(&str, bool)]); 4] = [
        (
            "Work Todos",
            &[
                ("Get coffee", true),
                ("Chat with co-workers", true),
                ("Duck out of meeting", false),
            ],
        ),
        (
            "Home Todos",
            &[
                ("Feed the cats", true),
                ("Go to bed", true),
                ("Buy milk", true),
                ("Study for Launch School", true),
            ],
        ),
        ("Additional Todos", &[]),
        ("social todos", &[("Go to Libby's birthday party", false)]),
    ];

    let mut lists = TodoLists::new();
    for (title, todos) in samples {
        let list_id = lists.create_list(title).id();
        for &(todo_title, done) in todos {
            if let Ok(todo_id) = lists.add_todo(list_id, todo_title).map(|todo| todo.id()) {
                if done {
                    if let Some(todo) = lists.find_todo_mut(list_id, todo_id) {
                        todo.mark_done();
                    }
                }
            }
        }
    }
    lists
}
