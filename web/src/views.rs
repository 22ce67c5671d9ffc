//! HTML pages.
//!
//! Every page is rendered through [`layout`], which also shows the flash
//! messages handed to it. All user-supplied text goes through [`escape`].

use axum::http::StatusCode;
use axum::response::Html;
use std::fmt::Write as _;
use todos_core::{sort_todos, Flash, TodoList, TodoLists};

/// Escape text for use in HTML content and quoted attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn flash_block(flash: &[Flash]) -> String {
    if flash.is_empty() {
        return String::new();
    }

    let mut items = String::new();
    for message in flash {
        let _ = write!(
            items,
            r#"<li class="flash {}">{}</li>"#,
            message.kind.as_str(),
            escape(&message.message)
        );
    }
    format!(r#"<ul class="flash-messages">{items}</ul>"#)
}

fn layout(title: &str, flash: &[Flash], content: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>{title}</title>
    <link rel="stylesheet" href="/static/stylesheets/application.css">
  </head>
  <body>
    <header>
      <h1><a href="/lists">Todo Tracker</a></h1>
    </header>
    <main>
      {flash}
      {content}
    </main>
  </body>
</html>
"#,
        title = escape(title),
        flash = flash_block(flash),
    ))
}

/// All lists in display order with their progress.
#[must_use]
pub fn lists_page(lists: &TodoLists, flash: &[Flash]) -> Html<String> {
    let body = if lists.is_empty() {
        r#"<p id="no_list">You don't have any todo lists. Why not create one?</p>"#.to_string()
    } else {
        let mut items = String::new();
        for list in lists.sorted() {
            let _ = write!(
                items,
                r#"<li class="{class}"><a href="/lists/{id}"><h2>{title}</h2><p>{done} / {total}</p></a></li>"#,
                class = if list.is_done() { "done" } else { "" },
                id = list.id(),
                title = escape(list.title()),
                done = list.done_count(),
                total = list.len(),
            );
        }
        format!(r#"<ul id="lists">{items}</ul>"#)
    };

    let content = format!(
        r#"<section id="todo_lists">
  <header><h2>Todo Lists</h2><a class="add" href="/lists/new">New List</a></header>
  {body}
</section>"#
    );
    layout("Todo Lists", flash, &content)
}

/// Form for a new list, prefilled with `title` after a rejected post.
#[must_use]
pub fn new_list_page(title: &str, flash: &[Flash]) -> Html<String> {
    let content = format!(
        r#"<form action="/lists" method="post">
  <dl>
    <dt><label for="todoListTitle">Enter the title for your new list:</label></dt>
    <dd><input id="todoListTitle" name="todoListTitle" placeholder="List Title" type="text" value="{title}"></dd>
  </dl>
  <fieldset class="actions">
    <input type="submit" value="Save">
    <a href="/lists">Cancel</a>
  </fieldset>
</form>"#,
        title = escape(title),
    );
    layout("New List", flash, &content)
}

/// One list with its todos in display order.
///
/// `todo_title` prefills the add-todo form after a rejected post.
#[must_use]
pub fn list_page(list: &TodoList, todo_title: &str, flash: &[Flash]) -> Html<String> {
    let id = list.id();

    let mut todos = String::new();
    for todo in sort_todos(list) {
        let _ = write!(
            todos,
            r#"<li class="{class}">
  <form action="/lists/{id}/todos/{todo_id}/toggle" method="post" class="check">
    <input type="hidden" name="done" value="{next}"><button>Toggle</button>
  </form>
  <h3>{title}</h3>
  <form action="/lists/{id}/todos/{todo_id}/destroy" method="post" class="delete">
    <button>Delete</button>
  </form>
</li>"#,
            class = if todo.is_done() { "done" } else { "" },
            todo_id = todo.id(),
            next = !todo.is_done(),
            title = escape(todo.title()),
        );
    }

    let complete_all = if list.is_empty() {
        String::new()
    } else {
        format!(
            r#"<form action="/lists/{id}/complete_all" method="post"><button class="check" type="submit">Complete All</button></form>"#
        )
    };

    let content = format!(
        r#"<section id="todos" class="{class}">
  <header>
    <h2>{title}</h2>
    <ul>
      <li>{complete_all}</li>
      <li><a class="edit" href="/lists/{id}/edit">Edit List</a></li>
    </ul>
  </header>
  <ul>{todos}</ul>
</section>
<form action="/lists/{id}/todos" method="post">
  <dl>
    <dt><label for="todoTitle">Enter a new todo item:</label></dt>
    <dd><input id="todoTitle" name="todoTitle" placeholder="Something to do" type="text" value="{todo_title}"></dd>
  </dl>
  <fieldset class="actions"><button>Add</button></fieldset>
</form>
<a class="list" href="/lists">All Lists</a>"#,
        class = if list.is_done() { "done" } else { "" },
        title = escape(list.title()),
        todo_title = escape(todo_title),
    );
    layout(list.title(), flash, &content)
}

/// Rename form for a list, with the delete button.
///
/// `title` is the list's current title, or the rejected input.
#[must_use]
pub fn edit_list_page(list: &TodoList, title: &str, flash: &[Flash]) -> Html<String> {
    let content = format!(
        r#"<form action="/lists/{id}/destroy" method="post" class="delete">
  <fieldset class="actions"><button>Delete List</button></fieldset>
</form>
<form action="/lists/{id}/edit" method="post">
  <h2>Editing '{current}'</h2>
  <dl>
    <dt><label for="todoListTitle">Enter the new title for the list:</label></dt>
    <dd><input id="todoListTitle" name="todoListTitle" placeholder="List Title" type="text" value="{title}"></dd>
  </dl>
  <fieldset class="actions">
    <button>Save</button>
    <a href="/lists/{id}">Cancel</a>
  </fieldset>
</form>"#,
        id = list.id(),
        current = escape(list.title()),
        title = escape(title),
    );
    layout("Edit List", flash, &content)
}

/// Page shown for errors, including 404.
#[must_use]
pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let reason = status.canonical_reason().unwrap_or("Error");
    let content = format!(
        r#"<section id="error">
  <h2>{code} {reason}</h2>
  <p>{message}</p>
  <a href="/lists">All Lists</a>
</section>"#,
        code = status.as_u16(),
        message = escape(message),
    );
    layout(reason, &[], &content)
}
