//! End-to-end tests of the HTTP interface through the full router.

#![allow(clippy::unwrap_used)] // Tests can unwrap
#![allow(clippy::expect_used)] // Tests can expect

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use std::time::Duration;
use todos_testing::fixtures;
use todos_web::{app_router, Config, InMemorySessionStore, SessionId, SessionRecord, SessionStore};
use tower::ServiceExt;

fn unseeded_config() -> Config {
    let mut config = Config::default();
    config.session.seed = false;
    config
}

fn app(store: &InMemorySessionStore) -> Router {
    app_router(&unseeded_config(), store.clone())
}

/// Stores a session with Home(1): Buy milk(2), Call mom(3, done) and Work(4).
async fn home_and_work_session(store: &InMemorySessionStore) -> String {
    let lists = fixtures::lists(&[
        ("Home", &[("Buy milk", false), ("Call mom", true)]),
        ("Work", &[]),
    ]);
    let record = SessionRecord {
        todo_lists: lists.to_plain(),
        flash: Vec::new(),
    };
    let id = SessionId::new();
    store
        .save(id, &record, Duration::from_secs(60))
        .await
        .unwrap();
    format!("todos.sid={id}")
}

async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response {
    let mut request = Request::get(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(app: &Router, uri: &str, body: &str, cookie: Option<&str>) -> Response {
    let mut request = Request::post(uri).header(
        header::CONTENT_TYPE,
        "application/x-www-form-urlencoded",
    );
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(request.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

fn session_cookie(response: &Response) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("every page sets the session cookie")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect has a location")
        .to_str()
        .unwrap()
}

async fn text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn root_redirects_to_lists() {
    let app = app(&InMemorySessionStore::new());

    let response = get(&app, "/", None).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/lists");
}

#[tokio::test]
async fn created_list_appears_with_flash_shown_once() {
    let store = InMemorySessionStore::new();
    let app = app(&store);

    let created = post_form(&app, "/lists", "todoListTitle=Groceries", None).await;
    assert_eq!(created.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&created), "/lists");
    let cookie = session_cookie(&created);

    let page = text(get(&app, "/lists", Some(&cookie)).await).await;
    assert!(page.contains("Groceries"));
    assert!(page.contains("<p>0 / 0</p>"));
    assert!(page.contains("The todo list has been created."));

    let again = text(get(&app, "/lists", Some(&cookie)).await).await;
    assert!(again.contains("Groceries"));
    assert!(!again.contains("The todo list has been created."));
    assert_eq!(store.session_count().unwrap(), 1);
}

#[tokio::test]
async fn blank_list_title_rerenders_form() {
    let app = app(&InMemorySessionStore::new());

    let response = post_form(&app, "/lists", "todoListTitle=+++", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let page = text(response).await;
    assert!(page.contains("The list title is required."));
    assert!(page.contains(r#"action="/lists""#));
}

#[tokio::test]
async fn duplicate_list_title_keeps_entered_text() {
    let store = InMemorySessionStore::new();
    let cookie = home_and_work_session(&store).await;
    let app = app(&store);

    let response = post_form(&app, "/lists", "todoListTitle=Home", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let page = text(response).await;
    assert!(page.contains("List title must be unique."));
    assert!(page.contains(r#"value="Home""#));
}

#[tokio::test]
async fn missing_and_malformed_ids_are_not_found() {
    let store = InMemorySessionStore::new();
    let cookie = home_and_work_session(&store).await;
    let app = app(&store);

    for uri in ["/lists/99", "/lists/abc", "/lists/1/edit/extra", "/nowhere"] {
        let response = get(&app, uri, Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }

    let response = post_form(&app, "/lists/1/todos/99/toggle", "", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(text(response).await.contains("Todo with id 99 not found"));
}

#[tokio::test]
async fn list_page_shows_todos_in_display_order() {
    let store = InMemorySessionStore::new();
    let cookie = home_and_work_session(&store).await;
    let app = app(&store);

    let response = get(&app, "/lists/1", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let page = text(response).await;
    assert!(page.find("Buy milk").unwrap() < page.find("Call mom").unwrap());
}

#[tokio::test]
async fn toggle_persists_across_requests() {
    let store = InMemorySessionStore::new();
    let cookie = home_and_work_session(&store).await;
    let app = app(&store);

    let toggled = post_form(&app, "/lists/1/todos/2/toggle", "", Some(&cookie)).await;
    assert_eq!(toggled.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&toggled), "/lists/1");

    let page = text(get(&app, "/lists/1", Some(&cookie)).await).await;
    assert!(page.contains("&quot;Buy milk&quot; marked done."));
    assert!(page.contains(r#"<section id="todos" class="done">"#));

    let overview = text(get(&app, "/lists", Some(&cookie)).await).await;
    assert!(overview.find("Work").unwrap() < overview.find("Home").unwrap());
}

#[tokio::test]
async fn too_long_todo_rerenders_list_page() {
    let store = InMemorySessionStore::new();
    let cookie = home_and_work_session(&store).await;
    let app = app(&store);
    let title = "x".repeat(101);

    let response = post_form(
        &app,
        "/lists/4/todos",
        &format!("todoTitle={title}"),
        Some(&cookie),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let page = text(response).await;
    assert!(page.contains("Todo title must be between 1 and 100 characters."));
    assert!(page.contains(&format!(r#"value="{title}""#)));
}

#[tokio::test]
async fn rename_and_delete_list() {
    let store = InMemorySessionStore::new();
    let cookie = home_and_work_session(&store).await;
    let app = app(&store);

    let renamed = post_form(&app, "/lists/4/edit", "todoListTitle=Office", Some(&cookie)).await;
    assert_eq!(renamed.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&renamed), "/lists/4");

    let edit = text(get(&app, "/lists/4/edit", Some(&cookie)).await).await;
    assert!(edit.contains(r#"value="Office""#));

    let deleted = post_form(&app, "/lists/4/destroy", "", Some(&cookie)).await;
    assert_eq!(location(&deleted), "/lists");

    let page = text(get(&app, "/lists", Some(&cookie)).await).await;
    assert!(page.contains("Todo list deleted."));
    assert!(!page.contains("Office"));
    assert_eq!(
        get(&app, "/lists/4", Some(&cookie)).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn complete_all_marks_list_done() {
    let store = InMemorySessionStore::new();
    let cookie = home_and_work_session(&store).await;
    let app = app(&store);

    let response = post_form(&app, "/lists/1/complete_all", "", Some(&cookie)).await;
    assert_eq!(location(&response), "/lists/1");

    let page = text(get(&app, "/lists", Some(&cookie)).await).await;
    assert!(page.contains("<p>2 / 2</p>"));
}

#[tokio::test]
async fn new_sessions_are_seeded_when_enabled() {
    let app = app_router(&Config::default(), InMemorySessionStore::new());

    let page = text(get(&app, "/lists", None).await).await;

    assert!(page.contains("Additional Todos"));
    assert!(page.contains("social todos"));
}

#[tokio::test]
async fn health_is_json_and_creates_no_session() {
    let store = InMemorySessionStore::new();
    let app = app(&store);

    let response = get(&app, "/health", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    assert_eq!(text(response).await, r#"{"status":"healthy"}"#);
    assert_eq!(store.session_count().unwrap(), 0);
}

#[tokio::test]
async fn unmatched_paths_are_not_found_without_a_session() {
    let store = InMemorySessionStore::new();
    let app = app_router(&Config::default(), store.clone());

    for uri in ["/favicon.ico", "/lists/1/edit/extra"] {
        let response = get(&app, uri, None).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        assert!(response.headers().get(header::SET_COOKIE).is_none(), "{uri}");
        assert!(text(response).await.contains("404 Not Found"));
    }
    assert_eq!(store.session_count().unwrap(), 0);
}
