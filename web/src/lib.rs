//! Server-rendered HTTP front end for the todos application.
//!
//! This crate is the imperative shell around `todos-core`:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         Imperative Shell (Axum)         │  ← HTTP, forms, cookies
//! │  - Session layer (load / save)          │  ← Flash messages
//! │  - Effect interpretation, HTML views    │  ← Logging, metrics
//! ├─────────────────────────────────────────┤
//! │         Functional Core (todos-core)    │
//! │  - TodosReducer                         │  ← No I/O
//! │  - Sorting, validation                  │  ← Effects as values
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Request Flow
//!
//! 1. **Session layer** loads the visitor's session from the cookie
//! 2. **Handler** builds a `TodosAction` from the form
//! 3. **Dispatch** runs the reducer against the session's lists
//! 4. **Interpret** effects: queue flashes, redirect, re-render or 404
//! 5. **Session layer** saves the session and renews the cookie

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod session;
pub mod state;
pub mod views;

// Re-export key types for convenience
pub use config::Config;
pub use error::{AppError, SessionError};
pub use middleware::SessionLayer;
pub use router::app_router;
pub use session::{InMemorySessionStore, Session, SessionId, SessionRecord, SessionStore};
pub use state::AppState;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
