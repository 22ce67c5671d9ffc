//! Per-browser sessions holding each visitor's todo lists.
//!
//! A session is identified by a random id carried in a cookie. Its state
//! (the lists plus any pending flash messages) lives server-side in a
//! [`SessionStore`] as a [`SessionRecord`], and is materialized for the
//! duration of one request as a [`Session`] handle.

pub mod store;

pub use store::{InMemorySessionStore, SessionStore};

use crate::error::SessionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard};
use todos_core::{Flash, PlainTodoLists, TodoLists};
use uuid::Uuid;

/// Random identifier of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generates a fresh random id
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Everything a session persists between requests.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// The visitor's lists as plain data
    #[serde(default)]
    pub todo_lists: PlainTodoLists,
    /// Flash messages not yet shown
    #[serde(default)]
    pub flash: Vec<Flash>,
}

#[derive(Debug)]
struct SessionData {
    todo_lists: TodoLists,
    flash: Vec<Flash>,
}

/// Handle to the session of the current request.
///
/// Cloning is cheap; all clones share the same data. The session layer
/// inserts one into the request extensions and saves it back to the store
/// once the handler has responded.
#[derive(Clone, Debug)]
pub struct Session {
    id: SessionId,
    data: Arc<Mutex<SessionData>>,
}

impl Session {
    /// Creates a session holding `todo_lists` and no flash messages
    #[must_use]
    pub fn new(id: SessionId, todo_lists: TodoLists) -> Self {
        Self {
            id,
            data: Arc::new(Mutex::new(SessionData {
                todo_lists,
                flash: Vec::new(),
            })),
        }
    }

    /// Rehydrates a session from its stored record
    #[must_use]
    pub fn from_record(id: SessionId, record: SessionRecord) -> Self {
        Self {
            id,
            data: Arc::new(Mutex::new(SessionData {
                todo_lists: TodoLists::from_plain(record.todo_lists),
                flash: record.flash,
            })),
        }
    }

    /// Returns the session id
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    fn lock(&self) -> Result<MutexGuard<'_, SessionData>, SessionError> {
        self.data.lock().map_err(|_| SessionError::LockPoisoned)
    }

    /// Runs `f` with read access to the lists.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::LockPoisoned`] if another holder panicked.
    pub fn read<R>(&self, f: impl FnOnce(&TodoLists) -> R) -> Result<R, SessionError> {
        Ok(f(&self.lock()?.todo_lists))
    }

    /// Runs `f` with write access to the lists.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::LockPoisoned`] if another holder panicked.
    pub fn update<R>(&self, f: impl FnOnce(&mut TodoLists) -> R) -> Result<R, SessionError> {
        Ok(f(&mut self.lock()?.todo_lists))
    }

    /// Queues a flash message for the next rendered page.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::LockPoisoned`] if another holder panicked.
    pub fn push_flash(&self, flash: Flash) -> Result<(), SessionError> {
        self.lock()?.flash.push(flash);
        Ok(())
    }

    /// Removes and returns all queued flash messages.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::LockPoisoned`] if another holder panicked.
    pub fn take_flash(&self) -> Result<Vec<Flash>, SessionError> {
        Ok(std::mem::take(&mut self.lock()?.flash))
    }

    /// Snapshots the session into its storable form.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::LockPoisoned`] if another holder panicked.
    pub fn to_record(&self) -> Result<SessionRecord, SessionError> {
        let data = self.lock()?;
        Ok(SessionRecord {
            todo_lists: data.todo_lists.to_plain(),
            flash: data.flash.clone(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn session_id_round_trips_through_text() {
        let id = SessionId::new();
        let parsed: SessionId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!("not-a-uuid".parse::<SessionId>().is_err());
    }

    #[test]
    fn flash_is_taken_once() {
        let session = Session::new(SessionId::new(), TodoLists::new());
        session.push_flash(Flash::success("Todo list deleted.")).unwrap();

        assert_eq!(session.take_flash().unwrap().len(), 1);
        assert!(session.take_flash().unwrap().is_empty());
    }

    #[test]
    fn clones_share_state() {
        let session = Session::new(SessionId::new(), TodoLists::new());
        let clone = session.clone();
        clone.update(|lists| lists.create_list("Home").id()).unwrap();

        assert_eq!(session.read(TodoLists::len).unwrap(), 1);
    }

    #[test]
    fn record_preserves_lists_and_counter() {
        let session = Session::new(SessionId::new(), TodoLists::new());
        let home = session.update(|lists| lists.create_list("Home").id()).unwrap();
        session
            .update(|lists| lists.add_todo(home, "Buy milk").map(|todo| todo.id()))
            .unwrap()
            .unwrap();
        session.push_flash(Flash::info("hello")).unwrap();

        let record = session.to_record().unwrap();
        assert_eq!(record.todo_lists.next_id, 3);
        assert_eq!(record.flash, vec![Flash::info("hello")]);

        let restored = Session::from_record(SessionId::new(), record);
        let next = restored.update(|lists| lists.create_list("Work").id()).unwrap();
        assert_eq!(next.get(), 3);
    }
}
