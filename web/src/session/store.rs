//! Session persistence.

use super::{SessionId, SessionRecord};
use crate::error::SessionError;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Backend that keeps session records between requests.
///
/// Records expire `ttl` after their last save.
pub trait SessionStore: Clone + Send + Sync + 'static {
    /// Load a session record.
    ///
    /// # Returns
    ///
    /// `None` if no record exists for `id` or it has expired.
    ///
    /// # Errors
    ///
    /// Returns error if the backend fails or the record cannot be decoded.
    fn load(
        &self,
        id: SessionId,
    ) -> impl Future<Output = Result<Option<SessionRecord>, SessionError>> + Send;

    /// Store a session record, replacing any previous one and renewing its TTL.
    ///
    /// # Errors
    ///
    /// Returns error if the backend fails or the record cannot be encoded.
    fn save(
        &self,
        id: SessionId,
        record: &SessionRecord,
        ttl: Duration,
    ) -> impl Future<Output = Result<(), SessionError>> + Send;

    /// Delete a session record. Deleting a missing record is not an error.
    ///
    /// # Errors
    ///
    /// Returns error if the backend fails.
    fn delete(&self, id: SessionId) -> impl Future<Output = Result<(), SessionError>> + Send;
}

#[derive(Debug)]
struct StoredSession {
    payload: String,
    expires_at: DateTime<Utc>,
}

/// Process-local session store.
///
/// Records are kept as JSON so a round trip through the store behaves like
/// any external backend would. Expired entries are dropped lazily.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<Mutex<HashMap<SessionId, StoredSession>>>,
}

impl InMemorySessionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored, unexpired sessions.
    ///
    /// # Errors
    ///
    /// Returns error if lock is poisoned.
    pub fn session_count(&self) -> Result<usize, SessionError> {
        let now = Utc::now();
        Ok(self
            .sessions
            .lock()
            .map_err(|_| SessionError::LockPoisoned)?
            .values()
            .filter(|stored| stored.expires_at > now)
            .count())
    }
}

fn expiry(ttl: Duration) -> DateTime<Utc> {
    chrono::Duration::from_std(ttl)
        .ok()
        .and_then(|ttl| Utc::now().checked_add_signed(ttl))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

impl SessionStore for InMemorySessionStore {
    fn load(
        &self,
        id: SessionId,
    ) -> impl Future<Output = Result<Option<SessionRecord>, SessionError>> + Send {
        let sessions = Arc::clone(&self.sessions);

        async move {
            let mut guard = sessions.lock().map_err(|_| SessionError::LockPoisoned)?;

            match guard.get(&id) {
                Some(stored) if stored.expires_at > Utc::now() => {
                    Ok(Some(serde_json::from_str(&stored.payload)?))
                }
                Some(_) => {
                    guard.remove(&id);
                    Ok(None)
                }
                None => Ok(None),
            }
        }
    }

    fn save(
        &self,
        id: SessionId,
        record: &SessionRecord,
        ttl: Duration,
    ) -> impl Future<Output = Result<(), SessionError>> + Send {
        let sessions = Arc::clone(&self.sessions);
        let payload = serde_json::to_string(record);

        async move {
            let stored = StoredSession {
                payload: payload?,
                expires_at: expiry(ttl),
            };
            let mut guard = sessions.lock().map_err(|_| SessionError::LockPoisoned)?;

            let now = Utc::now();
            guard.retain(|_, existing| existing.expires_at > now);
            guard.insert(id, stored);
            Ok(())
        }
    }

    fn delete(&self, id: SessionId) -> impl Future<Output = Result<(), SessionError>> + Send {
        let sessions = Arc::clone(&self.sessions);

        async move {
            sessions
                .lock()
                .map_err(|_| SessionError::LockPoisoned)?
                .remove(&id);
            Ok(())
        }
    }
}
