use async_trait::async_trait;
use chrono::{DateTime, Utc};
use quiz_core::model::SessionState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Opaque key tying a client to its stored session (the cookie value).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    #[must_use]
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| StorageError::Serialization(e.to_string()))
    }
}

/// Persisted shape of a session: the state plus when it was last written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub state: SessionState,
    pub updated_at: DateTime<Utc>,
}

impl SessionRecord {
    #[must_use]
    pub fn new(state: SessionState, updated_at: DateTime<Utc>) -> Self {
        Self { state, updated_at }
    }
}

/// Repository contract for per-client session state.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Fetch the stored session, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails or the payload cannot be decoded.
    async fn load_session(&self, id: SessionId) -> Result<Option<SessionRecord>, StorageError>;

    /// Persist or replace the session.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the session cannot be stored.
    async fn save_session(&self, id: SessionId, record: &SessionRecord)
    -> Result<(), StorageError>;

    /// Drop the session. Removing a missing session is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails.
    async fn remove_session(&self, id: SessionId) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for tests and single-process runs.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    sessions: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl SessionRepository for InMemoryRepository {
    async fn load_session(&self, id: SessionId) -> Result<Option<SessionRecord>, StorageError> {
        let guard = self
            .sessions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(&id).cloned())
    }

    async fn save_session(
        &self,
        id: SessionId,
        record: &SessionRecord,
    ) -> Result<(), StorageError> {
        let mut guard = self
            .sessions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(id, record.clone());
        Ok(())
    }

    async fn remove_session(&self, id: SessionId) -> Result<(), StorageError> {
        let mut guard = self
            .sessions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(&id);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub sessions: Arc<dyn SessionRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let sessions: Arc<dyn SessionRepository> = Arc::new(InMemoryRepository::new());
        Self { sessions }
    }
}
