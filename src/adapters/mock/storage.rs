//! In-memory session storage for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::auth::Session;
use crate::traits::{SessionStorage, StorageError};

#[derive(Debug, Default)]
struct Inner {
    session: Option<Session>,
    save_should_fail: bool,
    load_should_fail: bool,
    clear_should_fail: bool,
    saves: usize,
}

/// Session storage kept in memory, with switchable failures.
///
/// Clones share the same state, so a test can keep a handle while the
/// session store owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStorage {
    inner: Arc<Mutex<Inner>>,
}

impl InMemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds a session, as after a previous run.
    pub fn with_session(session: Session) -> Self {
        let storage = Self::new();
        storage.set_session(Some(session));
        storage
    }

    fn inner(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_save_should_fail(&self, should_fail: bool) {
        self.inner().save_should_fail = should_fail;
    }

    pub fn set_load_should_fail(&self, should_fail: bool) {
        self.inner().load_should_fail = should_fail;
    }

    pub fn set_clear_should_fail(&self, should_fail: bool) {
        self.inner().clear_should_fail = should_fail;
    }

    /// Current stored session, read synchronously.
    pub fn session(&self) -> Option<Session> {
        self.inner().session.clone()
    }

    pub fn set_session(&self, session: Option<Session>) {
        self.inner().session = session;
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.inner().saves
    }
}

#[async_trait]
impl SessionStorage for InMemorySessionStorage {
    async fn load(&self) -> Result<Option<Session>, StorageError> {
        let inner = self.inner();
        if inner.load_should_fail {
            return Err(StorageError::LoadFailed("Mock load failure".to_string()));
        }
        Ok(inner.session.clone())
    }

    async fn save(&self, session: &Session) -> Result<(), StorageError> {
        let mut inner = self.inner();
        if inner.save_should_fail {
            return Err(StorageError::SaveFailed("Mock save failure".to_string()));
        }
        inner.session = Some(session.clone());
        inner.saves += 1;
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut inner = self.inner();
        if inner.clear_should_fail {
            return Err(StorageError::ClearFailed("Mock clear failure".to_string()));
        }
        inner.session = None;
        Ok(())
    }
}
