//! File-based session storage adapter.

use async_trait::async_trait;
use std::path::Path;

use crate::auth::session::{Session, SessionFile};
use crate::error::SystemError;
use crate::traits::{SessionStorage, StorageError};

/// Session storage backed by a JSON file.
///
/// Wraps [`SessionFile`] behind the [`SessionStorage`] trait.
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    file: SessionFile,
}

impl FileSessionStorage {
    /// Storage in the default location (`~/.gobarber/session.json`).
    pub fn new() -> Result<Self, SystemError> {
        SessionFile::new()
            .map(|file| Self { file })
            .ok_or(SystemError::NoHomeDirectory)
    }

    /// Storage at an explicit path.
    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            file: SessionFile::with_path(path.as_ref()),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

#[async_trait]
impl SessionStorage for FileSessionStorage {
    async fn load(&self) -> Result<Option<Session>, StorageError> {
        self.file.load()
    }

    async fn save(&self, session: &Session) -> Result<(), StorageError> {
        self.file.save(session)
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.file.clear()
    }
}
