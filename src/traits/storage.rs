//! Session storage trait abstraction.
//!
//! The persisted session is an opaque key-value blob from the client's point
//! of view: it is read once at startup and rewritten on every session
//! mutation.

use async_trait::async_trait;

use crate::auth::Session;

/// Session storage errors.
#[derive(Debug, Clone)]
pub enum StorageError {
    /// Failed to load the session
    LoadFailed(String),
    /// Failed to save the session
    SaveFailed(String),
    /// Failed to clear the session
    ClearFailed(String),
    /// Serialization/deserialization error
    Serialization(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::LoadFailed(msg) => write!(f, "Failed to load session: {}", msg),
            StorageError::SaveFailed(msg) => write!(f, "Failed to save session: {}", msg),
            StorageError::ClearFailed(msg) => write!(f, "Failed to clear session: {}", msg),
            StorageError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Durable storage for the signed-in session.
///
/// Implementations include the production JSON file store and an in-memory
/// store for tests.
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Load the persisted session.
    ///
    /// # Returns
    /// - `Ok(Some(session))` if a session was persisted
    /// - `Ok(None)` if nothing is stored
    /// - `Err(error)` if reading failed
    async fn load(&self) -> Result<Option<Session>, StorageError>;

    /// Persist the session, replacing whatever was stored before.
    async fn save(&self, session: &Session) -> Result<(), StorageError>;

    /// Remove the persisted session. Clearing an empty store succeeds.
    async fn clear(&self) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        assert_eq!(
            StorageError::LoadFailed("read error".to_string()).to_string(),
            "Failed to load session: read error"
        );
        assert_eq!(
            StorageError::SaveFailed("disk full".to_string()).to_string(),
            "Failed to save session: disk full"
        );
        assert_eq!(
            StorageError::ClearFailed("denied".to_string()).to_string(),
            "Failed to clear session: denied"
        );
        assert_eq!(
            StorageError::Serialization("invalid json".to_string()).to_string(),
            "Serialization error: invalid json"
        );
    }
}
