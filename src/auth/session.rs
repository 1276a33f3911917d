//! Persisted session and its on-disk storage.
//!
//! The session is stored as pretty-printed JSON, by default in
//! `~/.gobarber/session.json`.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::models::User;
use crate::traits::StorageError;

/// The session directory name.
const SESSION_DIR: &str = ".gobarber";

/// The session file name.
const SESSION_FILE: &str = "session.json";

/// The signed-in identity together with its bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub token: String,
}

impl Session {
    pub fn new(user: User, token: impl Into<String>) -> Self {
        Self {
            user,
            token: token.into(),
        }
    }
}

/// Default session file location under the user's home directory.
pub fn default_session_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(SESSION_DIR).join(SESSION_FILE))
}

/// Reads and writes the session file.
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    /// Session file in the default location.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn new() -> Option<Self> {
        default_session_path().map(Self::with_path)
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the session. A missing file means "signed out".
    pub fn load(&self) -> Result<Option<Session>, StorageError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::LoadFailed(e.to_string())),
        };

        serde_json::from_reader(BufReader::new(file))
            .map(Some)
            .map_err(|e| StorageError::Serialization(e.to_string()))
    }

    /// Save the session, creating the parent directory if needed.
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::SaveFailed(e.to_string()))?;
        }

        let file = File::create(&self.path).map_err(|e| StorageError::SaveFailed(e.to_string()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, session)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        writer
            .flush()
            .map_err(|e| StorageError::SaveFailed(e.to_string()))
    }

    /// Remove the session file. A missing file is not an error.
    pub fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::ClearFailed(e.to_string())),
        }
    }
}
