//! Authentication and session error types.

use std::fmt;

/// Session-specific error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The server rejected the email/password pair.
    InvalidCredentials { message: String },

    /// An operation needed a signed-in user and there is none.
    NotAuthenticated,

    /// The session could not be read from durable storage.
    SessionLoadFailed { message: String },

    /// The session could not be written to durable storage.
    SessionSaveFailed { message: String },
}

impl AuthError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::InvalidCredentials { .. } => {
                "Incorrect email or password.".to_string()
            }
            AuthError::NotAuthenticated => "You need to sign in first.".to_string(),
            AuthError::SessionLoadFailed { .. } => {
                "Your previous session could not be restored. Please sign in again.".to_string()
            }
            AuthError::SessionSaveFailed { .. } => {
                "Your session could not be saved on this device.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials { .. } => "E_AUTH_CREDENTIALS",
            AuthError::NotAuthenticated => "E_AUTH_NONE",
            AuthError::SessionLoadFailed { .. } => "E_AUTH_LOAD",
            AuthError::SessionSaveFailed { .. } => "E_AUTH_SAVE",
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials { message } => {
                write!(f, "Invalid credentials: {}", message)
            }
            AuthError::NotAuthenticated => write!(f, "Not authenticated"),
            AuthError::SessionLoadFailed { message } => {
                write!(f, "Failed to load session: {}", message)
            }
            AuthError::SessionSaveFailed { message } => {
                write!(f, "Failed to save session: {}", message)
            }
        }
    }
}

impl std::error::Error for AuthError {}
