//! Unified error type for the booking client.

use std::fmt;

use super::auth::AuthError;
use super::category::ErrorCategory;
use super::network::NetworkError;
use super::system::SystemError;
use crate::form::ValidationErrors;
use crate::navigation::NavigationError;
use crate::traits::StorageError;

/// Unified error type for the booking client.
///
/// Screens branch on exactly one thing: whether the error is a
/// [`BookingError::Validation`] (shown inline next to fields) or anything
/// else (logged and replaced with a static alert).
#[derive(Debug)]
pub enum BookingError {
    /// Transport and HTTP status errors.
    Network(NetworkError),

    /// Sign-in rejection and session persistence errors.
    Auth(AuthError),

    /// Form values rejected by their schema.
    Validation(ValidationErrors),

    /// Invalid navigation requests.
    Navigation(NavigationError),

    /// Filesystem/environment errors.
    System(SystemError),
}

impl BookingError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            BookingError::Network(NetworkError::HttpStatus { .. }) => ErrorCategory::Server,
            BookingError::Network(NetworkError::InvalidUrl { .. }) => ErrorCategory::Configuration,
            BookingError::Network(_) => ErrorCategory::Network,
            BookingError::Auth(_) => ErrorCategory::Auth,
            BookingError::Validation(_) => ErrorCategory::Validation,
            BookingError::Navigation(_) => ErrorCategory::Client,
            BookingError::System(SystemError::EnvironmentError { .. }) => {
                ErrorCategory::Configuration
            }
            BookingError::System(_) => ErrorCategory::System,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            BookingError::Network(err) => err.user_message(),
            BookingError::Auth(err) => err.user_message(),
            BookingError::Validation(errors) => errors.summary(),
            BookingError::Navigation(err) => err.to_string(),
            BookingError::System(err) => err.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            BookingError::Network(err) => err.error_code(),
            BookingError::Auth(err) => err.error_code(),
            BookingError::Validation(_) => "E_VALIDATION",
            BookingError::Navigation(_) => "E_NAVIGATION",
            BookingError::System(err) => err.error_code(),
        }
    }

    /// Field errors, if this is a validation failure.
    pub fn validation(&self) -> Option<&ValidationErrors> {
        match self {
            BookingError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl fmt::Display for BookingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingError::Network(err) => write!(f, "{}", err),
            BookingError::Auth(err) => write!(f, "{}", err),
            BookingError::Validation(errors) => write!(f, "Validation failed: {}", errors.summary()),
            BookingError::Navigation(err) => write!(f, "{}", err),
            BookingError::System(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for BookingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BookingError::Network(err) => Some(err),
            BookingError::Auth(err) => Some(err),
            BookingError::Validation(_) => None,
            BookingError::Navigation(err) => Some(err),
            BookingError::System(err) => Some(err),
        }
    }
}

impl From<NetworkError> for BookingError {
    fn from(err: NetworkError) -> Self {
        BookingError::Network(err)
    }
}

impl From<AuthError> for BookingError {
    fn from(err: AuthError) -> Self {
        BookingError::Auth(err)
    }
}

impl From<ValidationErrors> for BookingError {
    fn from(errors: ValidationErrors) -> Self {
        BookingError::Validation(errors)
    }
}

impl From<NavigationError> for BookingError {
    fn from(err: NavigationError) -> Self {
        BookingError::Navigation(err)
    }
}

impl From<SystemError> for BookingError {
    fn from(err: SystemError) -> Self {
        BookingError::System(err)
    }
}

impl From<StorageError> for BookingError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::LoadFailed(message) | StorageError::Serialization(message) => {
                BookingError::Auth(AuthError::SessionLoadFailed { message })
            }
            StorageError::SaveFailed(message) | StorageError::ClearFailed(message) => {
                BookingError::Auth(AuthError::SessionSaveFailed { message })
            }
        }
    }
}

impl From<std::io::Error> for BookingError {
    fn from(err: std::io::Error) -> Self {
        BookingError::System(super::system::classify_io_error(err, None, "I/O operation"))
    }
}

impl From<serde_json::Error> for BookingError {
    fn from(err: serde_json::Error) -> Self {
        BookingError::Network(NetworkError::InvalidResponse {
            message: err.to_string(),
        })
    }
}
