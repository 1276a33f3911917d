//! Client configuration.
//!
//! Use the builder methods to customize, or [`ClientConfig::from_env`] to
//! read the `GOBARBER_*` environment variables.
//!
//! ```ignore
//! use gobarber::config::ClientConfig;
//!
//! let config = ClientConfig::default()
//!     .with_api_url("https://api.gobarber.example")
//!     .with_request_timeout(Duration::from_secs(10));
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::api::DEFAULT_API_URL;
use crate::auth::default_session_path;
use crate::error::SystemError;

/// Base URL of the booking API.
pub const ENV_API_URL: &str = "GOBARBER_API_URL";

/// Path of the session file.
pub const ENV_SESSION_FILE: &str = "GOBARBER_SESSION_FILE";

/// Client-side request timeout in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "GOBARBER_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every endpoint is resolved against
    pub api_url: String,
    /// Session file override (default: `~/.gobarber/session.json`)
    pub session_path: Option<PathBuf>,
    /// Request timeout; `None` waits as long as the transport does
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            session_path: None,
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_session_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_path = Some(path.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Read configuration from the environment. Unset or empty variables
    /// keep their defaults.
    pub fn from_env() -> Result<Self, SystemError> {
        let mut config = Self::default();

        if let Some(url) = env_value(ENV_API_URL) {
            config = config.with_api_url(url);
        }
        if let Some(path) = env_value(ENV_SESSION_FILE) {
            config = config.with_session_path(path);
        }
        if let Some(secs) = env_value(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs.parse().map_err(|e| SystemError::EnvironmentError {
                variable: ENV_TIMEOUT_SECS.to_string(),
                message: format!("expected whole seconds, got {:?}: {}", secs, e),
            })?;
            config = config.with_request_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// The session file location, falling back to the home directory.
    pub fn resolve_session_path(&self) -> Result<PathBuf, SystemError> {
        match &self.session_path {
            Some(path) => Ok(path.clone()),
            None => default_session_path().ok_or(SystemError::NoHomeDirectory),
        }
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
