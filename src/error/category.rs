//! Error category classification for unified error handling.

use std::fmt;

/// High-level categorization of errors.
///
/// The client never retries on its own; categories only drive how a failure
/// is presented (inline field errors vs. a blocking alert) and how it is
/// logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection, DNS, timeout.
    Network,

    /// Sign-in rejected or no session present.
    Auth,

    /// Backend returned a non-2xx status other than an auth rejection.
    Server,

    /// Form values failed their validation schema.
    Validation,

    /// Programming errors (bad route payloads, wrong stack).
    Client,

    /// Filesystem and environment errors.
    System,

    /// Missing or invalid configuration.
    Configuration,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Server => "server",
            ErrorCategory::Validation => "validation",
            ErrorCategory::Client => "client",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Validation failures are rendered next to their fields; everything
    /// else ends up in a modal alert.
    pub fn is_inline(&self) -> bool {
        matches!(self, ErrorCategory::Validation)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
