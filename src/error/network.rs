//! Network-related error types.

use std::fmt;

use crate::traits::HttpError;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// Connection to the server failed.
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    Timeout { url: String },

    /// HTTP status error (non-2xx response).
    HttpStatus { status: u16, message: String },

    /// Response body did not match the expected shape.
    InvalidResponse { message: String },

    /// URL could not be built or parsed.
    InvalidUrl { url: String },

    /// Generic network error.
    Other { message: String },
}

impl NetworkError {
    /// Map a transport error of the HTTP seam, keeping the URL for logs.
    pub fn from_http(err: HttpError, url: &str) -> Self {
        match err {
            HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed {
                url: url.to_string(),
                message,
            },
            HttpError::Timeout(_) => NetworkError::Timeout {
                url: url.to_string(),
            },
            HttpError::ServerError { status, message } => {
                NetworkError::HttpStatus { status, message }
            }
            HttpError::InvalidUrl(_) => NetworkError::InvalidUrl {
                url: url.to_string(),
            },
            HttpError::Io(message) | HttpError::Other(message) => NetworkError::Other { message },
        }
    }

    /// True for statuses the server uses to reject a request from the client.
    pub fn is_client_status(&self) -> bool {
        matches!(self, NetworkError::HttpStatus { status, .. } if (400..500).contains(status))
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Unable to connect to the server. Please check your internet connection.".to_string()
            }
            NetworkError::Timeout { .. } => {
                "The server took too long to answer. Please try again.".to_string()
            }
            NetworkError::HttpStatus { status, .. } => match *status {
                400 => "The request was invalid. Please try again.".to_string(),
                401 => "Authentication required. Please sign in again.".to_string(),
                403 => "Access denied. You don't have permission for this action.".to_string(),
                404 => "The requested resource was not found.".to_string(),
                500..=599 => "The server is experiencing issues. Please try again later.".to_string(),
                _ => format!("The server returned an error (HTTP {}). Please try again.", status),
            },
            NetworkError::InvalidResponse { .. } => {
                "Received an invalid response from the server. Please try again.".to_string()
            }
            NetworkError::InvalidUrl { url } => format!("Invalid server address '{}'.", url),
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::InvalidResponse { .. } => "E_NET_INVALID",
            NetworkError::InvalidUrl { .. } => "E_NET_URL",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::Timeout { url } => write!(f, "Request to '{}' timed out", url),
            NetworkError::HttpStatus { status, message } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            NetworkError::InvalidResponse { message } => {
                write!(f, "Invalid response: {}", message)
            }
            NetworkError::InvalidUrl { url } => write!(f, "Invalid URL: {}", url),
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_http_keeps_url() {
        let err = NetworkError::from_http(
            HttpError::ConnectionFailed("refused".to_string()),
            "http://localhost:3333/providers",
        );
        assert_eq!(
            err,
            NetworkError::ConnectionFailed {
                url: "http://localhost:3333/providers".to_string(),
                message: "refused".to_string(),
            }
        );
    }

    #[test]
    fn test_from_http_server_error_becomes_status() {
        let err = NetworkError::from_http(
            HttpError::ServerError {
                status: 502,
                message: "bad gateway".to_string(),
            },
            "http://x",
        );
        assert!(matches!(err, NetworkError::HttpStatus { status: 502, .. }));
        assert!(!err.is_client_status());
    }

    #[test]
    fn test_client_status() {
        let err = NetworkError::HttpStatus {
            status: 401,
            message: "Incorrect email/password combination.".to_string(),
        };
        assert!(err.is_client_status());
        assert_eq!(err.user_message(), "Authentication required. Please sign in again.");
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            NetworkError::ConnectionFailed {
                url: String::new(),
                message: String::new(),
            },
            NetworkError::Timeout { url: String::new() },
            NetworkError::HttpStatus {
                status: 500,
                message: String::new(),
            },
            NetworkError::InvalidResponse {
                message: String::new(),
            },
            NetworkError::InvalidUrl { url: String::new() },
            NetworkError::Other {
                message: String::new(),
            },
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.error_code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }
}
