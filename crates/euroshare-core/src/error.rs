//! Error types for the euroshare.eu client
//!
//! Transport failures of every kind collapse into [`EuroshareError::Network`];
//! the remaining variants cover page structure, session storage and setup.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all euroshare.eu client operations
///
/// Implements Display for human-readable messages and Serialize
/// so adapters can emit errors as plain JSON strings.
#[derive(Error, Debug)]
pub enum EuroshareError {
    /// Connection, DNS, timeout, non-2xx status or body read failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failed to parse HTML content
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),

    /// Expected HTML element was not found
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Persisting the login session failed
    #[error("Session storage failed: {0}")]
    Session(String),

    /// Client could not be configured
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl EuroshareError {
    /// True for transport-level failures, the only kind a host is expected to surface
    pub fn is_network(&self) -> bool {
        matches!(self, EuroshareError::Network(_))
    }
}

impl Serialize for EuroshareError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for euroshare.eu operations
pub type Result<T> = std::result::Result<T, EuroshareError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_parse_error() {
        let error = EuroshareError::ParseError("missing element".to_string());
        assert_eq!(error.to_string(), "Failed to parse HTML: missing element");
    }

    #[test]
    fn test_error_display_element_not_found() {
        let error = EuroshareError::ElementNotFound("video source".to_string());
        assert_eq!(error.to_string(), "Element not found: video source");
    }

    #[test]
    fn test_error_display_session() {
        let error = EuroshareError::Session("permission denied".to_string());
        assert_eq!(error.to_string(), "Session storage failed: permission denied");
    }

    #[test]
    fn test_error_display_invalid_config() {
        let error = EuroshareError::InvalidConfig("bad base url".to_string());
        assert_eq!(error.to_string(), "Invalid configuration: bad base url");
    }

    #[test]
    fn test_non_transport_errors_are_not_network() {
        assert!(!EuroshareError::ElementNotFound("x".to_string()).is_network());
        assert!(!EuroshareError::Session("x".to_string()).is_network());
    }

    #[test]
    fn test_error_serialize_with_message() {
        let error = EuroshareError::ElementNotFound("stream link".to_string());
        let json = serde_json::to_string(&error).expect("Serialization should succeed");
        assert_eq!(json, "\"Element not found: stream link\"");
    }
}
