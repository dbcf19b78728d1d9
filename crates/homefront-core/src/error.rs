//! Error types for homefront-core
//!
//! The header itself never fails: missing labels fall back to literals and bad
//! viewport readings are ignored. These errors cover the edges around it
//! (configuration files, dictionaries, locale codes).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for homefront operations
#[derive(Error, Debug)]
pub enum SiteError {
    // ===================
    // Config Errors
    // ===================
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        message: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid breakpoint: {value}px (must be greater than zero)")]
    InvalidBreakpoint { value: u32 },

    // ===================
    // Locale Errors
    // ===================
    #[error("Unknown locale code: {code}")]
    UnknownLocale { code: String },

    #[error("Failed to parse dictionary for locale {code}")]
    DictionaryParse {
        code: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SiteError {
    /// Whether the caller can carry on with defaults
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SiteError::ConfigRead { .. } | SiteError::UnknownLocale { .. }
        )
    }
}

/// Failure reported by the session collaborator
///
/// The header never surfaces these to the user; local UI state has already
/// been reset by the time a logout result is known.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Logout request failed: {message}")]
    LogoutFailed { message: String },

    #[error("No active session")]
    NotAuthenticated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        let err = SiteError::UnknownLocale {
            code: "xx".to_string(),
        };
        assert!(err.is_recoverable());

        let err = SiteError::InvalidBreakpoint { value: 0 };
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_error_messages() {
        let err = SiteError::InvalidBreakpoint { value: 0 };
        assert_eq!(
            err.to_string(),
            "Invalid breakpoint: 0px (must be greater than zero)"
        );

        let err = SessionError::LogoutFailed {
            message: "network down".to_string(),
        };
        assert_eq!(err.to_string(), "Logout request failed: network down");
    }
}
