//! Application error types

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ─────────────────────────────────────────────────────────────
    // Completion Service Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Completion request error: {message}")]
    Completion { message: String },

    #[error("Completion service returned HTTP {status}")]
    UpstreamStatus { status: u16 },

    // ─────────────────────────────────────────────────────────────
    // Server Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Server error: {message}")]
    Server { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn completion(message: impl Into<String>) -> Self {
        Self::Completion {
            message: message.into(),
        }
    }

    pub fn upstream_status(status: u16) -> Self {
        Self::UpstreamStatus { status }
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    /// Check if this error originated on the completion-service side
    /// (as opposed to local configuration or I/O).
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Error::Completion { .. } | Error::UpstreamStatus { .. }
        )
    }
}
