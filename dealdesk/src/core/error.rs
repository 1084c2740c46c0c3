//! # Common Error Types
//!
//! Error handling for the dashboard client.
//!
//! Two layers:
//!
//! - [`ApiError`]: the only error that crosses the API boundary. It carries the
//!   HTTP status and a human-readable message. Status `0` is the sentinel for
//!   "the server could not be reached" (or returned something unreadable).
//! - [`AppError`]: application-level errors for everything around the API:
//!   form validation, configuration, local file I/O.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use dealdesk::core::error::{ApiError, ApiErrorKind};
//!
//! let err = ApiError::network();
//! assert_eq!(err.status, 0);
//! assert_eq!(err.kind(), ApiErrorKind::NetworkUnavailable);
//!
//! let err = ApiError::new(401, "Invalid credentials");
//! assert_eq!(err.kind(), ApiErrorKind::ServerRejected);
//! assert_eq!(err.to_string(), "Invalid credentials");
//! ```

use thiserror::Error;

/// Message carried by every status-0 [`ApiError`].
pub const NETWORK_ERROR_MESSAGE: &str = "Network error or server unavailable";

/// Error raised by every failed API call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    /// HTTP status of the rejected response, or `0` when no response was read.
    pub status: u16,
    /// Message from the server's error body, or one synthesized from the status.
    pub message: String,
}

/// Which side of the wire an [`ApiError`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The server answered with a non-2xx status.
    ServerRejected,
    /// The call never reached the server or never produced a readable answer.
    NetworkUnavailable,
}

impl ApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// The status-0 network error.
    pub fn network() -> Self {
        Self::new(0, NETWORK_ERROR_MESSAGE)
    }

    pub fn kind(&self) -> ApiErrorKind {
        if self.status == 0 {
            ApiErrorKind::NetworkUnavailable
        } else {
            ApiErrorKind::ServerRejected
        }
    }

    pub fn is_network(&self) -> bool {
        self.kind() == ApiErrorKind::NetworkUnavailable
    }
}

/// Application-wide error type.
///
/// # Error Variants
///
/// - **Api**: a failed API call, passed through unchanged
/// - **Validation**: user input rejected before any network call
/// - **Config**: missing or invalid configuration at startup
/// - **Io**: local file access (downloads, uploads, session file)
///
/// # Example
///
/// ```rust
/// use dealdesk::core::error::AppError;
///
/// let err = AppError::Validation("Please fill in all required fields".to_string());
/// assert_eq!(err.to_string(), "Validation error: Please fill in all required fields");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
