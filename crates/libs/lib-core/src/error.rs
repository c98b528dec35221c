//! # Centralized Error Handling
//!
//! This module defines [`AppError`], the error type shared by the contact form
//! core and the browser binding. It follows the `thiserror` pattern.
//!
//! ## Error Categories
//!
//! 1. **Startup Errors** - the page does not match the expected markup
//!    - [`ElementNotFound`](AppError::ElementNotFound)
//!    - [`Dom`](AppError::Dom)
//!    - [`Config`](AppError::Config)
//!
//! 2. **Submission Errors** - the endpoint could not accept the form
//!    - [`Status`](AppError::Status) → any non-2xx response
//!    - [`Transport`](AppError::Transport) → the request never completed
//!
//! Field validation failures are not errors. They surface only as inline
//! indicators (see [`crate::form`]).
//!
//! ## User Messages
//!
//! Both submission errors collapse into the one configured alert text; no
//! detail is shown to the visitor:
//!
//! ```rust
//! use lib_core::error::{AppError, DEFAULT_FAILURE_MESSAGE};
//!
//! assert_eq!(
//!     AppError::Status(500).user_message(DEFAULT_FAILURE_MESSAGE),
//!     DEFAULT_FAILURE_MESSAGE,
//! );
//! assert_eq!(
//!     AppError::Transport("offline".to_string()).user_message("Could not send."),
//!     "Could not send.",
//! );
//! ```

use thiserror::Error;

/// Alert text shown when a submission fails for any reason.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Oops! There was a problem submitting your form.";

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid or unparsable configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required element is missing from the page.
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// A DOM call failed or an element had an unexpected type.
    #[error("DOM error: {0}")]
    Dom(String),

    /// The request failed before a response arrived (network, CORS, abort).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status.
    #[error("Submission failed with HTTP status {0}")]
    Status(u16),
}

impl AppError {
    /// Whether this error came from submitting the form.
    pub fn is_submission(&self) -> bool {
        matches!(self, AppError::Transport(_) | AppError::Status(_))
    }

    /// Get a user-facing message.
    ///
    /// Submission errors all read as `failure_message`; startup errors keep
    /// their detail since they are only ever logged.
    pub fn user_message(&self, failure_message: &str) -> String {
        if self.is_submission() {
            failure_message.to_string()
        } else {
            self.to_string()
        }
    }
}

/// Convert `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(format!("JSON error: {}", err))
    }
}
