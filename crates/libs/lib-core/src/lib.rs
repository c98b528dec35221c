//! # Core Library
//!
//! Contact form validation, submission and confirmation toast, independent of
//! the browser.
//!
//! - [`model`] - field definitions and validation rules
//! - [`form`] - [`FormValidator`] and the seams it talks to the page through
//! - [`toast`] - the confirmation toast timeline
//! - [`config`] - [`ContactConfig`]
//! - [`error`] - [`AppError`]
//! - `testing` - in-memory stand-ins for the seams (`testing` feature)
//!
//! ## Example
//!
//! ```rust
//! use lib_core::{ContactConfig, FieldKind, FieldSpec};
//!
//! let config = ContactConfig::default();
//! let email = FieldSpec::from_config(FieldKind::Email, &config);
//!
//! assert!(email.validate("test@test.com"));
//! assert!(!email.validate("invalidemail"));
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod model;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod toast;

// Re-export commonly used types
pub use config::ContactConfig;
pub use error::{AppError, Result};
pub use form::{FormValidator, SubmitPhase};
pub use model::{FieldKind, FieldSpec};
