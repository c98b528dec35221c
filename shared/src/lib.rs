//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the contact form script and the
//! endpoint it submits to.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::contact`]**: The submitted form entries and the field names
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::contact::{FormEntries, NAME_FIELD};
//!
//! let mut entries = FormEntries::new();
//! entries.push(NAME_FIELD, "Andrew");
//! entries.push("_subject", "New message");
//! assert_eq!(entries.get("name"), Some("Andrew"));
//! ```

pub mod dto;

// Re-export commonly used types for convenience
pub use dto::*;
