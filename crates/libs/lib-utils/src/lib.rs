//! # Utilities Library
//!
//! String validation helpers shared by the contact form rules.

pub mod validation;

// Re-export commonly used functions
pub use validation::{
    is_js_whitespace, is_name_char, trim_js, trimmed_len, truncate_utf16, utf16_len,
    validate_email, validate_length, validate_name_chars, validate_not_empty,
};
