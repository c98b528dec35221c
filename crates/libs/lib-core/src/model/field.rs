//! # Field Definitions
//!
//! The three contact form fields as named configuration records
//! ([`FieldSpec`]) paired with pure validation functions that take every
//! limit as an explicit parameter.
//!
//! | Field   | Rule (on the trimmed value)                         | Max length |
//! |---------|-----------------------------------------------------|------------|
//! | name    | 2..=max chars, letters / `'` / `-` / whitespace only | 20         |
//! | email   | `local@domain.tld`, no whitespace                    | none       |
//! | message | 10..=max chars                                       | 500        |

use lib_utils::{truncate_utf16, validate_email, validate_length, validate_name_chars};
use shared::dto::contact::{EMAIL_FIELD, MESSAGE_FIELD, NAME_FIELD};

use crate::config::ContactConfig;

/// Minimum trimmed name length, in UTF-16 units.
pub const NAME_MIN_LEN: usize = 2;

/// Minimum trimmed message length, in UTF-16 units.
pub const MESSAGE_MIN_LEN: usize = 10;

/// One of the contact form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Email,
    Message,
}

impl FieldKind {
    /// All fields, in form order.
    pub const ALL: [FieldKind; 3] = [FieldKind::Name, FieldKind::Email, FieldKind::Message];

    /// Id (and `name` attribute) of the field's input element.
    pub fn input_id(self) -> &'static str {
        match self {
            FieldKind::Name => NAME_FIELD,
            FieldKind::Email => EMAIL_FIELD,
            FieldKind::Message => MESSAGE_FIELD,
        }
    }

    /// Id of the element displaying the field's error message.
    pub fn error_id(self) -> &'static str {
        match self {
            FieldKind::Name => "name-error",
            FieldKind::Email => "email-error",
            FieldKind::Message => "message-error",
        }
    }

    /// Human-readable name used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Name => "Name",
            FieldKind::Email => "Email",
            FieldKind::Message => "Message",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            FieldKind::Name => 0,
            FieldKind::Email => 1,
            FieldKind::Message => 2,
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.input_id())
    }
}

/// Validation settings for one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub kind: FieldKind,
    /// Input longer than this (in UTF-16 units) is truncated as the user types.
    pub max_length: Option<usize>,
}

impl FieldSpec {
    pub fn name(max_length: usize) -> Self {
        Self {
            kind: FieldKind::Name,
            max_length: Some(max_length),
        }
    }

    pub fn email() -> Self {
        Self {
            kind: FieldKind::Email,
            max_length: None,
        }
    }

    pub fn message(max_length: usize) -> Self {
        Self {
            kind: FieldKind::Message,
            max_length: Some(max_length),
        }
    }

    /// Spec for `kind` using the limits from `config`.
    pub fn from_config(kind: FieldKind, config: &ContactConfig) -> Self {
        match kind {
            FieldKind::Name => Self::name(config.name_max_len),
            FieldKind::Email => Self::email(),
            FieldKind::Message => Self::message(config.message_max_len),
        }
    }

    /// Check `value`, returning the reason it is rejected.
    pub fn check(&self, value: &str) -> Result<(), String> {
        match self.kind {
            FieldKind::Name => validate_name(value, self.max_length.unwrap_or(usize::MAX)),
            FieldKind::Email => validate_email(value),
            FieldKind::Message => validate_message(value, self.max_length.unwrap_or(usize::MAX)),
        }
    }

    /// Whether `value` satisfies this field's rule.
    pub fn validate(&self, value: &str) -> bool {
        self.check(value).is_ok()
    }

    /// `value` cut down to the max length, or `None` if it already fits.
    pub fn truncate(&self, value: &str) -> Option<String> {
        self.max_length.and_then(|max| truncate_utf16(value, max))
    }
}

/// Name rule: trimmed length in `NAME_MIN_LEN..=max_len`, name characters only.
pub fn validate_name(value: &str, max_len: usize) -> Result<(), String> {
    let label = FieldKind::Name.label();
    validate_length(value, NAME_MIN_LEN, max_len, label)?;
    validate_name_chars(value, label)
}

/// Message rule: trimmed length in `MESSAGE_MIN_LEN..=max_len`.
pub fn validate_message(value: &str, max_len: usize) -> Result<(), String> {
    validate_length(value, MESSAGE_MIN_LEN, max_len, FieldKind::Message.label())
}
