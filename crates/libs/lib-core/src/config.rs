//! # Contact Form Configuration
//!
//! Every setting has a default matching the stock contact page, so a page
//! needs no configuration at all. A page can override any subset through a
//! JSON `data-contact-config` attribute on its `<form>`:
//!
//! ```html
//! <form action="https://formspree.io/f/xyz" method="POST"
//!       data-contact-config='{"toast_dwell_ms": 5000}'>
//! ```
//!
//! ```rust
//! use lib_core::config::ContactConfig;
//!
//! let config = ContactConfig::from_json(r#"{"toast_dwell_ms": 5000}"#).unwrap();
//! assert_eq!(config.toast_dwell_ms, 5000);
//! assert_eq!(config.name_max_len, 20);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result, DEFAULT_FAILURE_MESSAGE};
use crate::model::field::{MESSAGE_MIN_LEN, NAME_MIN_LEN};
use crate::toast::ToastTimings;

/// Name of the form attribute holding a JSON [`ContactConfig`].
pub const CONFIG_ATTRIBUTE: &str = "data-contact-config";

/// Text of the confirmation toast.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Message sent successfully!";

/// Contact form configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Maximum name length in UTF-16 units; longer input is truncated while typing.
    pub name_max_len: usize,

    /// Maximum message length in UTF-16 units; longer input is truncated while typing.
    pub message_max_len: usize,

    /// Text shown in the confirmation toast.
    pub success_message: String,

    /// Text of the blocking alert shown when a submission fails.
    pub failure_message: String,

    /// How long the toast stays fully visible, in milliseconds.
    pub toast_dwell_ms: u32,

    /// Fade-out window before the toast is removed, in milliseconds.
    ///
    /// Should match the `transition` duration of the toast elements.
    pub toast_fade_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            name_max_len: 20,
            message_max_len: 500,
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
            toast_dwell_ms: 3000,
            toast_fade_ms: 300,
        }
    }
}

impl ContactConfig {
    /// Parse a JSON object; missing keys take their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the configuration from an optional attribute value.
    ///
    /// A missing attribute yields the defaults. An unparsable or invalid one is
    /// logged and also yields the defaults, so a typo never disables the form.
    pub fn from_attribute(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
            return Self::default();
        };

        match Self::from_json(raw) {
            Ok(config) => {
                tracing::debug!("Loaded contact form config: {:?}", config);
                config
            }
            Err(err) => {
                tracing::warn!("Ignoring {}: {}", CONFIG_ATTRIBUTE, err);
                Self::default()
            }
        }
    }

    /// Validate configuration values against the field rules.
    pub fn validate(&self) -> Result<()> {
        if self.name_max_len < NAME_MIN_LEN {
            return Err(AppError::Config(format!(
                "name_max_len must be at least {}",
                NAME_MIN_LEN
            )));
        }

        if self.message_max_len < MESSAGE_MIN_LEN {
            return Err(AppError::Config(format!(
                "message_max_len must be at least {}",
                MESSAGE_MIN_LEN
            )));
        }

        Ok(())
    }

    /// Toast durations derived from this config.
    pub fn toast_timings(&self) -> ToastTimings {
        ToastTimings {
            dwell_ms: self.toast_dwell_ms,
            fade_ms: self.toast_fade_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_page() {
        let config = ContactConfig::default();
        assert_eq!(config.name_max_len, 20);
        assert_eq!(config.message_max_len, 500);
        assert_eq!(config.success_message, "Message sent successfully!");
        assert_eq!(config.failure_message, "Oops! There was a problem submitting your form.");
        assert_eq!(config.toast_timings(), ToastTimings { dwell_ms: 3000, fade_ms: 300 });
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ContactConfig::from_json(r#"{"success_message": "Thanks!"}"#).unwrap();
        assert_eq!(config.success_message, "Thanks!");
        assert_eq!(config.message_max_len, 500);
    }

    #[test]
    fn test_rejects_max_below_min() {
        let err = ContactConfig::from_json(r#"{"message_max_len": 5}"#).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(ContactConfig::from_json(r#"{"name_max_len": 1}"#).is_err());
    }

    #[test]
    fn test_from_attribute_falls_back_to_defaults() {
        assert_eq!(ContactConfig::from_attribute(None), ContactConfig::default());
        assert_eq!(ContactConfig::from_attribute(Some("  ")), ContactConfig::default());
        assert_eq!(ContactConfig::from_attribute(Some("{not json")), ContactConfig::default());
        assert_eq!(
            ContactConfig::from_attribute(Some(r#"{"name_max_len": 0}"#)),
            ContactConfig::default()
        );
        assert_eq!(
            ContactConfig::from_attribute(Some(r#"{"toast_fade_ms": 500}"#)).toast_fade_ms,
            500
        );
    }
}
