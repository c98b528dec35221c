//! # Data Transfer Objects (DTOs)
//!
//! Structures exchanged between the contact form script and the form endpoint.
//!
//! ## Module Organization
//!
//! - [`contact`] - Submitted form entries and the validated field names
//!
//! ## Wire Format
//!
//! The endpoint receives the form as `multipart/form-data` (or a query string
//! for `GET` forms), one part per field, named after the input's `name`
//! attribute:
//!
//! ```text
//! POST /f/contact
//! Accept: application/json
//! Content-Type: multipart/form-data; boundary=...
//!
//! name=Andrew
//! email=test@test.com
//! message=This is a valid message!
//! _subject=New message
//! ```
//!
//! Every named control of the form is sent, not only the validated ones. The
//! response body is never parsed; only the status code matters.
//! [`contact::FormEntries`] also derives `serde` so the same record can be
//! logged or sent as JSON.

pub mod contact;

pub use contact::*;
