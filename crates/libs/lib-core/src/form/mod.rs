//! # Contact Form Controller
//!
//! [`FormValidator`] wires field validation, error indicators and submission
//! to whatever page it is given. The page is reached only through injected
//! handles:
//!
//! - [`FieldHandle`] - one input plus its error display
//! - [`FormHandle`] - the `<form>` element (action, method, entries, reset)
//! - [`Transport`] - sends the [`SubmitRequest`]
//! - [`Feedback`] - confirmation toast and failure alert
//!
//! The browser crate implements these over the DOM; the `testing` module
//! (behind the `testing` feature) has in-memory versions.

pub mod controller;
pub mod handle;
pub mod submit;

pub use controller::{FieldBinding, FormValidator};
pub use handle::{FieldHandle, FormHandle};
pub use submit::{
    Feedback, SubmissionOutcome, SubmitMethod, SubmitPhase, SubmitRequest, Transport, ACCEPT_JSON,
};
