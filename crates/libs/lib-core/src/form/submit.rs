//! Submission request, transport seam and the per-submission state machine.
//!
//! ```text
//! Idle -> Validating -> Rejected                  (errors shown, no request)
//!                    -> Submitting -> Succeeded   (toast, form reset)
//!                                  -> Failed      (alert, values kept)
//! ```
//!
//! Every terminal phase returns the form to `Idle`. There is no retry; after a
//! failure the visitor submits again by hand.

use async_trait::async_trait;
use shared::dto::contact::FormEntries;

use crate::error::{AppError, Result};

/// `Accept` header sent with every submission.
pub const ACCEPT_JSON: &str = "application/json";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Validating,
    Rejected,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitMethod {
    Get,
    Post,
}

impl SubmitMethod {
    /// Interpret a form's `method`. Anything but `get` posts.
    pub fn parse(method: &str) -> Self {
        if method.trim().eq_ignore_ascii_case("get") {
            SubmitMethod::Get
        } else {
            SubmitMethod::Post
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SubmitMethod::Get => "GET",
            SubmitMethod::Post => "POST",
        }
    }
}

/// Everything a [`Transport`] needs to send the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitRequest {
    pub action: String,
    pub method: SubmitMethod,
    pub accept: &'static str,
    /// Every named control of the form, in document order.
    pub fields: FormEntries,
}

/// Sends a submission and reports the HTTP status code.
///
/// Returns `Err` only when no response arrived at all.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: &SubmitRequest) -> Result<u16>;
}

/// Visitor-facing reaction to a finished submission.
pub trait Feedback {
    /// Start the confirmation toast. Must not block.
    fn success(&self, message: &str);

    /// Show a blocking alert.
    fn alert(&self, message: &str);
}

#[derive(Debug)]
pub enum SubmissionOutcome {
    Success,
    Failure(AppError),
}

impl SubmissionOutcome {
    /// Classify a transport result: any 2xx status is a success.
    pub fn from_response(response: Result<u16>) -> Self {
        match response {
            Ok(status) if (200..300).contains(&status) => SubmissionOutcome::Success,
            Ok(status) => SubmissionOutcome::Failure(AppError::Status(status)),
            Err(err) => SubmissionOutcome::Failure(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parse() {
        assert_eq!(SubmitMethod::parse("post"), SubmitMethod::Post);
        assert_eq!(SubmitMethod::parse("POST"), SubmitMethod::Post);
        assert_eq!(SubmitMethod::parse("get"), SubmitMethod::Get);
        assert_eq!(SubmitMethod::parse(" GET "), SubmitMethod::Get);
        assert_eq!(SubmitMethod::parse("dialog"), SubmitMethod::Post);
        assert_eq!(SubmitMethod::Get.as_str(), "GET");
    }

    #[test]
    fn test_outcome_from_status() {
        for status in [200, 204, 299] {
            assert!(matches!(
                SubmissionOutcome::from_response(Ok(status)),
                SubmissionOutcome::Success
            ));
        }

        assert!(matches!(
            SubmissionOutcome::from_response(Ok(302)),
            SubmissionOutcome::Failure(AppError::Status(302))
        ));
        assert!(matches!(
            SubmissionOutcome::from_response(Ok(422)),
            SubmissionOutcome::Failure(AppError::Status(422))
        ));
        assert!(matches!(
            SubmissionOutcome::from_response(Err(AppError::Transport("offline".into()))),
            SubmissionOutcome::Failure(AppError::Transport(_))
        ));
    }
}
