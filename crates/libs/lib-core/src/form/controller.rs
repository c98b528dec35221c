use std::cell::Cell;

use super::handle::{FieldHandle, FormHandle};
use super::submit::{
    Feedback, SubmissionOutcome, SubmitMethod, SubmitPhase, SubmitRequest, Transport, ACCEPT_JSON,
};
use crate::config::ContactConfig;
use crate::error::{AppError, Result};
use crate::model::field::{FieldKind, FieldSpec};

/// A field's rule paired with the page elements it checks.
pub struct FieldBinding<F> {
    pub spec: FieldSpec,
    pub handle: F,
}

/// Validates the contact form and submits it.
///
/// Each field's error indicator is visible exactly when its last computed
/// result was invalid. Results are never cached; every trigger re-reads the
/// input.
pub struct FormValidator<F, H> {
    fields: [FieldBinding<F>; 3],
    form: H,
    config: ContactConfig,
    phase: Cell<SubmitPhase>,
}

impl<F, H> FormValidator<F, H>
where
    F: FieldHandle,
    H: FormHandle,
{
    pub fn new(name: F, email: F, message: F, form: H, config: ContactConfig) -> Self {
        let bind = |kind: FieldKind, handle: F| FieldBinding {
            spec: FieldSpec::from_config(kind, &config),
            handle,
        };
        let fields = [
            bind(FieldKind::Name, name),
            bind(FieldKind::Email, email),
            bind(FieldKind::Message, message),
        ];

        Self {
            fields,
            form,
            config,
            phase: Cell::new(SubmitPhase::Idle),
        }
    }

    pub fn config(&self) -> &ContactConfig {
        &self.config
    }

    /// Current submission phase; `Submitting` while a request is in flight.
    pub fn phase(&self) -> SubmitPhase {
        self.phase.get()
    }

    pub fn form(&self) -> &H {
        &self.form
    }

    pub fn field(&self, kind: FieldKind) -> &FieldBinding<F> {
        &self.fields[kind.index()]
    }

    /// Pure check of `value` against `kind`'s rule.
    pub fn validate(&self, kind: FieldKind, value: &str) -> bool {
        self.field(kind).spec.validate(value)
    }

    /// Truncate the input in place if it exceeds the field's max length.
    ///
    /// Returns whether the value was cut.
    pub fn enforce_max_length(&self, kind: FieldKind) -> bool {
        let field = self.field(kind);
        match field.spec.truncate(&field.handle.value()) {
            Some(truncated) => {
                field.handle.set_value(&truncated);
                true
            }
            None => false,
        }
    }

    pub fn show_error(&self, kind: FieldKind) {
        let handle = &self.field(kind).handle;
        handle.set_aria_invalid(true);
        handle.set_error_visible(true);
    }

    pub fn hide_error(&self, kind: FieldKind) {
        let handle = &self.field(kind).handle;
        handle.set_aria_invalid(false);
        handle.set_error_visible(false);
    }

    /// Validate the field's current value and update its indicator.
    pub fn validate_field(&self, kind: FieldKind) -> bool {
        let field = self.field(kind);
        match field.spec.check(&field.handle.value()) {
            Ok(()) => {
                self.hide_error(kind);
                true
            }
            Err(reason) => {
                tracing::debug!("Field {} invalid: {}", kind, reason);
                self.show_error(kind);
                false
            }
        }
    }

    /// Keystroke handler: enforce the max length, then clear the error once the
    /// value becomes valid. Never shows an error while the visitor types.
    pub fn on_input(&self, kind: FieldKind) {
        self.enforce_max_length(kind);
        let field = self.field(kind);
        if field.spec.validate(&field.handle.value()) {
            self.hide_error(kind);
        }
    }

    /// Focus-loss handler.
    pub fn on_blur(&self, kind: FieldKind) -> bool {
        self.validate_field(kind)
    }

    /// Validate every field, updating all indicators even after a failure.
    pub fn validate_all(&self) -> bool {
        FieldKind::ALL
            .iter()
            .fold(true, |valid, kind| self.validate_field(*kind) && valid)
    }

    pub fn build_request(&self) -> Result<SubmitRequest> {
        Ok(SubmitRequest {
            action: self.form.action(),
            method: SubmitMethod::parse(&self.form.method()),
            accept: ACCEPT_JSON,
            fields: self.form.entries()?,
        })
    }

    /// Empty every field and reset the form.
    pub fn reset(&self) {
        self.form.reset();
        for field in &self.fields {
            field.handle.set_value("");
        }
    }

    /// Submit handler. The caller has already cancelled the browser's own
    /// submission.
    ///
    /// Returns the terminal phase of this attempt: `Rejected`, `Succeeded` or
    /// `Failed`. A submit arriving while a request is in flight is ignored and
    /// returns `Submitting`.
    pub async fn on_submit<T, B>(&self, transport: &T, feedback: &B) -> SubmitPhase
    where
        T: Transport + ?Sized,
        B: Feedback + ?Sized,
    {
        if self.phase.get() == SubmitPhase::Submitting {
            tracing::debug!("Submission already in flight, ignoring submit");
            return SubmitPhase::Submitting;
        }

        self.phase.set(SubmitPhase::Validating);
        if !self.validate_all() {
            tracing::debug!("Contact form rejected by validation");
            self.phase.set(SubmitPhase::Idle);
            return SubmitPhase::Rejected;
        }

        self.phase.set(SubmitPhase::Submitting);
        let outcome = match self.build_request() {
            Ok(request) => {
                tracing::info!("Submitting contact form: {} {}", request.method.as_str(), request.action);
                SubmissionOutcome::from_response(transport.send(&request).await)
            }
            Err(err) => {
                tracing::error!("Could not read the form: {}", err);
                SubmissionOutcome::Failure(AppError::Transport(format!("request not sent: {}", err)))
            }
        };

        let result = match outcome {
            SubmissionOutcome::Success => {
                tracing::info!("Contact form submitted");
                feedback.success(&self.config.success_message);
                self.reset();
                SubmitPhase::Succeeded
            }
            SubmissionOutcome::Failure(err) => {
                tracing::warn!("Contact form submission failed: {}", err);
                feedback.alert(&err.user_message(&self.config.failure_message));
                SubmitPhase::Failed
            }
        };

        self.phase.set(SubmitPhase::Idle);
        result
    }
}
