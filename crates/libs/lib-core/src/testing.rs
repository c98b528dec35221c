//! # In-Memory Stand-Ins
//!
//! Page, network and timer doubles for exercising [`FormValidator`] and the
//! toast timeline without a browser. Each double records what it was asked to
//! do so tests can assert on it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use shared::dto::contact::FormEntries;

use crate::config::ContactConfig;
use crate::error::{AppError, Result};
use crate::form::{Feedback, FieldHandle, FormHandle, FormValidator, SubmitRequest, Transport};
use crate::model::field::FieldKind;
use crate::toast::{Scheduler, ToastSurface, Wait};

/// Action URL used by [`memory_validator`].
pub const TEST_ACTION: &str = "https://forms.example.com/f/contact";

/// An input and its error display.
#[derive(Debug, Default)]
pub struct MemoryField {
    value: RefCell<String>,
    aria_invalid: Cell<Option<bool>>,
    error_visible: Cell<bool>,
}

impl MemoryField {
    pub fn new(value: &str) -> Self {
        Self {
            value: RefCell::new(value.to_string()),
            ..Self::default()
        }
    }

    pub fn error_visible(&self) -> bool {
        self.error_visible.get()
    }

    /// `None` until the field has been validated once.
    pub fn aria_invalid(&self) -> Option<bool> {
        self.aria_invalid.get()
    }
}

impl FieldHandle for MemoryField {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        *self.value.borrow_mut() = value.to_string();
    }

    fn set_aria_invalid(&self, invalid: bool) {
        self.aria_invalid.set(Some(invalid));
    }

    fn set_error_visible(&self, visible: bool) {
        self.error_visible.set(visible);
    }
}

/// A form whose entries are its bound fields followed by any extra controls.
#[derive(Debug)]
pub struct MemoryForm {
    action: String,
    method: String,
    fields: Vec<(String, Rc<MemoryField>)>,
    extra: RefCell<Vec<(String, String)>>,
    resets: Cell<usize>,
}

impl MemoryForm {
    pub fn new(action: &str, method: &str) -> Self {
        Self {
            action: action.to_string(),
            method: method.to_string(),
            fields: Vec::new(),
            extra: RefCell::default(),
            resets: Cell::new(0),
        }
    }

    /// Submit `field`'s live value under `name`.
    pub fn with_field(mut self, name: &str, field: Rc<MemoryField>) -> Self {
        self.fields.push((name.to_string(), field));
        self
    }

    /// Add a fixed control, such as a hidden input, after the fields.
    pub fn add_entry(&self, name: &str, value: &str) {
        self.extra.borrow_mut().push((name.to_string(), value.to_string()));
    }

    /// How many times the form was reset.
    pub fn resets(&self) -> usize {
        self.resets.get()
    }
}

impl FormHandle for MemoryForm {
    fn action(&self) -> String {
        self.action.clone()
    }

    fn method(&self) -> String {
        self.method.clone()
    }

    fn entries(&self) -> Result<FormEntries> {
        let fields = self.fields.iter().map(|(name, field)| (name.clone(), field.value()));
        Ok(fields.chain(self.extra.borrow().iter().cloned()).collect())
    }

    fn reset(&self) {
        self.resets.set(self.resets.get() + 1);
    }
}

pub type MemoryValidator = FormValidator<Rc<MemoryField>, Rc<MemoryForm>>;

/// A validator over empty in-memory fields posting to [`TEST_ACTION`].
///
/// The form submits each field under its input id, like the page markup does.
pub fn memory_validator(config: ContactConfig) -> MemoryValidator {
    let [name, email, message] = FieldKind::ALL.map(|_| Rc::new(MemoryField::default()));
    let form = MemoryForm::new(TEST_ACTION, "post")
        .with_field(FieldKind::Name.input_id(), Rc::clone(&name))
        .with_field(FieldKind::Email.input_id(), Rc::clone(&email))
        .with_field(FieldKind::Message.input_id(), Rc::clone(&message));

    FormValidator::new(name, email, message, Rc::new(form), config)
}

#[derive(Debug)]
enum StubResponse {
    Status(u16),
    Unreachable(String),
}

/// Answers every request the same way.
#[derive(Debug)]
pub struct StubTransport {
    response: StubResponse,
    requests: RefCell<Vec<SubmitRequest>>,
}

impl StubTransport {
    /// Respond with `status`.
    pub fn status(status: u16) -> Self {
        Self {
            response: StubResponse::Status(status),
            requests: RefCell::default(),
        }
    }

    /// Fail before any response, as a network error would.
    pub fn unreachable(reason: &str) -> Self {
        Self {
            response: StubResponse::Unreachable(reason.to_string()),
            requests: RefCell::default(),
        }
    }

    pub fn requests(&self) -> Vec<SubmitRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for StubTransport {
    async fn send(&self, request: &SubmitRequest) -> Result<u16> {
        self.requests.borrow_mut().push(request.clone());
        match &self.response {
            StubResponse::Status(status) => Ok(*status),
            StubResponse::Unreachable(reason) => Err(AppError::Transport(reason.clone())),
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingFeedback {
    successes: RefCell<Vec<String>>,
    alerts: RefCell<Vec<String>>,
}

impl RecordingFeedback {
    pub fn successes(&self) -> Vec<String> {
        self.successes.borrow().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Feedback for RecordingFeedback {
    fn success(&self, message: &str) {
        self.successes.borrow_mut().push(message.to_string());
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

/// Resolves every wait immediately.
#[derive(Debug, Default)]
pub struct RecordingScheduler {
    waits: RefCell<Vec<Wait>>,
}

impl RecordingScheduler {
    pub fn waits(&self) -> Vec<Wait> {
        self.waits.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Scheduler for RecordingScheduler {
    async fn wait(&self, wait: Wait) {
        self.waits.borrow_mut().push(wait);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ToastEvent {
    Mounted(String),
    Opacity(f64),
    Removed,
}

#[derive(Debug, Default)]
pub struct RecordingToast {
    events: RefCell<Vec<ToastEvent>>,
    mounted: Cell<bool>,
    fail_mount: bool,
}

impl RecordingToast {
    /// A surface whose `mount` fails.
    pub fn failing() -> Self {
        Self {
            fail_mount: true,
            ..Self::default()
        }
    }

    pub fn events(&self) -> Vec<ToastEvent> {
        self.events.borrow().clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }
}

impl ToastSurface for RecordingToast {
    fn mount(&self, message: &str) -> Result<()> {
        if self.fail_mount {
            return Err(AppError::Dom("body unavailable".to_string()));
        }
        self.mounted.set(true);
        self.events.borrow_mut().push(ToastEvent::Mounted(message.to_string()));
        Ok(())
    }

    fn set_opacity(&self, opacity: f64) {
        self.events.borrow_mut().push(ToastEvent::Opacity(opacity));
    }

    fn remove(&self) {
        self.mounted.set(false);
        self.events.borrow_mut().push(ToastEvent::Removed);
    }
}
