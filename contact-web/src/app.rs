//! Contact Form App - wires the core validator to the page
//!
//! Locates the form and its fields, then attaches `input`, `blur` and
//! `submit` listeners. Listeners live as long as the page.

use std::rc::Rc;

use lib_core::error::Result;
use lib_core::form::FormValidator;
use lib_core::{ContactConfig, FieldKind};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, EventTarget};

use crate::services::{DomFeedback, HttpTransport};
use crate::utils::dom::{js_error, DomField, DomForm};

pub struct ContactApp {
    validator: FormValidator<DomField, DomForm>,
    transport: HttpTransport,
    feedback: DomFeedback,
}

impl ContactApp {
    pub fn validator(&self) -> &FormValidator<DomField, DomForm> {
        &self.validator
    }

    fn bind_field(self: &Rc<Self>, kind: FieldKind) -> Result<()> {
        let target = self.validator.field(kind).handle.input().element().clone();

        let app = Rc::clone(self);
        listen(&target, "input", move |_| app.validator.on_input(kind))?;

        let app = Rc::clone(self);
        listen(&target, "blur", move |_| {
            app.validator.on_blur(kind);
        })
    }

    fn bind_submit(self: &Rc<Self>, target: &EventTarget) -> Result<()> {
        let app = Rc::clone(self);
        listen(target, "submit", move |event: Event| {
            event.prevent_default();

            let app = Rc::clone(&app);
            spawn_local(async move {
                let phase = app.validator.on_submit(&app.transport, &app.feedback).await;
                log::debug!("Submit handled: {:?}", phase);
            });
        })
    }
}

/// Mount now, or once the DOM has been parsed if the script ran early.
pub fn start() -> Result<()> {
    let document = gloo_utils::document();
    if document.ready_state() != "loading" {
        return mount().map(|_| ());
    }

    log::debug!("Document still loading, waiting for DOMContentLoaded");
    listen(&document, "DOMContentLoaded", |_| {
        if let Err(err) = mount() {
            log::error!("Contact form not wired: {}", err);
        }
    })
}

/// Find the form and its fields and attach every listener.
pub fn mount() -> Result<Rc<ContactApp>> {
    let document = gloo_utils::document();
    let form = DomForm::find(&document)?;
    let config = ContactConfig::from_attribute(form.config_attribute().as_deref());

    let name = DomField::find(&document, FieldKind::Name)?;
    let email = DomField::find(&document, FieldKind::Email)?;
    let message = DomField::find(&document, FieldKind::Message)?;

    let form_target: EventTarget = form.element().clone().into();
    let feedback = DomFeedback::new(config.toast_timings());
    let app = Rc::new(ContactApp {
        validator: FormValidator::new(name, email, message, form, config),
        transport: HttpTransport,
        feedback,
    });

    for kind in FieldKind::ALL {
        app.bind_field(kind)?;
    }
    app.bind_submit(&form_target)?;

    log::info!("Contact form ready");
    Ok(app)
}

/// Attach `handler` to `event` on `target` for the life of the page.
fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|err| js_error(event, err))?;
    closure.forget();
    Ok(())
}
