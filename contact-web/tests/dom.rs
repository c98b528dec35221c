//! # DOM Binding Tests
//!
//! Run in a browser with `wasm-pack test --headless --firefox contact-web`.

#![cfg(target_arch = "wasm32")]

use contact_web::app::{mount, start};
use contact_web::components::DomToast;
use contact_web::utils::scheduler::BrowserScheduler;
use lib_core::form::FieldHandle;
use lib_core::toast::{run_toast, ToastTimings};
use lib_core::FieldKind;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

const CONTACT_FORM: &str = r#"
    <form action="/contact" method="post" data-contact-config='{"name_max_len": 8}'>
        <input type="text" id="name" name="name">
        <input type="email" id="email" name="email">
        <textarea id="message" name="message"></textarea>
        <button type="submit">Send</button>
    </form>
    <span id="name-error" class="error-message"></span>
    <span id="email-error" class="error-message"></span>
    <span id="message-error" class="error-message"></span>
"#;

fn render_form() {
    gloo_utils::body().set_inner_html(CONTACT_FORM);
}

fn visibility(id: &str) -> String {
    gloo_utils::document()
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("visibility")
        .unwrap()
}

#[wasm_bindgen_test]
fn test_blur_toggles_error_display() {
    render_form();
    let app = mount().unwrap();
    let validator = app.validator();

    validator.field(FieldKind::Email).handle.set_value("invalidemail");
    assert!(!validator.on_blur(FieldKind::Email));
    assert_eq!(visibility("email-error"), "visible");

    let email = gloo_utils::document().get_element_by_id("email").unwrap();
    assert_eq!(email.get_attribute("aria-invalid").as_deref(), Some("true"));

    validator.field(FieldKind::Email).handle.set_value("a@b.com");
    assert!(validator.on_blur(FieldKind::Email));
    assert_eq!(visibility("email-error"), "hidden");
}

#[wasm_bindgen_test]
fn test_start_wires_listeners_on_a_loaded_page() {
    render_form();
    assert_ne!(gloo_utils::document().ready_state(), "loading");
    start().unwrap();

    let email = gloo_utils::document()
        .get_element_by_id("email")
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap();
    email.set_value("invalidemail");
    email.dispatch_event(&Event::new("blur").unwrap()).unwrap();

    assert_eq!(visibility("email-error"), "visible");
}

#[wasm_bindgen_test]
fn test_config_attribute_limits_name() {
    render_form();
    let app = mount().unwrap();
    let validator = app.validator();

    validator.field(FieldKind::Name).handle.set_value("Alexandrina");
    validator.on_input(FieldKind::Name);

    assert_eq!(validator.field(FieldKind::Name).handle.value(), "Alexandr");
}

#[wasm_bindgen_test]
fn test_textarea_field_is_bound() {
    render_form();
    let app = mount().unwrap();
    let validator = app.validator();

    validator.field(FieldKind::Message).handle.set_value("Short");
    assert!(!validator.validate_field(FieldKind::Message));
    assert_eq!(visibility("message-error"), "visible");
}

#[wasm_bindgen_test]
fn test_request_carries_every_named_control() {
    gloo_utils::body().set_inner_html(
        r#"
        <form action="/contact" method="post">
            <input type="hidden" name="_subject" value="Portfolio contact">
            <input type="text" id="name" name="full_name">
            <input type="email" id="email" name="email">
            <textarea id="message" name="message"></textarea>
        </form>
        <span id="name-error"></span>
        <span id="email-error"></span>
        <span id="message-error"></span>
    "#,
    );
    let app = mount().unwrap();
    let validator = app.validator();
    validator.field(FieldKind::Name).handle.set_value("Andrew");

    let fields = validator.build_request().unwrap().fields;

    assert_eq!(fields.len(), 4);
    assert_eq!(fields.get("_subject"), Some("Portfolio contact"));
    assert_eq!(fields.get("full_name"), Some("Andrew"));
    assert_eq!(fields.get("name"), None);
}

#[wasm_bindgen_test]
fn test_missing_error_element_fails_mount() {
    gloo_utils::body().set_inner_html(r#"<form><input id="name"></form>"#);
    assert!(mount().is_err());
}

#[wasm_bindgen_test]
async fn test_toast_is_removed_after_timeline() {
    let toast = DomToast::default();
    let timings = ToastTimings { dwell_ms: 10, fade_ms: 10 };

    run_toast(&toast, &BrowserScheduler, timings, "Message sent successfully!")
        .await
        .unwrap();

    let document = gloo_utils::document();
    assert!(document.get_element_by_id("toast-overlay").is_none());
    assert!(document.get_element_by_id("toast-message").is_none());
}
