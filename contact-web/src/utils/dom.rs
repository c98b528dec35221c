//! DOM-backed field and form handles

use lib_core::config::CONFIG_ATTRIBUTE;
use lib_core::error::{AppError, Result};
use lib_core::form::{FieldHandle, FormHandle};
use lib_core::FieldKind;
use shared::dto::contact::FormEntries;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, FormData, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
};

use crate::utils::constants::FORM_SELECTOR;

/// Wrap a JavaScript exception with what we were doing.
pub fn js_error(context: &str, err: JsValue) -> AppError {
    AppError::Dom(format!("{}: {:?}", context, err))
}

pub fn element_by_id(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| AppError::ElementNotFound(format!("#{}", id)))
}

/// The editable control of a field.
#[derive(Clone, Debug)]
pub enum FieldInput {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl FieldInput {
    fn from_element(element: Element) -> Result<Self> {
        let element = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Ok(Self::Input(input)),
            Err(element) => element,
        };
        element
            .dyn_into::<HtmlTextAreaElement>()
            .map(Self::TextArea)
            .map_err(|element| AppError::Dom(format!("#{} is not an input or textarea", element.id())))
    }

    pub fn element(&self) -> &HtmlElement {
        match self {
            Self::Input(input) => &**input,
            Self::TextArea(textarea) => &**textarea,
        }
    }
}

/// A field's input and its error display.
#[derive(Clone, Debug)]
pub struct DomField {
    kind: FieldKind,
    input: FieldInput,
    error: HtmlElement,
}

impl DomField {
    /// Look up `kind`'s input and error elements by id.
    pub fn find(document: &Document, kind: FieldKind) -> Result<Self> {
        let input = FieldInput::from_element(element_by_id(document, kind.input_id())?)?;
        let error = element_by_id(document, kind.error_id())?
            .dyn_into::<HtmlElement>()
            .map_err(|_| AppError::Dom(format!("#{} is not an HTML element", kind.error_id())))?;

        Ok(Self { kind, input, error })
    }

    pub fn input(&self) -> &FieldInput {
        &self.input
    }
}

impl FieldHandle for DomField {
    fn value(&self) -> String {
        match &self.input {
            FieldInput::Input(input) => input.value(),
            FieldInput::TextArea(textarea) => textarea.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match &self.input {
            FieldInput::Input(input) => input.set_value(value),
            FieldInput::TextArea(textarea) => textarea.set_value(value),
        }
    }

    fn set_aria_invalid(&self, invalid: bool) {
        let value = if invalid { "true" } else { "false" };
        if let Err(err) = self.input.element().set_attribute("aria-invalid", value) {
            log::warn!("Failed to set aria-invalid on #{}: {:?}", self.kind, err);
        }
    }

    fn set_error_visible(&self, visible: bool) {
        let value = if visible { "visible" } else { "hidden" };
        if let Err(err) = self.error.style().set_property("visibility", value) {
            log::warn!("Failed to toggle #{}: {:?}", self.kind.error_id(), err);
        }
    }
}

#[derive(Clone, Debug)]
pub struct DomForm(HtmlFormElement);

impl DomForm {
    pub fn find(document: &Document) -> Result<Self> {
        document
            .query_selector(FORM_SELECTOR)
            .map_err(|err| js_error("query form", err))?
            .ok_or_else(|| AppError::ElementNotFound(FORM_SELECTOR.to_string()))?
            .dyn_into::<HtmlFormElement>()
            .map(Self)
            .map_err(|_| AppError::Dom("form selector matched a non-form element".to_string()))
    }

    pub fn element(&self) -> &HtmlFormElement {
        &self.0
    }

    /// Raw JSON of the optional config attribute.
    pub fn config_attribute(&self) -> Option<String> {
        self.0.get_attribute(CONFIG_ATTRIBUTE)
    }
}

impl FormHandle for DomForm {
    fn action(&self) -> String {
        self.0.action()
    }

    fn method(&self) -> String {
        self.0.method()
    }

    /// What `new FormData(form)` holds: every named, enabled control. File
    /// inputs are skipped.
    fn entries(&self) -> Result<FormEntries> {
        let data = FormData::new_with_form(&self.0).map_err(|err| js_error("read form data", err))?;
        let iter = js_sys::try_iter(&data)
            .map_err(|err| js_error("iterate form data", err))?
            .ok_or_else(|| AppError::Dom("FormData is not iterable".to_string()))?;

        let mut entries = FormEntries::new();
        for entry in iter {
            let pair = js_sys::Array::from(&entry.map_err(|err| js_error("read form entry", err))?);
            let name = pair.get(0).as_string().unwrap_or_default();
            match pair.get(1).as_string() {
                Some(value) => entries.push(name, value),
                None => log::debug!("Skipping non-text form entry {}", name),
            }
        }
        Ok(entries)
    }

    fn reset(&self) {
        self.0.reset();
    }
}
