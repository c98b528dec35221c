//! Confirmation Toast Component
//! Centered message box over a blurred overlay, rendered straight into <body>

use std::cell::RefCell;

use lib_core::error::{AppError, Result};
use lib_core::toast::ToastSurface;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::utils::constants::{
    TOAST_MESSAGE_ID, TOAST_MESSAGE_STYLE, TOAST_OVERLAY_ID, TOAST_OVERLAY_STYLE,
};
use crate::utils::dom::js_error;

#[derive(Debug, Default)]
pub struct DomToast {
    elements: RefCell<Vec<HtmlElement>>,
}

impl ToastSurface for DomToast {
    fn mount(&self, message: &str) -> Result<()> {
        let document = gloo_utils::document();
        let body = document
            .body()
            .ok_or_else(|| AppError::ElementNotFound("body".to_string()))?;

        let overlay = create_div(&document, TOAST_OVERLAY_ID, TOAST_OVERLAY_STYLE)?;
        let toast = create_div(&document, TOAST_MESSAGE_ID, TOAST_MESSAGE_STYLE)?;
        toast.set_text_content(Some(message));

        body.append_child(&overlay)
            .map_err(|err| js_error("append toast overlay", err))?;
        body.append_child(&toast)
            .map_err(|err| js_error("append toast message", err))?;

        *self.elements.borrow_mut() = vec![overlay, toast];
        Ok(())
    }

    fn set_opacity(&self, opacity: f64) {
        for element in self.elements.borrow().iter() {
            if let Err(err) = element.style().set_property("opacity", &opacity.to_string()) {
                log::warn!("Failed to set toast opacity: {:?}", err);
            }
        }
    }

    fn remove(&self) {
        for element in self.elements.borrow_mut().drain(..) {
            element.remove();
        }
    }
}

fn create_div(document: &Document, id: &str, style: &str) -> Result<HtmlElement> {
    let element = document
        .create_element("div")
        .map_err(|err| js_error("create toast element", err))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| AppError::Dom("div is not an HtmlElement".to_string()))?;

    element.set_id(id);
    element
        .set_attribute("style", style)
        .map_err(|err| js_error("style toast element", err))?;

    Ok(element)
}
