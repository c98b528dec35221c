use std::rc::Rc;

use shared::dto::contact::FormEntries;

use crate::error::Result;

/// An input element together with the element showing its error.
pub trait FieldHandle {
    /// Current value of the input.
    fn value(&self) -> String;

    /// Replace the value of the input.
    fn set_value(&self, value: &str);

    /// Set the input's `aria-invalid` attribute.
    fn set_aria_invalid(&self, invalid: bool);

    /// Show or hide the error display.
    fn set_error_visible(&self, visible: bool);
}

/// The `<form>` element.
pub trait FormHandle {
    /// URL the form submits to.
    fn action(&self) -> String;

    /// Declared submission method, e.g. `"post"`.
    fn method(&self) -> String;

    /// Every named control and its current value, as the browser would
    /// submit them.
    fn entries(&self) -> Result<FormEntries>;

    /// Reset every control of the form.
    fn reset(&self);
}

impl<T: FieldHandle + ?Sized> FieldHandle for Rc<T> {
    fn value(&self) -> String {
        (**self).value()
    }

    fn set_value(&self, value: &str) {
        (**self).set_value(value)
    }

    fn set_aria_invalid(&self, invalid: bool) {
        (**self).set_aria_invalid(invalid)
    }

    fn set_error_visible(&self, visible: bool) {
        (**self).set_error_visible(visible)
    }
}

impl<T: FormHandle + ?Sized> FormHandle for Rc<T> {
    fn action(&self) -> String {
        (**self).action()
    }

    fn method(&self) -> String {
        (**self).method()
    }

    fn entries(&self) -> Result<FormEntries> {
        (**self).entries()
    }

    fn reset(&self) {
        (**self).reset()
    }
}
