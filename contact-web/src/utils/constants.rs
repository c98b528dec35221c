//! Application constants

/// Selector of the contact form; the page has exactly one `<form>`.
pub const FORM_SELECTOR: &str = "form";

pub const TOAST_OVERLAY_ID: &str = "toast-overlay";
pub const TOAST_MESSAGE_ID: &str = "toast-message";

// Both elements start transparent; the transition must match toast_fade_ms.
pub const TOAST_OVERLAY_STYLE: &str = "position: fixed; top: 0; left: 0; \
    width: 100%; height: 100%; \
    background: rgba(0,0,0,0.3); backdrop-filter: blur(5px); \
    z-index: 999; opacity: 0; transition: opacity 0.3s ease;";

pub const TOAST_MESSAGE_STYLE: &str = "position: fixed; top: 50%; left: 50%; \
    transform: translate(-50%, -50%); \
    background: var(--clr-toast-message); color: var(--clr-white); \
    padding: 40px 60px; border-radius: 10px; font-size: 1.2rem; \
    z-index: 1000; text-align: center; opacity: 0; transition: opacity 0.3s ease;";
