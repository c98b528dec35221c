//! Contact Form Script
//!
//! Client-side validation and asynchronous submission for the contact form of
//! a static site. Load the generated module on the contact page; it attaches to
//! the existing markup:
//!
//! ```html
//! <form action="https://formspree.io/f/xyz" method="POST">
//!   <input id="name" name="name"> <span id="name-error">...</span>
//!   <input id="email" name="email"> <span id="email-error">...</span>
//!   <textarea id="message" name="message"></textarea> <span id="message-error">...</span>
//! </form>
//! ```

use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod services;
pub mod utils;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    if let Err(err) = app::start() {
        log::error!("Contact form not wired: {}", err);
    }
}
