//! Visitor feedback: confirmation toast on success, blocking alert on failure

use lib_core::form::Feedback;
use lib_core::toast::{run_toast, ToastTimings};
use wasm_bindgen_futures::spawn_local;

use crate::components::DomToast;
use crate::utils::scheduler::BrowserScheduler;

#[derive(Clone, Copy, Debug)]
pub struct DomFeedback {
    timings: ToastTimings,
}

impl DomFeedback {
    pub fn new(timings: ToastTimings) -> Self {
        Self { timings }
    }
}

impl Feedback for DomFeedback {
    fn success(&self, message: &str) {
        let message = message.to_string();
        let timings = self.timings;

        spawn_local(async move {
            let toast = DomToast::default();
            if let Err(err) = run_toast(&toast, &BrowserScheduler, timings, &message).await {
                log::error!("Confirmation toast failed: {}", err);
            }
        });
    }

    fn alert(&self, message: &str) {
        if let Err(err) = gloo_utils::window().alert_with_message(message) {
            log::error!("window.alert failed: {:?}", err);
        }
    }
}
