//! Browser-backed [`Scheduler`] for the toast timeline

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use lib_core::toast::{Scheduler, Wait};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Waits on `requestAnimationFrame` and `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[async_trait(?Send)]
impl Scheduler for BrowserScheduler {
    async fn wait(&self, wait: Wait) {
        match wait {
            Wait::NextFrame => next_animation_frame().await,
            Wait::Millis(ms) => TimeoutFuture::new(ms).await,
        }
    }
}

/// Resolve on the next animation frame.
async fn next_animation_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Err(err) = gloo_utils::window().request_animation_frame(&resolve) {
            log::warn!("requestAnimationFrame failed, continuing: {:?}", err);
            if let Err(err) = resolve.call0(&JsValue::NULL) {
                log::warn!("Could not resolve the frame promise: {:?}", err);
            }
        }
    });

    if let Err(err) = JsFuture::from(promise).await {
        log::warn!("Animation frame promise rejected: {:?}", err);
    }
}
