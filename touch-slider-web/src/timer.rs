use touch_slider::Scheduler;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// A [`Scheduler`] over `setTimeout` / `clearTimeout`.
///
/// One closure is created up front and reused for every firing, so rescheduling from inside
/// the firing itself never drops the running closure.
pub struct TimeoutScheduler {
    window: Window,
    handle: Option<i32>,
    on_fire: Closure<dyn FnMut()>,
}

impl TimeoutScheduler {
    pub fn new(window: Window, on_fire: impl FnMut() + 'static) -> Self {
        Self {
            window,
            handle: None,
            on_fire: Closure::new(on_fire),
        }
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&mut self, delay_ms: u32) {
        self.cancel();
        let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                self.on_fire.as_ref().unchecked_ref(),
                timeout,
            ) {
            Ok(handle) => self.handle = Some(handle),
            Err(err) => wwarn!("setTimeout failed: {err:?}"),
        }
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}

impl Drop for TimeoutScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for TimeoutScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeoutScheduler")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}
