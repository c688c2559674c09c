//! Browser binding for the `touch-slider` controller.
//!
//! Mounts a [`touch_slider::Slider`] onto a container element: the container's first and last
//! items are cloned onto the opposite ends, the track is drawn through inline styles, touch /
//! resize / transition-end listeners are registered, and auto play runs on `setTimeout`.
//!
//! From JavaScript:
//!
//! ```js
//! const slider = new Slider({
//!   container: "slider",
//!   item: "slider-item",
//!   auto: true,
//!   autoTime: 3000,
//!   rate: 0.5,
//!   scale: 0.9,
//!   getIndexCallback: (index) => console.log(index),
//! });
//! // later
//! slider.destroy();
//! ```
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod dom;
mod error;
mod listeners;
mod mount;
mod options;
mod timer;

use wasm_bindgen::prelude::*;

pub use dom::DomRenderer;
pub use error::SliderError;
pub use listeners::{Listeners, supports_passive};
pub use mount::MountedSlider;
pub use options::MountOptions;
pub use timer::TimeoutScheduler;

/// The JS-facing slider.
#[wasm_bindgen(js_name = Slider)]
#[derive(Debug)]
pub struct WebSlider {
    mounted: MountedSlider,
}

#[wasm_bindgen(js_class = Slider)]
impl WebSlider {
    /// Mounts a slider; see the crate docs for the recognized option keys.
    ///
    /// Throws when `container`/`item` are missing or no container element exists.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<WebSlider, JsValue> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let options = MountOptions::from_js(&options)?;
        let mounted = MountedSlider::mount(options)?;
        Ok(Self { mounted })
    }

    /// Detaches all listeners and cancels the auto-play timer. Safe to call repeatedly.
    pub fn destroy(&mut self) {
        self.mounted.destroy();
    }

    #[wasm_bindgen(js_name = removeAllListener)]
    pub fn remove_all_listener(&mut self) {
        self.destroy();
    }

    #[wasm_bindgen(getter)]
    pub fn index(&self) -> u32 {
        self.mounted.index() as u32
    }
}

impl WebSlider {
    pub fn mounted(&self) -> &MountedSlider {
        &self.mounted
    }
}
