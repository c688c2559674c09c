use js_sys::{Function, Reflect};
use touch_slider::{DEFAULT_INTERVAL_MS, DEFAULT_RATE, DEFAULT_SCALE, SliderOptions};
use wasm_bindgen::{JsCast, JsValue};

use crate::SliderError;

/// Everything needed to mount a slider onto the page.
#[derive(Clone, Debug)]
pub struct MountOptions {
    /// Class name of the container; the first matching element is used.
    pub container: String,
    /// Class name of the items, looked up inside the container.
    pub item: String,
    pub auto_play: bool,
    pub interval_ms: u32,
    pub rate: f64,
    pub scale: f32,
    /// Called with the current logical index.
    pub on_index: Option<Function>,
}

impl MountOptions {
    pub fn new(container: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            item: item.into(),
            auto_play: false,
            interval_ms: DEFAULT_INTERVAL_MS,
            rate: DEFAULT_RATE,
            scale: DEFAULT_SCALE,
            on_index: None,
        }
    }

    /// Reads options from a plain JS object.
    ///
    /// Recognized keys: `container` and `item` (required strings), `auto` (boolean),
    /// `autoTime` (number, ms), `rate` (number), `scale` (number) and `getIndexCallback`
    /// (function). Optional keys with the wrong type keep their defaults.
    pub fn from_js(value: &JsValue) -> Result<Self, SliderError> {
        let container = get(value, "container")
            .and_then(|v| v.as_string())
            .ok_or(SliderError::MissingOption("container"))?;
        let item = get(value, "item")
            .and_then(|v| v.as_string())
            .ok_or(SliderError::MissingOption("item"))?;

        let mut opts = Self::new(container, item);
        if let Some(auto_play) = get(value, "auto").and_then(|v| v.as_bool()) {
            opts.auto_play = auto_play;
        }
        if let Some(ms) = get(value, "autoTime").and_then(|v| v.as_f64()) {
            // Saturating cast; NaN and negatives become 0 and fall back on normalization.
            opts.interval_ms = ms as u32;
        }
        if let Some(rate) = get(value, "rate").and_then(|v| v.as_f64()) {
            opts.rate = rate;
        }
        if let Some(scale) = get(value, "scale").and_then(|v| v.as_f64()) {
            opts.scale = scale as f32;
        }
        opts.on_index = get(value, "getIndexCallback").and_then(|v| v.dyn_into::<Function>().ok());
        Ok(opts)
    }

    /// The core options, without the index callback.
    pub fn slider_options(&self) -> SliderOptions {
        SliderOptions::new()
            .with_auto_play(self.auto_play)
            .with_interval_ms(self.interval_ms)
            .with_rate(self.rate)
            .with_scale(self.scale)
    }
}

fn get(value: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(value, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}
