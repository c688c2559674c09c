use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while mounting a slider onto the page.
#[derive(Debug, Error)]
pub enum SliderError {
    #[error("no global `window` available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("missing required option `{0}`")]
    MissingOption(&'static str),
    #[error("no element with class `{0}` found")]
    ContainerNotFound(String),
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for SliderError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Dom(message)
    }
}

impl From<SliderError> for JsValue {
    fn from(err: SliderError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
