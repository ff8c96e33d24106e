/// Initialization failures surfaced to the JavaScript caller
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong while standing up a demo.
///
/// Both variants abort initialization at the point of detection; there is
/// no retry and no degraded mode.
#[derive(Debug, Error)]
pub enum SetupError {
    /// No rendering context, or the shader pair failed to compile or link
    #[error("resource acquisition failed: {0}")]
    ResourceAcquisition(String),
    /// The canvas or input element the demo expects is not in the page
    #[error("missing element: {0}")]
    MissingElement(String),
}

impl From<SetupError> for JsValue {
    fn from(err: SetupError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
