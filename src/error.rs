//! Errors surfaced by rotator setup

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Errors that occur while configuring or starting a rotator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RotatorError {
    /// The configuration would break the angle range invariant.
    #[error("invalid rotator config for `{class_name}`: {reason}")]
    InvalidConfig {
        class_name: String,
        reason: &'static str,
    },

    /// No global `window` (not running in a browser).
    #[error("no global window available")]
    NoWindow,

    /// The window has no document.
    #[error("window has no document")]
    NoDocument,

    /// The document has no <head> to hold the transition stylesheet.
    #[error("document has no head element")]
    NoHead,

    /// A DOM call threw.
    #[error("dom operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for RotatorError {
    fn from(value: JsValue) -> Self {
        let message = match value.dyn_ref::<js_sys::Error>() {
            Some(err) => String::from(err.message()),
            None => value.as_string().unwrap_or_else(|| format!("{value:?}")),
        };
        Self::Dom(message)
    }
}
