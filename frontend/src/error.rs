use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures of the browser-side enhancements. None of these are ever shown
/// to the visitor; callers log them and carry on without the feature.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("window is not available")]
    NoWindow,

    #[error("document is not available")]
    NoDocument,

    #[error("element `{0}` is missing")]
    MissingElement(String),

    #[error("could not acquire a 2d canvas context")]
    CanvasContext,

    #[error("could not register `{event}` listener: {message}")]
    Listener { event: &'static str, message: String },

    #[error("local storage unavailable: {0}")]
    Storage(String),

    #[error("browser call failed: {0}")]
    Js(String),
}

impl SiteError {
    pub fn listener(event: &'static str, err: JsValue) -> Self {
        Self::Listener {
            event,
            message: describe(&err),
        }
    }
}

impl From<JsValue> for SiteError {
    fn from(err: JsValue) -> Self {
        Self::Js(describe(&err))
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

pub type Result<T> = std::result::Result<T, SiteError>;
