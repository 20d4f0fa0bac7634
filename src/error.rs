use wasm_bindgen::JsValue;

pub type FrameResult<T> = Result<T, FrameError>;

#[derive(thiserror::Error, Debug)]
pub enum FrameError {
    #[error("container has no data-frame attribute")]
    MissingFrameSource,

    #[error("invalid frame options: {0}")]
    InvalidOptions(String),

    #[error("dom error: {0}")]
    Dom(String),

    #[error("decode error: {0}")]
    Decode(String),
}

impl FrameError {
    pub fn invalid_options(msg: impl Into<String>) -> Self {
        Self::InvalidOptions(msg.into())
    }

    pub fn dom(msg: impl Into<String>) -> Self {
        Self::Dom(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

impl From<serde_json::Error> for FrameError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidOptions(err.to_string())
    }
}

impl From<JsValue> for FrameError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
