use thiserror::Error;

/// Fallback text when the JSON decoder gives no message
pub const GENERIC_JSON_ERROR: &str = "Unable to decode the json.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SanitizeError {
    #[error("Invalid JSON: {0}")]
    Json(String),

    #[error("{0}")]
    Custom(String),
}

impl SanitizeError {
    /// JSON decode failure carrying the decoder's message
    pub fn json(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Json(GENERIC_JSON_ERROR.to_string())
        } else {
            Self::Json(message)
        }
    }

    /// Failure raised by a user-supplied sanitizer
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}
