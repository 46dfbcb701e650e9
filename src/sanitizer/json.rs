use super::{SanitizeError, Sanitizer, StringSanitizer, GENERIC_JSON_ERROR};
use crate::value::{ObjectMode, Value};
use std::borrow::Cow;

/// Decodes JSON text into a [`Value`]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSanitizer {
    objects: ObjectMode,
}

impl JsonSanitizer {
    /// Catalog type name
    pub const NAME: &'static str = "json";

    /// Decoder that turns JSON objects into maps
    pub fn new() -> Self {
        Self::default()
    }

    /// Decoder with an explicit object representation
    pub fn with_objects(objects: ObjectMode) -> Self {
        Self { objects }
    }

    /// Decode the input. Non-string inputs are rendered with the string rules
    /// first, so `Int(42)` decodes to `42` and lists round-trip. Text that
    /// decodes to JSON `null` is an error.
    pub fn decode(&self, input: &Value) -> Result<Value, SanitizeError> {
        let text = match input {
            Value::Str(s) => Cow::Borrowed(s.as_str()),
            other => Cow::Owned(StringSanitizer::render(other)),
        };

        let json: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| SanitizeError::json(e.to_string()))?;

        if json.is_null() {
            return Err(SanitizeError::json(GENERIC_JSON_ERROR));
        }

        Ok(Value::from_json(json, self.objects))
    }
}

impl Sanitizer for JsonSanitizer {
    fn sanitize(&self, input: &Value) -> Result<Value, SanitizeError> {
        self.decode(input)
    }
}
