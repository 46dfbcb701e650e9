use super::{SanitizeError, Sanitizer};
use crate::value::Value;

/// Coerces any value to text
#[derive(Debug, Clone, Copy, Default)]
pub struct StringSanitizer;

impl StringSanitizer {
    /// Catalog type name
    pub const NAME: &'static str = "string";

    /// Records render through their display text (empty without one);
    /// lists and maps render as compact tagged JSON (see
    /// [`Value::to_tagged_json`]) so the Json sanitizer reads them back.
    pub fn render(input: &Value) -> String {
        match input {
            Value::Record(record) => record.display().unwrap_or_default().to_string(),
            Value::List(_) | Value::Map(_) => input.to_tagged_json().to_string(),
            Value::Bool(true) => "true".to_string(),
            Value::Bool(false) => "false".to_string(),
            Value::Null => String::new(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Str(s) => s.clone(),
        }
    }
}

impl Sanitizer for StringSanitizer {
    fn sanitize(&self, input: &Value) -> Result<Value, SanitizeError> {
        Ok(Value::Str(Self::render(input)))
    }
}
