use super::{SanitizeError, Sanitizer};
use crate::value::Value;

/// Coerces any value to a boolean
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanSanitizer;

impl BooleanSanitizer {
    /// Catalog type name
    pub const NAME: &'static str = "boolean";

    /// Strings are true only for a case-insensitive `"true"`; everything else
    /// uses truthiness.
    pub fn coerce(input: &Value) -> bool {
        match input {
            Value::Str(s) => s.to_lowercase() == "true",
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::List(items) => !items.is_empty(),
            Value::Map(map) => !map.is_empty(),
            Value::Record(_) => true,
        }
    }
}

impl Sanitizer for BooleanSanitizer {
    fn sanitize(&self, input: &Value) -> Result<Value, SanitizeError> {
        Ok(Value::Bool(Self::coerce(input)))
    }
}
