use super::numeric::{is_weak_numeric, leading_float};
use super::{SanitizeError, Sanitizer};
use crate::value::Value;

/// Coerces any value to an `f64`, with the same branching as
/// [`IntegerSanitizer`](super::IntegerSanitizer)
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatSanitizer;

impl FloatSanitizer {
    /// Catalog type name
    pub const NAME: &'static str = "float";

    pub fn coerce(input: &Value) -> f64 {
        match input {
            Value::Record(record) => record.field_count() as f64,
            Value::List(items) => items.len() as f64,
            Value::Map(map) => map.len() as f64,
            Value::Str(s) if !is_weak_numeric(s) => s.chars().count() as f64,
            Value::Str(s) => leading_float(s),
            Value::Float(f) => *f,
            Value::Int(i) => *i as f64,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Null => 0.0,
        }
    }
}

impl Sanitizer for FloatSanitizer {
    fn sanitize(&self, input: &Value) -> Result<Value, SanitizeError> {
        Ok(Value::Float(Self::coerce(input)))
    }
}
