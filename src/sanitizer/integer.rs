use super::numeric::{is_weak_numeric, leading_int};
use super::{SanitizeError, Sanitizer};
use crate::value::Value;

/// Coerces any value to an `i64`
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerSanitizer;

impl IntegerSanitizer {
    /// Catalog type name
    pub const NAME: &'static str = "integer";

    /// Conversion rules, first match wins:
    /// - records count their visible fields
    /// - lists and maps count their entries
    /// - non-numeric strings yield their length in chars
    /// - floats round half away from zero
    /// - everything else converts numerically (`true` is 1, null is 0)
    pub fn coerce(input: &Value) -> i64 {
        match input {
            Value::Record(record) => count(record.field_count()),
            Value::List(items) => count(items.len()),
            Value::Map(map) => count(map.len()),
            Value::Str(s) if !is_weak_numeric(s) => count(s.chars().count()),
            Value::Str(s) => leading_int(s),
            // `as` saturates and maps NaN to 0
            Value::Float(f) => f.round() as i64,
            Value::Int(i) => *i,
            Value::Bool(b) => i64::from(*b),
            Value::Null => 0,
        }
    }
}

fn count(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

impl Sanitizer for IntegerSanitizer {
    fn sanitize(&self, input: &Value) -> Result<Value, SanitizeError> {
        Ok(Value::Int(Self::coerce(input)))
    }
}
