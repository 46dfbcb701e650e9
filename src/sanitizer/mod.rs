mod boolean;
mod catalog;
mod error;
mod float;
mod integer;
mod json;
pub mod numeric;
mod registry;
mod string;

#[cfg(test)]
mod tests;

pub use boolean::BooleanSanitizer;
pub use catalog::{SanitizerCatalog, SanitizerFactory};
pub use error::{SanitizeError, GENERIC_JSON_ERROR};
pub use float::FloatSanitizer;
pub use integer::IntegerSanitizer;
pub use json::JsonSanitizer;
pub use registry::SanitizerRegistry;
pub use string::StringSanitizer;

use crate::value::Value;

/// Registry keys for the built-in sanitizers
pub mod keys {
    pub const BOOLEAN: &str = "bool";
    pub const INTEGER: &str = "int";
    pub const FLOAT: &str = "float";
    pub const STRING: &str = "string";
    /// Not installed by default; register it with
    /// `register_sanitizer(keys::JSON, JsonSanitizer::NAME)`
    pub const JSON: &str = "json";
}

/// Core trait that all sanitizers must implement
pub trait Sanitizer: Send + Sync {
    /// Coerce an arbitrary value into the sanitizer's target type
    ///
    /// # Returns
    /// The coerced value. Built-in scalar sanitizers never fail; decoding
    /// sanitizers report malformed input as a [`SanitizeError`].
    fn sanitize(&self, input: &Value) -> Result<Value, SanitizeError>;
}

impl<F> Sanitizer for F
where
    F: Fn(&Value) -> Result<Value, SanitizeError> + Send + Sync,
{
    fn sanitize(&self, input: &Value) -> Result<Value, SanitizeError> {
        self(input)
    }
}
