use super::{
    keys, BooleanSanitizer, FloatSanitizer, IntegerSanitizer, SanitizeError, Sanitizer,
    SanitizerCatalog, StringSanitizer,
};
use crate::value::Value;
use std::collections::HashMap;

/// Keyed dispatch table for sanitizers.
///
/// Unknown keys pass the input through untouched. Entries are only ever
/// added or replaced, never removed, so the built-in keys (`bool`, `int`,
/// `float`, `string`) are always present.
///
/// Registration needs `&mut self`; once the registry is wrapped in an `Arc`
/// and shared it is read-only.
pub struct SanitizerRegistry {
    /// Type-name constructors for by-name registration
    catalog: SanitizerCatalog,
    /// Key -> Sanitizer mapping
    map: HashMap<String, Box<dyn Sanitizer>>,
}

impl SanitizerRegistry {
    /// Create a registry with the default sanitizers and the built-in catalog
    pub fn new() -> Self {
        Self::with_catalog(SanitizerCatalog::new())
    }

    /// Create a registry with the default sanitizers and a custom catalog
    pub fn with_catalog(catalog: SanitizerCatalog) -> Self {
        let mut registry = Self {
            catalog,
            map: HashMap::new(),
        };

        registry
            .add_sanitizer(keys::BOOLEAN, BooleanSanitizer)
            .add_sanitizer(keys::INTEGER, IntegerSanitizer)
            .add_sanitizer(keys::FLOAT, FloatSanitizer)
            .add_sanitizer(keys::STRING, StringSanitizer);

        registry
    }

    /// Register a sanitizer instance under `key`, replacing any previous one
    ///
    /// # Example
    /// ```ignore
    /// registry.add_sanitizer("upper", |v: &Value| -> Result<Value, SanitizeError> {
    ///     Ok(Value::Str(StringSanitizer::render(v).to_uppercase()))
    /// });
    /// ```
    pub fn add_sanitizer(
        &mut self,
        key: impl Into<String>,
        sanitizer: impl Sanitizer + 'static,
    ) -> &mut Self {
        self.map.insert(key.into(), Box::new(sanitizer));
        self
    }

    /// Register a sanitizer by catalog type name.
    ///
    /// Unknown type names leave the registry unchanged.
    pub fn add_sanitizer_type(&mut self, key: impl Into<String>, type_name: &str) -> &mut Self {
        self.register_sanitizer(key, type_name);
        self
    }

    /// Register a sanitizer by catalog type name, reporting whether the type
    /// was known
    pub fn register_sanitizer(&mut self, key: impl Into<String>, type_name: &str) -> bool {
        let key = key.into();

        match self.catalog.build(type_name) {
            Some(sanitizer) => {
                self.map.insert(key, sanitizer);
                true
            }
            None => {
                log::debug!(
                    "Ignoring sanitizer registration for '{}': unknown type '{}'",
                    key,
                    type_name
                );
                false
            }
        }
    }

    pub fn has_sanitizer(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Run the sanitizer registered under `key`; unknown keys return the
    /// input unchanged
    pub fn sanitize(&self, input: &Value, key: &str) -> Result<Value, SanitizeError> {
        match self.map.get(key) {
            Some(sanitizer) => sanitizer.sanitize(input),
            None => {
                log::debug!(
                    "No sanitizer registered for '{}', passing {} through",
                    key,
                    input.type_name()
                );
                Ok(input.clone())
            }
        }
    }

    /// Sanitize through the `bool` key
    pub fn boolean(&self, input: &Value) -> Result<bool, SanitizeError> {
        self.sanitize(input, keys::BOOLEAN)
            .map(|v| BooleanSanitizer::coerce(&v))
    }

    /// Sanitize through the `int` key
    pub fn integer(&self, input: &Value) -> Result<i64, SanitizeError> {
        self.sanitize(input, keys::INTEGER)
            .map(|v| IntegerSanitizer::coerce(&v))
    }

    /// Sanitize through the `float` key
    pub fn float(&self, input: &Value) -> Result<f64, SanitizeError> {
        self.sanitize(input, keys::FLOAT)
            .map(|v| FloatSanitizer::coerce(&v))
    }

    /// Sanitize through the `string` key
    pub fn string(&self, input: &Value) -> Result<String, SanitizeError> {
        self.sanitize(input, keys::STRING).map(|v| match v {
            Value::Str(s) => s,
            other => StringSanitizer::render(&other),
        })
    }

    pub fn catalog(&self) -> &SanitizerCatalog {
        &self.catalog
    }

    /// Mutable access for registering additional sanitizer types
    pub fn catalog_mut(&mut self) -> &mut SanitizerCatalog {
        &mut self.catalog
    }

    /// Get the number of registered sanitizers
    pub fn sanitizer_count(&self) -> usize {
        self.map.len()
    }

    /// List all registered keys
    pub fn registered_keys(&self) -> Vec<&str> {
        self.map.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for SanitizerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SanitizerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys = self.registered_keys();
        keys.sort_unstable();
        f.debug_struct("SanitizerRegistry")
            .field("keys", &keys)
            .field("catalog", &self.catalog)
            .finish()
    }
}
