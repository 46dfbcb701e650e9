//! Typed access to a raw key/value mapping.
//!
//! [`ParameterBag`] is immutable: the `with_*`/`without_*` methods return a
//! modified copy and leave the original untouched. [`MutableParameterBag`]
//! edits its mapping in place.

mod error;
mod mutable;


pub use error::ParamError;
pub use mutable::MutableParameterBag;

use crate::sanitizer::{keys, JsonSanitizer, SanitizeError, SanitizerRegistry};
use crate::value::{ObjectMode, Parameters, Value};
use std::sync::Arc;

/// Collection of parameters served as typed values
#[derive(Debug, Clone)]
pub struct ParameterBag {
    /// Current parameters
    params: Parameters,
    /// Mapping the bag was created from
    source: Parameters,
    /// Shared sanitizer registry
    sanitizers: Arc<SanitizerRegistry>,
}

impl ParameterBag {
    /// Create a bag backed by a fresh default registry
    pub fn new(params: Parameters) -> Self {
        Self::with_registry(params, Arc::new(SanitizerRegistry::new()))
    }

    /// Create a bag that sanitizes through a shared registry
    pub fn with_registry(params: Parameters, sanitizers: Arc<SanitizerRegistry>) -> Self {
        Self {
            source: params.clone(),
            params,
            sanitizers,
        }
    }

    /// Decode a JSON object into a bag. Any other JSON shape is rejected.
    pub fn from_json(text: &str, sanitizers: Arc<SanitizerRegistry>) -> Result<Self, ParamError> {
        let json: serde_json::Value =
            serde_json::from_str(text).map_err(|e| ParamError::Json(e.to_string()))?;
        let params = into_parameters(Value::from(json))?;

        Ok(Self::with_registry(params, sanitizers))
    }

    /// Number of stored parameters
    pub fn count(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Check if a parameter exists
    pub fn has(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Check that every key exists
    pub fn has_all(&self, keys: &[&str]) -> bool {
        keys.iter().all(|key| self.params.contains_key(*key))
    }

    /// Look up a parameter.
    ///
    /// - absent key: `default`
    /// - present, `sanitizer` names a registered sanitizer: the sanitized value
    /// - otherwise: the raw value
    ///
    /// Sanitizer failures fall back to `default`; use [`try_get`](Self::try_get)
    /// to see them.
    pub fn get(&self, key: &str, default: Option<Value>, sanitizer: Option<&str>) -> Option<Value> {
        match self.try_get(key, sanitizer) {
            Ok(Some(value)) => Some(value),
            Ok(None) => default,
            Err(e) => {
                log::warn!("Sanitizing parameter '{}' failed: {}", key, e);
                default
            }
        }
    }

    /// Like [`get`](Self::get) without a default, surfacing sanitizer errors
    pub fn try_get(&self, key: &str, sanitizer: Option<&str>) -> Result<Option<Value>, SanitizeError> {
        let Some(raw) = self.params.get(key) else {
            return Ok(None);
        };

        match sanitizer {
            Some(name) if self.sanitizers.has_sanitizer(name) => {
                self.sanitizers.sanitize(raw, name).map(Some)
            }
            _ => Ok(Some(raw.clone())),
        }
    }

    /// The whole backing mapping (a `get` with no key)
    pub fn get_all(&self) -> &Parameters {
        &self.params
    }

    /// Parameter sanitized through the `bool` key
    pub fn get_bool(&self, key: &str, default: Option<bool>) -> Option<bool> {
        self.typed(key, default, keys::BOOLEAN, |r, v| r.boolean(v))
    }

    /// Parameter sanitized through the `int` key
    pub fn get_int(&self, key: &str, default: Option<i64>) -> Option<i64> {
        self.typed(key, default, keys::INTEGER, |r, v| r.integer(v))
    }

    /// Parameter sanitized through the `float` key
    pub fn get_float(&self, key: &str, default: Option<f64>) -> Option<f64> {
        self.typed(key, default, keys::FLOAT, |r, v| r.float(v))
    }

    /// Parameter sanitized through the `string` key
    pub fn get_string(&self, key: &str, default: Option<String>) -> Option<String> {
        self.typed(key, default, keys::STRING, |r, v| r.string(v))
    }

    /// Parameter decoded as JSON text. Objects become maps when `as_map` is
    /// set, records otherwise. Decode failures and a decoded `null` return
    /// `default`.
    pub fn get_json(&self, key: &str, as_map: bool, default: Option<Value>) -> Option<Value> {
        let Some(raw) = self.params.get(key) else {
            return default;
        };

        let objects = if as_map {
            ObjectMode::Map
        } else {
            ObjectMode::Record
        };

        match JsonSanitizer::with_objects(objects).decode(raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::debug!("Parameter '{}' is not valid JSON: {}", key, e);
                default
            }
        }
    }

    /// Mapping the bag was originally constructed from
    pub fn source(&self) -> &Parameters {
        &self.source
    }

    pub fn registry(&self) -> &Arc<SanitizerRegistry> {
        &self.sanitizers
    }

    /// Copy of this bag with `key` set to `value`
    pub fn with_parameter(&self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut new = self.clone();
        new.params.insert(key.into(), value.into());
        new
    }

    /// Copy of this bag with every entry of `params` set
    pub fn with_parameters<K, V>(&self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let mut new = self.clone();
        new.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        new
    }

    /// Copy of this bag without `key`
    pub fn without_parameter(&self, key: &str) -> Self {
        let mut new = self.clone();
        new.params.remove(key);
        new
    }

    /// Copy of this bag without any of `keys`
    pub fn without_parameters(&self, keys: &[&str]) -> Self {
        let mut new = self.clone();
        for key in keys {
            new.params.remove(*key);
        }
        new
    }

    fn typed<T>(
        &self,
        key: &str,
        default: Option<T>,
        sanitizer: &str,
        coerce: impl FnOnce(&SanitizerRegistry, &Value) -> Result<T, SanitizeError>,
    ) -> Option<T> {
        let Some(raw) = self.params.get(key) else {
            return default;
        };

        match coerce(&self.sanitizers, raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!(
                    "Sanitizing parameter '{}' with '{}' failed: {}",
                    key,
                    sanitizer,
                    e
                );
                default
            }
        }
    }
}

impl Default for ParameterBag {
    fn default() -> Self {
        Self::new(Parameters::new())
    }
}

impl TryFrom<Value> for ParameterBag {
    type Error = ParamError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        into_parameters(value).map(Self::new)
    }
}

impl From<Parameters> for ParameterBag {
    fn from(params: Parameters) -> Self {
        Self::new(params)
    }
}

/// Accept only mapping-shaped values as parameter sets
fn into_parameters(value: Value) -> Result<Parameters, ParamError> {
    match value {
        Value::Map(map) => Ok(map),
        Value::Record(record) => Ok(record.into_fields()),
        other => Err(ParamError::NotAMapping(other.type_name())),
    }
}
