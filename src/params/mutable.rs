use super::ParameterBag;
use crate::sanitizer::SanitizerRegistry;
use crate::value::{Parameters, Value};
use std::ops::Deref;
use std::sync::Arc;

/// Parameter bag for groups of parameters that change in place
#[derive(Debug, Clone, Default)]
pub struct MutableParameterBag {
    inner: ParameterBag,
}

impl MutableParameterBag {
    pub fn new(params: Parameters) -> Self {
        Self {
            inner: ParameterBag::new(params),
        }
    }

    pub fn with_registry(params: Parameters, sanitizers: Arc<SanitizerRegistry>) -> Self {
        Self {
            inner: ParameterBag::with_registry(params, sanitizers),
        }
    }

    /// Set a key/value pair
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.inner.params.insert(key.into(), value.into());
        self
    }

    /// Set several key/value pairs
    pub fn add_values<K, V>(&mut self, params: impl IntoIterator<Item = (K, V)>) -> &mut Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        for (key, value) in params {
            self.add(key, value);
        }
        self
    }

    /// Remove a key/value pair if present
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.inner.params.remove(key);
        self
    }

    /// Remove every parameter
    pub fn clear(&mut self) -> &mut Self {
        self.inner.params.clear();
        self
    }

    /// Stop mutating and hand back an immutable bag
    pub fn freeze(self) -> ParameterBag {
        self.inner
    }
}

impl Deref for MutableParameterBag {
    type Target = ParameterBag;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl From<ParameterBag> for MutableParameterBag {
    fn from(inner: ParameterBag) -> Self {
        Self { inner }
    }
}
