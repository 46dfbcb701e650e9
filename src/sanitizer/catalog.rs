use super::{
    BooleanSanitizer, FloatSanitizer, IntegerSanitizer, JsonSanitizer, Sanitizer, StringSanitizer,
};
use std::collections::HashMap;

/// Constructor for a sanitizer type
pub type SanitizerFactory = fn() -> Box<dyn Sanitizer>;

fn construct<T: Sanitizer + Default + 'static>() -> Box<dyn Sanitizer> {
    Box::new(T::default())
}

/// Type-name -> constructor table used to instantiate sanitizers by name
#[derive(Clone)]
pub struct SanitizerCatalog {
    factories: HashMap<String, SanitizerFactory>,
}

impl SanitizerCatalog {
    /// Catalog pre-loaded with the built-in sanitizer types
    pub fn new() -> Self {
        let mut catalog = Self::empty();
        catalog
            .register::<BooleanSanitizer>(BooleanSanitizer::NAME)
            .register::<IntegerSanitizer>(IntegerSanitizer::NAME)
            .register::<FloatSanitizer>(FloatSanitizer::NAME)
            .register::<StringSanitizer>(StringSanitizer::NAME)
            .register::<JsonSanitizer>(JsonSanitizer::NAME);
        catalog
    }

    /// Catalog with no types at all
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a default-constructible sanitizer type under `type_name`
    pub fn register<T: Sanitizer + Default + 'static>(
        &mut self,
        type_name: impl Into<String>,
    ) -> &mut Self {
        self.register_factory(type_name, construct::<T>)
    }

    /// Register an explicit constructor under `type_name`
    pub fn register_factory(
        &mut self,
        type_name: impl Into<String>,
        factory: SanitizerFactory,
    ) -> &mut Self {
        self.factories.insert(type_name.into(), factory);
        self
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.factories.contains_key(type_name)
    }

    /// Instantiate the sanitizer registered under `type_name`
    pub fn build(&self, type_name: &str) -> Option<Box<dyn Sanitizer>> {
        self.factories.get(type_name).map(|factory| factory())
    }

    /// List all registered type names
    pub fn type_names(&self) -> Vec<&str> {
        self.factories.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for SanitizerCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SanitizerCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names = self.type_names();
        names.sort_unstable();
        f.debug_struct("SanitizerCatalog")
            .field("types", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_builtin_types_present() {
        let catalog = SanitizerCatalog::new();
        for name in ["boolean", "integer", "float", "string", "json"] {
            assert!(catalog.contains(name), "missing {}", name);
        }
        assert!(!catalog.contains("IntegerSanitizer"));
    }

    #[test]
    fn test_build_unknown_type() {
        let catalog = SanitizerCatalog::new();
        assert!(catalog.build("nope").is_none());
    }

    #[test]
    fn test_build_creates_working_sanitizer() {
        let catalog = SanitizerCatalog::new();
        let sanitizer = catalog.build("integer").unwrap();
        assert_eq!(sanitizer.sanitize(&Value::from("42")), Ok(Value::Int(42)));
    }

    #[test]
    fn test_empty_catalog() {
        let mut catalog = SanitizerCatalog::empty();
        assert!(catalog.type_names().is_empty());

        catalog.register::<StringSanitizer>("text");
        assert_eq!(catalog.type_names(), vec!["text"]);
    }
}
