// Public API exports
pub mod files;
pub mod params;
pub mod sanitizer;
pub mod status;
pub mod value;

// Re-export main types for convenience
pub use value::{ObjectMode, Parameters, Record, Value};

pub use sanitizer::{
    keys, BooleanSanitizer, FloatSanitizer, IntegerSanitizer, JsonSanitizer, SanitizeError,
    Sanitizer, SanitizerCatalog, SanitizerFactory, SanitizerRegistry, StringSanitizer,
};

pub use params::{MutableParameterBag, ParamError, ParameterBag};

pub use status::{Results, ReturnHelper, Status};

pub use files::{FileError, FileHelper, LogFileAppender, OutputFormat, WriteMode};
