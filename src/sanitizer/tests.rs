use super::*;
use crate::value::{ObjectMode, Parameters, Record};

fn test_object() -> Value {
    Record::new()
        .with_field("one", Value::Null)
        .with_field("two", Value::Null)
        .with_display("test_string")
        .into()
}

/// Keeps only the `class` and `style` entries of a map
#[derive(Default)]
struct StripArrayProperties;

impl Sanitizer for StripArrayProperties {
    fn sanitize(&self, input: &Value) -> Result<Value, SanitizeError> {
        let kept = input
            .as_map()
            .map(|map| {
                map.iter()
                    .filter(|(name, _)| matches!(name.as_str(), "class" | "style"))
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect()
            })
            .unwrap_or_default();

        Ok(Value::Map(kept))
    }
}

// ========================================================================
// Boolean
// ========================================================================

#[test]
fn test_boolean_strings() {
    assert!(BooleanSanitizer::coerce(&Value::from("TRUE")));
    assert!(BooleanSanitizer::coerce(&Value::from("true")));
    assert!(!BooleanSanitizer::coerce(&Value::from("false")));
    assert!(!BooleanSanitizer::coerce(&Value::from("yes")));
    assert!(!BooleanSanitizer::coerce(&Value::from("1")));
}

#[test]
fn test_boolean_truthiness() {
    let cases = vec![
        (Value::Bool(false), false),
        (Value::Bool(true), true),
        (Value::Int(0), false),
        (Value::Int(1), true),
        (Value::Float(0.0), false),
        (Value::Float(-0.5), true),
        (Value::Null, false),
        (Value::List(vec![]), false),
        (Value::from(vec!["one", "two"]), true),
        (Value::Map(Parameters::new()), false),
        (Value::from(Record::new()), true),
    ];

    for (input, expected) in cases {
        assert_eq!(
            BooleanSanitizer.sanitize(&input),
            Ok(Value::Bool(expected)),
            "Failed for {:?}",
            input
        );
    }
}

// ========================================================================
// Integer
// ========================================================================

#[test]
fn test_integer_rules() {
    let cases = vec![
        (test_object(), 2),
        (Value::List(vec![]), 0),
        (Value::from(vec![1, 2, 3]), 3),
        (Value::Bool(true), 1),
        (Value::Bool(false), 0),
        (Value::from("string"), 6),
        (Value::from("abc"), 3),
        (Value::from("42"), 42),
        (Value::from("3.14"), 3),
        (Value::from("3.1.4"), 3),
        (Value::from("-5"), 2),
        (Value::from(""), 0),
        (Value::Int(42), 42),
        (Value::Float(3.7), 4),
        (Value::Float(2.5), 3),
        (Value::Float(-2.5), -3),
        (Value::Null, 0),
    ];

    for (input, expected) in cases {
        assert_eq!(
            IntegerSanitizer::coerce(&input),
            expected,
            "Failed for {:?}",
            input
        );
    }
}

#[test]
fn test_integer_length_counts_chars() {
    assert_eq!(IntegerSanitizer::coerce(&Value::from("héllo")), 5);
}

#[test]
fn test_integer_extreme_floats() {
    assert_eq!(IntegerSanitizer::coerce(&Value::Float(f64::NAN)), 0);
    assert_eq!(IntegerSanitizer::coerce(&Value::Float(1e300)), i64::MAX);
}

// ========================================================================
// Float
// ========================================================================

#[test]
fn test_float_rules() {
    let cases = vec![
        (test_object(), 2.0),
        (Value::List(vec![]), 0.0),
        (Value::from(vec![1, 2, 3]), 3.0),
        (Value::Bool(true), 1.0),
        (Value::Bool(false), 0.0),
        (Value::from("string"), 6.0),
        (Value::from("42"), 42.0),
        (Value::from("3.14"), 3.14),
        (Value::Float(6.66), 6.66),
        (Value::Int(7), 7.0),
    ];

    for (input, expected) in cases {
        assert_eq!(
            FloatSanitizer.sanitize(&input),
            Ok(Value::Float(expected)),
            "Failed for {:?}",
            input
        );
    }
}

// ========================================================================
// String
// ========================================================================

#[test]
fn test_string_rules() {
    assert_eq!(StringSanitizer::render(&test_object()), "test_string");
    assert_eq!(StringSanitizer::render(&Value::from(Record::new())), "");
    assert_eq!(StringSanitizer::render(&Value::Bool(true)), "true");
    assert_eq!(StringSanitizer::render(&Value::Bool(false)), "false");
    assert_eq!(StringSanitizer::render(&Value::Int(42)), "42");
    assert_eq!(StringSanitizer::render(&Value::Float(3.14)), "3.14");
    assert_eq!(StringSanitizer::render(&Value::Float(1.0)), "1");
    assert_eq!(StringSanitizer::render(&Value::Null), "");
    assert_eq!(
        StringSanitizer::render(&Value::from("actual_string")),
        "actual_string"
    );
}

#[test]
fn test_string_serializes_sequences() {
    assert_eq!(StringSanitizer::render(&Value::List(vec![])), "[]");
    assert_eq!(
        StringSanitizer::render(&Value::from(vec![1, 2])),
        "[1,2]"
    );
}

#[test]
fn test_string_output_reads_back_through_json() {
    let mut map = Parameters::new();
    map.insert("b".to_string(), Value::from(vec![true, false]));
    map.insert("a".to_string(), Value::Float(1.5));
    let original = Value::Map(map);

    let text = StringSanitizer.sanitize(&original).unwrap();
    assert_eq!(JsonSanitizer::new().sanitize(&text), Ok(original));
}

#[test]
fn test_string_output_keeps_records_in_list() {
    let original = Value::List(vec![test_object(), Value::Int(1)]);

    let text = StringSanitizer.sanitize(&original).unwrap();
    assert_eq!(JsonSanitizer::new().sanitize(&text), Ok(original.clone()));
    assert_eq!(
        JsonSanitizer::with_objects(ObjectMode::Record).sanitize(&text),
        Ok(original)
    );
}

#[test]
fn test_string_output_keeps_records_in_map() {
    let mut map = Parameters::new();
    map.insert("obj".to_string(), test_object());
    map.insert(
        "plain".to_string(),
        Value::from(Record::new().with_field("x", 1)),
    );
    let original = Value::Map(map);

    let text = StringSanitizer.sanitize(&original).unwrap();
    let decoded = JsonSanitizer::new().sanitize(&text).unwrap();

    assert_eq!(decoded, original);
    let obj = decoded.as_map().and_then(|m| m.get("obj")).unwrap();
    assert_eq!(obj.as_record().and_then(Record::display), Some("test_string"));
}

#[test]
fn test_string_output_keeps_non_finite_floats() {
    let original = Value::List(vec![
        Value::Float(f64::INFINITY),
        Value::Float(f64::NEG_INFINITY),
        Value::Float(2.5),
    ]);

    let text = StringSanitizer.sanitize(&original).unwrap();
    assert_eq!(JsonSanitizer::new().sanitize(&text), Ok(original));

    let nan = StringSanitizer.sanitize(&Value::List(vec![Value::Float(f64::NAN)])).unwrap();
    let decoded = JsonSanitizer::new().sanitize(&nan).unwrap();
    assert!(decoded.as_list().and_then(|l| l[0].as_f64()).unwrap().is_nan());
}

// ========================================================================
// Json
// ========================================================================

#[test]
fn test_json_decodes_to_map_by_default() {
    let decoded = JsonSanitizer::new()
        .sanitize(&Value::from(r#"{"testing":"values"}"#))
        .unwrap();

    assert_eq!(
        decoded.as_map().and_then(|m| m.get("testing")),
        Some(&Value::from("values"))
    );
}

#[test]
fn test_json_decodes_to_record() {
    let decoded = JsonSanitizer::with_objects(ObjectMode::Record)
        .sanitize(&Value::from(r#"{"a":1,"b":2}"#))
        .unwrap();

    assert_eq!(decoded.as_record().map(Record::field_count), Some(2));
}

#[test]
fn test_json_failure_carries_message() {
    let err = JsonSanitizer::new()
        .sanitize(&Value::from("{not json"))
        .unwrap_err();

    match err {
        SanitizeError::Json(message) => assert!(!message.is_empty()),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_json_rejects_empty_input() {
    assert!(JsonSanitizer::new().sanitize(&Value::Null).is_err());
    assert!(JsonSanitizer::new().sanitize(&Value::from("")).is_err());
}

#[test]
fn test_json_null_is_an_error() {
    assert_eq!(
        JsonSanitizer::new().sanitize(&Value::from("null")),
        Err(SanitizeError::Json(GENERIC_JSON_ERROR.to_string()))
    );
    assert_eq!(
        JsonSanitizer::new().sanitize(&Value::from("[null]")),
        Ok(Value::List(vec![Value::Null]))
    );
}

#[test]
fn test_json_scalars() {
    assert_eq!(JsonSanitizer::new().sanitize(&Value::Int(42)), Ok(Value::Int(42)));
    assert_eq!(
        JsonSanitizer::new().sanitize(&Value::Bool(true)),
        Ok(Value::Bool(true))
    );
}

#[test]
fn test_json_error_generic_message() {
    assert_eq!(
        SanitizeError::json("  "),
        SanitizeError::Json(GENERIC_JSON_ERROR.to_string())
    );
}

// ========================================================================
// Registry dispatch
// ========================================================================

#[test]
fn test_registry_custom_sanitizer() {
    let mut registry = SanitizerRegistry::new();
    registry.add_sanitizer("strip_array_properties", StripArrayProperties);

    let input: Value = serde_json::json!({
        "class": "awesome",
        "style": "great",
        "attr": "none"
    })
    .into();

    let output = registry
        .sanitize(&input, "strip_array_properties")
        .unwrap();
    let map = output.as_map().unwrap();

    assert_eq!(map.len(), 2);
    assert!(map.contains_key("class"));
    assert!(map.contains_key("style"));
    assert!(!map.contains_key("attr"));
}

#[test]
fn test_registry_custom_type_via_catalog() {
    let mut registry = SanitizerRegistry::new();
    registry
        .catalog_mut()
        .register::<StripArrayProperties>("StripArrayProperties");

    assert!(registry.register_sanitizer("strip", "StripArrayProperties"));
    assert!(registry.has_sanitizer("strip"));
}

#[test]
fn test_registry_closure_sanitizer() {
    let mut registry = SanitizerRegistry::new();
    registry.add_sanitizer("upper", |v: &Value| -> Result<Value, SanitizeError> {
        Ok(Value::Str(StringSanitizer::render(v).to_uppercase()))
    });

    assert_eq!(
        registry.sanitize(&Value::from("abc"), "upper"),
        Ok(Value::from("ABC"))
    );
}

#[test]
fn test_registry_typed_shortcuts() {
    let registry = SanitizerRegistry::new();

    assert_eq!(registry.boolean(&Value::from("TRUE")), Ok(true));
    assert_eq!(registry.boolean(&Value::from("yes")), Ok(false));
    assert_eq!(registry.integer(&Value::from("abc")), Ok(3));
    assert_eq!(registry.integer(&Value::from(vec![1, 2, 3])), Ok(3));
    assert_eq!(registry.float(&Value::from("3.14")), Ok(3.14));
    assert_eq!(registry.string(&Value::Int(42)), Ok("42".to_string()));
}

#[test]
fn test_registry_overridden_default() {
    let mut registry = SanitizerRegistry::new();
    registry.add_sanitizer(keys::INTEGER, |_: &Value| -> Result<Value, SanitizeError> {
        Ok(Value::from("7"))
    });

    // Result of the override is coerced with the built-in integer rule
    assert_eq!(registry.integer(&Value::Null), Ok(7));
    assert_eq!(registry.sanitizer_count(), 4);
}
