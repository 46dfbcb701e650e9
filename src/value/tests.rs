use super::*;
use serde_json::json;

#[test]
fn test_type_names() {
    assert_eq!(Value::Null.type_name(), "null");
    assert_eq!(Value::from(true).type_name(), "bool");
    assert_eq!(Value::from(7).type_name(), "int");
    assert_eq!(Value::from(1.5).type_name(), "float");
    assert_eq!(Value::from("x").type_name(), "string");
    assert_eq!(Value::from(vec![1, 2]).type_name(), "list");
    assert_eq!(Value::Map(Parameters::new()).type_name(), "map");
    assert_eq!(Value::from(Record::new()).type_name(), "record");
}

#[test]
fn test_option_conversion() {
    assert_eq!(Value::from(None::<i32>), Value::Null);
    assert_eq!(Value::from(Some("a")), Value::Str("a".to_string()));
}

#[test]
fn test_from_json_numbers() {
    let value = Value::from(json!([1, 2.5, -3]));
    assert_eq!(
        value,
        Value::List(vec![Value::Int(1), Value::Float(2.5), Value::Int(-3)])
    );
}

#[test]
fn test_from_json_objects_as_map() {
    let value = Value::from_json(json!({"testing": "values"}), ObjectMode::Map);
    let map = value.as_map().unwrap();
    assert_eq!(map.get("testing"), Some(&Value::from("values")));
}

#[test]
fn test_from_json_objects_as_record() {
    let value = Value::from_json(json!({"a": 1, "b": {"c": 2}}), ObjectMode::Record);
    let record = value.as_record().unwrap();
    assert_eq!(record.field_count(), 2);
    assert!(record.display().is_none());
    assert!(record.field("b").unwrap().as_record().is_some());
}

#[test]
fn test_record_serializes_fields_only() {
    let record = Record::new()
        .with_field("one", 1)
        .with_field("two", "2")
        .with_display("ignored");

    let text = serde_json::to_string(&Value::from(record)).unwrap();
    assert_eq!(text, r#"{"one":1,"two":"2"}"#);
}

#[test]
fn test_non_finite_float_to_json_is_null() {
    assert_eq!(Value::Float(f64::NAN).to_json(), serde_json::Value::Null);
}

#[test]
fn test_deserialize_nested() {
    let value: Value = serde_json::from_str(r#"{"list":[true,null],"n":4}"#).unwrap();
    let map = value.as_map().unwrap();
    assert_eq!(
        map.get("list"),
        Some(&Value::List(vec![Value::Bool(true), Value::Null]))
    );
    assert_eq!(map.get("n").and_then(Value::as_i64), Some(4));
}

#[test]
fn test_as_f64_widens_ints() {
    assert_eq!(Value::Int(3).as_f64(), Some(3.0));
    assert_eq!(Value::from("3").as_f64(), None);
}
