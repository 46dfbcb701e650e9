use super::{Record, Value};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number};

/// Single-key object wrapping a record: `{"$record":{"fields":..,"display":..}}`
const RECORD_TAG: &str = "$record";
/// Single-key object wrapping a non-finite float: `{"$float":"inf"}`
const FLOAT_TAG: &str = "$float";

/// How decoded JSON objects are represented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ObjectMode {
    /// Objects become associative `Value::Map`s
    #[default]
    Map,
    /// Objects become field-only `Value::Record`s
    Record,
}

impl Value {
    /// Convert decoded JSON into a `Value`, shaping objects per `mode`
    pub fn from_json(json: serde_json::Value, mode: ObjectMode) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => number_to_value(&n),
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => Value::List(
                items
                    .into_iter()
                    .map(|item| Value::from_json(item, mode))
                    .collect(),
            ),
            serde_json::Value::Object(object) => {
                if let Some(value) = untag(&object, mode) {
                    return value;
                }

                let fields = object
                    .into_iter()
                    .map(|(k, v)| (k, Value::from_json(v, mode)))
                    .collect();

                match mode {
                    ObjectMode::Map => Value::Map(fields),
                    ObjectMode::Record => Value::Record(Record::from_fields(fields)),
                }
            }
        }
    }

    /// Render as a `serde_json::Value`. Records keep only their fields;
    /// non-finite floats become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::Number((*i).into()),
            Value::Float(f) => Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Str(s) => serde_json::Value::String(s.clone()),
            Value::List(items) => serde_json::Value::Array(items.iter().map(Value::to_json).collect()),
            Value::Map(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
            Value::Record(record) => serde_json::Value::Object(
                record
                    .fields()
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

impl Value {
    /// Render as self-describing JSON that [`Value::from_json`] reads back
    /// unchanged: records keep their display text and non-finite floats
    /// survive as tagged objects.
    pub fn to_tagged_json(&self) -> serde_json::Value {
        match self {
            Value::Float(f) if !f.is_finite() => {
                let name = if f.is_nan() {
                    "nan"
                } else if f.is_sign_positive() {
                    "inf"
                } else {
                    "-inf"
                };
                single(FLOAT_TAG, serde_json::Value::String(name.to_string()))
            }
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_tagged_json).collect())
            }
            Value::Map(map) => serde_json::Value::Object(tagged_fields(map)),
            Value::Record(record) => {
                let mut inner = Map::new();
                inner.insert(
                    "fields".to_string(),
                    serde_json::Value::Object(tagged_fields(record.fields())),
                );
                inner.insert(
                    "display".to_string(),
                    record
                        .display()
                        .map(|text| serde_json::Value::String(text.to_string()))
                        .unwrap_or(serde_json::Value::Null),
                );
                single(RECORD_TAG, serde_json::Value::Object(inner))
            }
            other => other.to_json(),
        }
    }
}

fn single(key: &str, value: serde_json::Value) -> serde_json::Value {
    let mut object = Map::new();
    object.insert(key.to_string(), value);
    serde_json::Value::Object(object)
}

fn tagged_fields(fields: &super::Parameters) -> Map<String, serde_json::Value> {
    fields
        .iter()
        .map(|(k, v)| (k.clone(), v.to_tagged_json()))
        .collect()
}

/// Decode a tagged record or float; `None` for ordinary objects
fn untag(object: &Map<String, serde_json::Value>, mode: ObjectMode) -> Option<Value> {
    if object.len() != 1 {
        return None;
    }

    if let Some(name) = object.get(FLOAT_TAG).and_then(serde_json::Value::as_str) {
        return match name {
            "inf" => Some(Value::Float(f64::INFINITY)),
            "-inf" => Some(Value::Float(f64::NEG_INFINITY)),
            "nan" => Some(Value::Float(f64::NAN)),
            _ => None,
        };
    }

    let inner = object.get(RECORD_TAG)?.as_object()?;
    let fields = inner.get("fields")?.as_object()?;
    let display = match inner.get("display") {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(text)) => Some(text.clone()),
        Some(_) => return None,
    };

    let fields = fields
        .iter()
        .map(|(k, v)| (k.clone(), Value::from_json(v.clone(), mode)))
        .collect();
    let record = Record::from_fields(fields);

    Some(Value::Record(match display {
        Some(text) => record.with_display(text),
        None => record,
    }))
}

fn number_to_value(n: &Number) -> Value {
    match n.as_i64() {
        Some(i) => Value::Int(i),
        None => Value::Float(n.as_f64().unwrap_or_default()),
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        Value::from_json(json, ObjectMode::Map)
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        value.to_json()
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Str(s) => serializer.serialize_str(s),
            Value::List(items) => items.serialize(serializer),
            Value::Map(map) => map.serialize(serializer),
            Value::Record(record) => record.fields().serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}
