//! Bridge between [`Value`] trees and `serde_json`.
//!
//! Parsing is delegated to `serde_json`; the resulting tree is then rebuilt
//! leaf by leaf so every unsigned numeral goes through the tree's own
//! unsigned slot and its validation.

use indexmap::IndexMap;
use serde_json::{Map, Number, Value as JsonValue};

use crate::error::ValueError;
use crate::types::ValueTypes;
use crate::unsigned::UnsignedNumber;
use crate::value::Value;

/// Parses JSON text into a `T`-typed tree.
pub fn from_str<T: ValueTypes>(text: &str) -> Result<Value<T>, ValueError> {
    let json: JsonValue = serde_json::from_str(text)?;
    from_json(&json)
}

/// Rebuilds a `serde_json` value as a `T`-typed tree.
///
/// Non-negative integers land in the unsigned slot, negative ones in the
/// integer slot, everything else in the float slot.
pub fn from_json<T: ValueTypes>(json: &JsonValue) -> Result<Value<T>, ValueError> {
    Ok(match json {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(T::Bool::from(*b)),
        JsonValue::Number(n) => number_from_json(n)?,
        JsonValue::String(s) => Value::String(T::Str::from(s.clone())),
        JsonValue::Array(items) => Value::Array(
            items
                .iter()
                .map(from_json::<T>)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        JsonValue::Object(map) => {
            let mut out = IndexMap::with_capacity(map.len());
            for (key, item) in map {
                out.insert(key.clone(), from_json(item)?);
            }
            Value::Object(out)
        }
    })
}

fn number_from_json<T: ValueTypes>(n: &Number) -> Result<Value<T>, ValueError> {
    if let Some(u) = n.as_u64() {
        return Value::unsigned(u).inspect_err(|err| {
            tracing::debug!(value = u, %err, "numeral rejected by unsigned slot");
        });
    }
    if let Some(i) = n.as_i64() {
        return Ok(Value::Integer(T::Integer::from(i)));
    }
    match n.as_f64() {
        Some(f) => Ok(Value::Float(T::Float::from(f))),
        None => Err(ValueError::OutOfRange {
            value: n.to_string(),
            target: "f64",
        }),
    }
}

/// Converts a tree to a `serde_json` value.
pub fn to_json<T: ValueTypes>(value: &Value<T>) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool((*b).into()),
        Value::Integer(n) => JsonValue::from(Into::<i64>::into(*n)),
        Value::Unsigned(n) => JsonValue::from(n.to_u64()),
        Value::Float(n) => Number::from_f64((*n).into())
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        Value::String(s) => JsonValue::String(s.as_ref().to_owned()),
        Value::Array(items) => JsonValue::Array(items.iter().map(to_json).collect()),
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, item) in map {
                out.insert(key.clone(), to_json(item));
            }
            JsonValue::Object(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DefaultTypes;
    use serde_json::json;

    #[test]
    fn numbers_pick_their_slot() {
        let doc: Value<DefaultTypes> = from_json(&json!([1, -1, 1.5])).unwrap();
        assert_eq!(doc.at(0), Some(&Value::Unsigned(1)));
        assert_eq!(doc.at(1), Some(&Value::Integer(-1)));
        assert_eq!(doc.at(2), Some(&Value::Float(1.5)));
    }

    #[test]
    fn object_order_survives_both_directions() {
        let src = json!({"z": 1, "a": {"m": [true, null]}, "k": "v"});
        let doc: Value<DefaultTypes> = from_json(&src).unwrap();
        assert_eq!(to_json(&doc), src);
        assert_eq!(doc.to_string(), r#"{"z":1,"a":{"m":[true,null]},"k":"v"}"#);
    }

    #[test]
    fn invalid_text_is_a_parse_error() {
        let err = from_str::<DefaultTypes>("{").unwrap_err();
        assert!(matches!(err, ValueError::Parse(_)));
    }
}
