//! Conversions from serialized documents.

use crate::{ArrayValue, ObjectValue, Value, ValueError};

/// Integers beyond this magnitude lose precision as `f64`.
const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Parse a JSON document into a value tree.
pub fn from_json_str(src: &str) -> Result<Value, ValueError> {
    let json: serde_json::Value = serde_json::from_str(src)?;
    Ok(json.into())
}

/// Parse a TOML document into a value tree.
///
/// Datetimes become strings in their TOML spelling. Integers outside the
/// safe `f64` range become big integers.
pub fn from_toml_str(src: &str) -> Result<Value, ValueError> {
    let table: toml::Table = toml::from_str(src)?;
    Ok(toml::Value::Table(table).into())
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect::<ArrayValue>())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect::<ObjectValue>(),
            ),
        }
    }
}

impl From<toml::Value> for Value {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => Value::String(s),
            toml::Value::Integer(i) if i.unsigned_abs() <= MAX_SAFE_INTEGER => {
                Value::Number(i as f64)
            }
            toml::Value::Integer(i) => Value::BigInt(i128::from(i)),
            toml::Value::Float(f) => Value::Number(f),
            toml::Value::Boolean(b) => Value::Bool(b),
            toml::Value::Datetime(dt) => Value::String(dt.to_string()),
            toml::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect::<ArrayValue>())
            }
            toml::Value::Table(table) => Value::Object(
                table
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect::<ObjectValue>(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_import() {
        let value = from_json_str(r#"{"b": [1, "two", null], "a": true}"#).unwrap();
        let object = value.as_object().expect("object");
        assert_eq!(object.keys(), ["b", "a"]);

        let list = object.get("b").unwrap();
        let list = list.as_array().expect("array");
        assert!(list.is_dense());
        assert_eq!(list.len(), 3);
        assert!(matches!(list.get(2), Some(Value::Null)));
    }

    #[test]
    fn test_json_parse_error() {
        let err = from_json_str("{").unwrap_err();
        assert!(matches!(err, ValueError::Json(_)));
    }

    #[test]
    fn test_toml_import() {
        let value = from_toml_str(
            r#"
            name = "demo"
            big = 9007199254740993
            when = 1979-05-27

            [server]
            port = 8080
            "#,
        )
        .unwrap();
        let object = value.as_object().expect("object");

        assert!(matches!(object.get("name"), Some(Value::String(s)) if s == "demo"));
        assert!(matches!(object.get("big"), Some(Value::BigInt(9_007_199_254_740_993))));
        assert!(matches!(object.get("when"), Some(Value::String(s)) if s == "1979-05-27"));

        let server = object.get("server").unwrap();
        let port = server.as_object().and_then(|server| server.get("port"));
        assert!(matches!(port, Some(Value::Number(n)) if n == 8080.0));
    }
}
