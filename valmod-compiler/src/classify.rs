//! Value classification.

use valmod_value::{ArrayValue, ObjectValue, Value};

/// A scalar that is always written inline.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(i128),
    String(String),
}

/// The closed set of shapes the compiler knows how to handle.
#[derive(Debug, Clone)]
pub enum Variant<'a> {
    Primitive(Primitive),
    Array(&'a ArrayValue),
    Object(&'a ObjectValue),
    /// No literal form exists; the label names the kind for diagnostics.
    Unsupported(&'static str),
}

/// Classify a value. Pure: the same value always yields the same variant.
pub fn classify(value: &Value) -> Variant<'_> {
    match value {
        Value::Undefined => Variant::Primitive(Primitive::Undefined),
        Value::Null => Variant::Primitive(Primitive::Null),
        Value::Bool(b) => Variant::Primitive(Primitive::Bool(*b)),
        Value::Number(n) => Variant::Primitive(Primitive::Number(*n)),
        Value::BigInt(n) => Variant::Primitive(Primitive::BigInt(*n)),
        Value::String(s) => Variant::Primitive(Primitive::String(s.clone())),
        Value::Array(array) => Variant::Array(array),
        Value::Object(object) => Variant::Object(object),
        Value::Function(_) | Value::Symbol(_) | Value::Opaque(_) => {
            Variant::Unsupported(value.type_name())
        }
    }
}
