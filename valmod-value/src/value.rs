//! The dynamic value type.

use std::fmt;

use crate::{ArrayValue, ObjectValue, equality::deep_eq};

/// A value from the host runtime.
///
/// Scalars are stored inline. Arrays and objects are reference-counted
/// handles, so the same container may appear in several places of a graph.
#[derive(Clone)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    /// Arbitrary precision integers are not needed by any import path, an
    /// `i128` covers every value the importers produce.
    BigInt(i128),
    String(String),
    Array(ArrayValue),
    Object(ObjectValue),
    /// A function, optionally named. Has no literal form.
    Function(Option<String>),
    /// A symbol with an optional description. Has no literal form.
    Symbol(Option<String>),
    /// Any other host object, identified by its type name.
    Opaque(String),
}

impl Value {
    /// A short name for the kind of value, as used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Function(_) => "function",
            Value::Symbol(_) => "symbol",
            Value::Opaque(_) => "host object",
        }
    }

    /// Returns true for arrays and objects.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Object(_))
    }

    pub fn as_array(&self) -> Option<&ArrayValue> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }
}

/// Structural equality, see [`deep_eq`].
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        deep_eq(self, other)
    }
}

// Containers print shallowly; a derived impl would recurse forever on cycles.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Number(n) => write!(f, "Number({n:?})"),
            Value::BigInt(n) => write!(f, "BigInt({n})"),
            Value::String(s) => write!(f, "String({s:?})"),
            Value::Array(array) => write!(f, "{array:?}"),
            Value::Object(object) => write!(f, "{object:?}"),
            Value::Function(name) => write!(f, "Function({name:?})"),
            Value::Symbol(desc) => write!(f, "Symbol({desc:?})"),
            Value::Opaque(ty) => write!(f, "Opaque({ty})"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<ArrayValue> for Value {
    fn from(array: ArrayValue) -> Self {
        Value::Array(array)
    }
}

impl From<ObjectValue> for Value {
    fn from(object: ObjectValue) -> Self {
        Value::Object(object)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
