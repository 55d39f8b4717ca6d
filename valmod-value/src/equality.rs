//! Structural equality over value graphs.

use std::collections::HashSet;

use crate::Value;

/// Compare two values structurally.
///
/// Numbers compare like `Object.is`: `NaN` equals `NaN` and `0` differs
/// from `-0`. Arrays must agree on length, hole positions, elements and
/// extra properties (including order); objects on keys (including order)
/// and values. Identity is not compared, so a shared sub-value equals two
/// separate copies of it. Cyclic graphs are supported: a pair of containers
/// already under comparison is assumed equal.
pub fn deep_eq(a: &Value, b: &Value) -> bool {
    DeepEq::default().eq(a, b)
}

#[derive(Default)]
struct DeepEq {
    assumed: HashSet<(usize, usize)>,
}

impl DeepEq {
    fn eq(&mut self, a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(x), Value::Bool(y)) => x == y,
            (Value::Number(x), Value::Number(y)) => {
                (x.is_nan() && y.is_nan()) || x.to_bits() == y.to_bits()
            }
            (Value::BigInt(x), Value::BigInt(y)) => x == y,
            (Value::String(x), Value::String(y)) => x == y,
            (Value::Function(x), Value::Function(y)) | (Value::Symbol(x), Value::Symbol(y)) => {
                x == y
            }
            (Value::Opaque(x), Value::Opaque(y)) => x == y,
            (Value::Array(x), Value::Array(y)) => {
                if !self.assumed.insert((x.id(), y.id())) {
                    return true;
                }
                x.len() == y.len()
                    && self.entries_eq(&x.elements(), &y.elements())
                    && self.entries_eq(&x.properties(), &y.properties())
            }
            (Value::Object(x), Value::Object(y)) => {
                if !self.assumed.insert((x.id(), y.id())) {
                    return true;
                }
                self.entries_eq(&x.entries(), &y.entries())
            }
            _ => false,
        }
    }

    fn entries_eq<K: PartialEq>(&mut self, a: &[(K, Value)], b: &[(K, Value)]) -> bool {
        a.len() == b.len()
            && a
                .iter()
                .zip(b)
                .all(|((ka, va), (kb, vb))| ka == kb && self.eq(va, vb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArrayValue, ObjectValue};

    #[test]
    fn test_numbers() {
        assert!(deep_eq(&Value::Number(f64::NAN), &Value::Number(f64::NAN)));
        assert!(!deep_eq(&Value::Number(0.0), &Value::Number(-0.0)));
        assert!(deep_eq(&Value::Number(1.5), &Value::Number(1.5)));
        assert!(!deep_eq(&Value::Number(1.0), &Value::BigInt(1)));
    }

    #[test]
    fn test_holes_differ_from_undefined() {
        let holey = ArrayValue::with_length(1);
        let filled = ArrayValue::from_elements([Value::Undefined]);
        assert!(!deep_eq(&holey.into(), &filled.into()));
    }

    #[test]
    fn test_trailing_holes_count() {
        let short = ArrayValue::from_elements([1]);
        let long = ArrayValue::from_elements([1]);
        long.set_length(3);
        assert!(!deep_eq(&short.into(), &long.into()));
    }

    #[test]
    fn test_key_order_matters() {
        let a = ObjectValue::new().with("x", 1).with("y", 2);
        let b = ObjectValue::new().with("y", 2).with("x", 1);
        assert!(!deep_eq(&a.into(), &b.into()));
    }

    #[test]
    fn test_shared_equals_copies() {
        let inner = ArrayValue::from_elements([1, 2]);
        let shared = ArrayValue::from_elements([inner.clone(), inner]);
        let copies = ArrayValue::from_elements([
            ArrayValue::from_elements([1, 2]),
            ArrayValue::from_elements([1, 2]),
        ]);
        assert_eq!(Value::from(shared), Value::from(copies));
    }

    #[test]
    fn test_cycles_terminate() {
        let a = ArrayValue::new();
        a.push(a.clone());
        let b = ArrayValue::new();
        b.push(b.clone());
        assert!(deep_eq(&a.into(), &b.into()));
    }
}
