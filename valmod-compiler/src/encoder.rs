//! Literal encoding.
//!
//! Turns primitives into JavaScript literals and arranges already-encoded
//! pieces into container literals and member expressions. Whether a
//! container may be written inline is decided by the emitter; nothing here
//! looks at the graph.

use std::fmt::Write;

use valmod_codegen::js::{JsArray, JsObject, is_identifier_name};

use crate::{Primitive, Segment};

/// Key that must never be written as a plain property name.
pub(crate) const PROTO_KEY: &str = "__proto__";

/// Encode a primitive as a literal expression.
pub fn primitive(value: &Primitive) -> String {
    match value {
        Primitive::Undefined => "undefined".to_string(),
        Primitive::Null => "null".to_string(),
        Primitive::Bool(b) => b.to_string(),
        Primitive::Number(n) => number(*n),
        Primitive::BigInt(n) => format!("{}n", n),
        Primitive::String(s) => string(s),
    }
}

/// Encode a number with the shortest text that reads back to the same
/// `f64`. Uses exponent notation where JavaScript itself would.
pub fn number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return if n.is_sign_negative() { "-0" } else { "0" }.to_string();
    }
    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        format!("{:e}", n)
    } else {
        format!("{}", n)
    }
}

/// Encode a string as a double-quoted literal.
pub fn string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{b}' => out.push_str("\\v"),
            '\u{c}' => out.push_str("\\f"),
            // `\0` followed by a digit would read as a legacy octal escape.
            '\0' if chars.peek().is_some_and(|next| next.is_ascii_digit()) => {
                out.push_str("\\x00")
            }
            '\0' => out.push_str("\\0"),
            '\u{2028}' | '\u{2029}' => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Encode a key for use inside an object literal.
pub fn object_key(key: &str) -> String {
    if key == PROTO_KEY {
        // A literal `__proto__:` would set the prototype instead.
        format!("[{}]", string(key))
    } else if is_identifier_name(key) {
        key.to_string()
    } else {
        string(key)
    }
}

/// Member expression addressing a slot of `object`.
pub fn member(object: &str, slot: &Segment) -> String {
    match slot {
        Segment::Index(index) => format!("{}[{}]", object, index),
        Segment::Key(key) if is_identifier_name(key) => format!("{}.{}", object, key),
        Segment::Key(key) => format!("{}[{}]", object, string(key)),
    }
}

/// Arrange encoded elements into an array literal.
pub fn array_literal(elements: impl IntoIterator<Item = String>) -> String {
    elements.into_iter().collect::<JsArray>().build()
}

/// Arrange raw keys and encoded values into an object literal.
pub fn object_literal<'a>(entries: impl IntoIterator<Item = (&'a str, String)>) -> String {
    entries
        .into_iter()
        .map(|(key, value)| (object_key(key), value))
        .collect::<JsObject>()
        .build()
}
