//! Host value model for the valmod compiler.
//!
//! This crate provides the in-memory representation of dynamic runtime
//! values that the compiler turns into module source. It mirrors the
//! JavaScript value model closely enough to express everything a generated
//! module can reconstruct, plus the kinds it cannot (functions, symbols and
//! opaque host objects) so that callers can hand over arbitrary data and get
//! a precise error back.
//!
//! # Architecture
//!
//! ```text
//! JSON / TOML / host data → valmod-value (Value graph) → valmod-compiler → module source
//! ```
//!
//! Containers are shared handles: cloning an [`ArrayValue`] or
//! [`ObjectValue`] aliases the same container, which is how shared and
//! cyclic graphs are built. Identity is the handle's pointer, see
//! [`ArrayValue::id`].

mod array;
mod equality;
mod error;
mod import;
mod object;
mod value;

pub use array::{ArrayValue, MAX_LENGTH, parse_index};
pub use equality::deep_eq;
pub use error::ValueError;
pub use import::{from_json_str, from_toml_str};
pub use object::ObjectValue;
pub use value::Value;
