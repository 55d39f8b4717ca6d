// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Compile in-memory values into JavaScript modules.
//!
//! Given a [`Value`](valmod_value::Value), the compiler produces module
//! source whose default export is deeply equal to it. Containers reached
//! through more than one slot are declared once and referenced by name, so
//! evaluating the module restores the same sharing.
//!
//! # Pipeline
//!
//! ```text
//! classify → walk (identity graph, postorder) → emit (declarations) → format
//! ```
//!
//! # Example
//!
//! ```
//! use valmod_compiler::compile;
//! use valmod_value::{ArrayValue, Value};
//!
//! let value = Value::from(ArrayValue::from_elements([1, 2]));
//! let module = compile(&value).unwrap();
//! assert_eq!(module.source, "const value = [1, 2];\n\nexport default value;\n");
//! ```

mod classify;
mod compiler;
mod emitter;
pub mod encoder;
mod error;
mod formatter;
mod options;
mod path;
mod walker;

pub use classify::{Primitive, Variant, classify};
pub use compiler::{CompileStats, CompiledModule, Compiler, compile};
pub use error::{Error, Result};
pub use options::{
    CompileOptions, CyclePolicy, DEFAULT_MAX_DEPTH, DEFAULT_NAME, Layout, ModuleFormat,
};
pub use path::{Segment, ValuePath};
