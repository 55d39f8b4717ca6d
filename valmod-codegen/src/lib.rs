//! JavaScript code building blocks for the valmod compiler.
//!
//! # Module Organization
//!
//! - [`CodeBuilder`] - Line-oriented output buffer
//! - [`CodeFragment`] / [`Renderable`] - Intermediate representation for code pieces
//! - [`js`] - Builders for the JavaScript statements and literals valmod emits

mod code_builder;
pub mod js;
mod renderable;

pub use code_builder::CodeBuilder;
pub use renderable::{CodeFragment, Renderable};
