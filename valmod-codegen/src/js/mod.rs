//! JavaScript builders for literals, declarations, and exports.
//!
//! Builders take already-encoded expressions: quoting and escaping of
//! values is the caller's job, these types only arrange the syntax.

mod arrays;
mod assign;
mod consts;
mod exports;
mod ident;
mod objects;

pub use arrays::JsArray;
pub use assign::{Assign, DefineProperty};
pub use consts::Const;
pub use exports::Export;
pub use ident::{is_common_js_binding, is_identifier_name, is_reserved_word};
pub use objects::JsObject;
