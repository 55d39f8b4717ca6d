use miette::Diagnostic;
use thiserror::Error;

use crate::ValuePath;

/// Result type for compiler operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("cannot encode a {kind} at {path}")]
    #[diagnostic(
        code(valmod::unsupported_value),
        help("only primitives, arrays and plain objects have a literal form; convert the {kind} to data before compiling")
    )]
    UnsupportedValueKind { kind: &'static str, path: ValuePath },

    #[error("circular reference at {path} back to {target}")]
    #[diagnostic(
        code(valmod::circular_reference),
        help("set `cycles = \"patch\"` to forward-declare {target} and assign the reference afterwards")
    )]
    CircularReference { path: ValuePath, target: ValuePath },

    #[error("value nesting exceeds the depth limit of {limit} at {path}")]
    #[diagnostic(
        code(valmod::depth_exceeded),
        help("raise `max-depth` if the input is legitimately this deep")
    )]
    DepthExceeded { limit: usize, path: ValuePath },

    #[error("array length {length} at {path} exceeds the JavaScript maximum of 4294967295")]
    #[diagnostic(
        code(valmod::invalid_array_length),
        help("JavaScript arrays hold at most 2^32 - 1 slots; store the data as an object instead")
    )]
    InvalidArrayLength { length: usize, path: ValuePath },

    #[error("invalid module binding name '{name}'")]
    #[diagnostic(code(valmod::invalid_name), help("{reason}"))]
    InvalidName { name: String, reason: String },
}

impl Error {
    /// Create an unsupported value error
    pub fn unsupported(kind: &'static str, path: ValuePath) -> Box<Self> {
        Box::new(Error::UnsupportedValueKind { kind, path })
    }

    /// Create a circular reference error
    pub fn circular(path: ValuePath, target: ValuePath) -> Box<Self> {
        Box::new(Error::CircularReference { path, target })
    }

    /// Create a depth limit error
    pub fn depth_exceeded(limit: usize, path: ValuePath) -> Box<Self> {
        Box::new(Error::DepthExceeded { limit, path })
    }

    /// Create an array length error
    pub fn invalid_array_length(length: usize, path: ValuePath) -> Box<Self> {
        Box::new(Error::InvalidArrayLength { length, path })
    }

    /// Create an invalid name error
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidName {
            name: name.into(),
            reason: reason.into(),
        })
    }

    /// Where in the value graph the error occurred, if it is tied to a value.
    pub fn path(&self) -> Option<&ValuePath> {
        match self {
            Error::UnsupportedValueKind { path, .. }
            | Error::CircularReference { path, .. }
            | Error::DepthExceeded { path, .. }
            | Error::InvalidArrayLength { path, .. } => Some(path),
            Error::InvalidName { .. } => None,
        }
    }
}
