//! JavaScript const declaration builder.

use crate::{CodeBuilder, CodeFragment, Renderable};

/// Builder for `const` declarations.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: String,
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Build the const declaration as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::new();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "const {} = {};",
            self.name, self.value
        ))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_const() {
        let c = Const::new("foo", "42").build();
        assert_eq!(c, "const foo = 42;\n");
    }

    #[test]
    fn test_const_with_object() {
        let c = Const::new("config", "{ debug: true }").build();
        assert_eq!(c, "const config = { debug: true };\n");
    }
}
