//! Assignment statements that fill in a declared container.

use crate::{CodeFragment, Renderable};

/// An assignment statement: `target = value;`.
#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    target: String,
    value: String,
}

impl Assign {
    pub fn new(target: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            value: value.into(),
        }
    }

    pub fn build(&self) -> String {
        format!("{} = {};", self.target, self.value)
    }
}

impl Renderable for Assign {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.build())]
    }
}

/// Defines an own, enumerable data property.
///
/// Used where a plain assignment would hit an inherited accessor, such as
/// `__proto__`.
#[derive(Debug, Clone, PartialEq)]
pub struct DefineProperty {
    object: String,
    key: String,
    value: String,
}

impl DefineProperty {
    /// `key` must already be an encoded string literal.
    pub fn new(
        object: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            object: object.into(),
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn build(&self) -> String {
        format!(
            "Object.defineProperty({}, {}, {{ value: {}, writable: true, enumerable: true, configurable: true }});",
            self.object, self.key, self.value
        )
    }
}

impl Renderable for DefineProperty {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.build())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_assignment() {
        assert_eq!(Assign::new("value[0]", "123").build(), "value[0] = 123;");
    }

    #[test]
    fn test_assign_fragments() {
        let assign = Assign::new("value.foo", "\"bar\"");
        assert_eq!(
            assign.to_fragments(),
            vec![CodeFragment::line("value.foo = \"bar\";")]
        );
    }

    #[test]
    fn test_define_property() {
        let define = DefineProperty::new("value", "\"__proto__\"", "value_1").build();
        assert_eq!(
            define,
            "Object.defineProperty(value, \"__proto__\", { value: value_1, writable: true, enumerable: true, configurable: true });"
        );
    }
}
