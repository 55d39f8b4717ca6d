//! Module export statements.

use crate::{CodeFragment, Renderable};

/// Builder for the statement exposing a module's default value.
#[derive(Debug, Clone, PartialEq)]
pub enum Export {
    /// `export default <expr>;`
    Default(String),
    /// `module.exports = <expr>;`
    CommonJs(String),
}

impl Export {
    /// ES module default export.
    pub fn default(expr: impl Into<String>) -> Self {
        Self::Default(expr.into())
    }

    /// CommonJS `module.exports` assignment.
    pub fn common_js(expr: impl Into<String>) -> Self {
        Self::CommonJs(expr.into())
    }

    /// Build the export as a string.
    pub fn build(&self) -> String {
        match self {
            Export::Default(expr) => format!("export default {};", expr),
            Export::CommonJs(expr) => format!("module.exports = {};", expr),
        }
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.build())]
    }
}
