//! JavaScript array literal builder.

/// Builder for JavaScript array literals.
///
/// Elements are raw expressions, rendered in order.
#[derive(Debug, Clone, Default)]
pub struct JsArray {
    elements: Vec<String>,
}

impl JsArray {
    /// Build the array literal as a string.
    pub fn build(&self) -> String {
        format!("[{}]", self.elements.join(", "))
    }
}

impl<S: Into<String>> FromIterator<S> for JsArray {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().map(Into::into).collect(),
        }
    }
}
