//! JavaScript object literal builder.

/// A property in a JavaScript object literal.
#[derive(Debug, Clone)]
struct Property {
    key: String,
    value: String,
}

/// Builder for JavaScript object literals.
///
/// Keys are emitted verbatim, so a key that is not an identifier name must
/// already be quoted (`"a b"`) or computed (`["__proto__"]`).
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    properties: Vec<Property>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property with an encoded key and a value expression.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Build the object literal as a single-line string.
    pub fn build(&self) -> String {
        if self.properties.is_empty() {
            return "{}".to_string();
        }

        let properties = self
            .properties
            .iter()
            .map(|prop| format!("{}: {}", prop.key, prop.value))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{ {} }}", properties)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for JsObject {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |obj, (key, value)| obj.property(key, value))
    }
}
