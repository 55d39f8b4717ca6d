//! Locations inside a value graph.

use std::fmt;

use valmod_codegen::js::is_identifier_name;

use crate::encoder;

/// One step from a container to one of its slots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// An array element.
    Index(usize),
    /// An object property or an array's extra property.
    Key(String),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Index(index) => write!(f, "[{}]", index),
            Segment::Key(key) if is_identifier_name(key) => write!(f, ".{}", key),
            Segment::Key(key) => write!(f, "[{}]", encoder::string(key)),
        }
    }
}

/// Path from the root value, rendered like `$.items[3]["odd key"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValuePath(Vec<Segment>);

impl ValuePath {
    /// The path of the root value.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub(crate) fn push(&mut self, segment: Segment) {
        self.0.push(segment);
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }
}

impl fmt::Display for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for segment in &self.0 {
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl FromIterator<Segment> for ValuePath {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
