//! Insertion-ordered objects.

use std::{cell::RefCell, fmt, rc::Rc};

use indexmap::IndexMap;

use crate::Value;

/// A shared handle to an ordered string-keyed mapping.
///
/// Keys keep their insertion order. Cloning the handle does not copy the
/// object.
#[derive(Clone, Default)]
pub struct ObjectValue(Rc<RefCell<IndexMap<String, Value>>>);

impl ObjectValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a property. Replacing keeps the original position.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.borrow_mut().insert(key.into(), value.into())
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.borrow().get(key).cloned()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.borrow().contains_key(key)
    }

    /// Remove a property, preserving the order of the remaining keys.
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.0.borrow_mut().shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn keys(&self) -> Vec<String> {
        self.0.borrow().keys().cloned().collect()
    }

    /// Snapshot of the entries in insertion order.
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.0
            .borrow()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Returns true if both handles point to the same object.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Identity of the underlying container, stable while it is alive.
    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ObjectValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let object = Self::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

impl fmt::Debug for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Object@{:#x}({:?})", self.id(), self.keys())
    }
}
