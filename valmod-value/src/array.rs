//! Sparse arrays with extra properties.

use std::{cell::RefCell, collections::BTreeMap, fmt, rc::Rc};

use indexmap::IndexMap;

use crate::{Value, ValueError};

/// Largest valid array index (`2^32 - 2`).
const MAX_INDEX: u64 = u32::MAX as u64 - 1;

/// Largest length a JavaScript array can have (`2^32 - 1`).
pub const MAX_LENGTH: u64 = u32::MAX as u64;

#[derive(Default)]
struct ArrayData {
    length: usize,
    elements: BTreeMap<usize, Value>,
    properties: IndexMap<String, Value>,
}

/// A shared handle to an integer-indexed container.
///
/// Indices below [`len`](Self::len) that were never assigned are holes,
/// which is different from an index holding [`Value::Undefined`]. Besides
/// elements an array carries string-keyed properties in insertion order.
///
/// Cloning the handle does not copy the array.
#[derive(Clone, Default)]
pub struct ArrayValue(Rc<RefCell<ArrayData>>);

impl ArrayValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an array of the given length made only of holes.
    pub fn with_length(length: usize) -> Self {
        let array = Self::new();
        array.0.borrow_mut().length = length;
        array
    }

    /// Create a dense array from the given elements.
    pub fn from_elements<I, V>(iter: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let array = Self::new();
        for value in iter {
            array.push(value);
        }
        array
    }

    /// The array length, including trailing holes.
    pub fn len(&self) -> usize {
        self.0.borrow().length
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the length fits a JavaScript array.
    pub fn has_valid_length(&self) -> bool {
        u64::try_from(self.len()).is_ok_and(|length| length <= MAX_LENGTH)
    }

    /// Change the length. Elements at or past the new length are dropped.
    pub fn set_length(&self, length: usize) {
        let mut data = self.0.borrow_mut();
        data.elements.retain(|index, _| *index < length);
        data.length = length;
    }

    /// Append an element at index `len()`.
    pub fn push(&self, value: impl Into<Value>) {
        let index = self.len();
        self.set(index, value);
    }

    /// Assign an index, growing the length when needed.
    ///
    /// The model accepts any `usize`; lengths past [`MAX_LENGTH`] are caught
    /// when the array is compiled.
    pub fn set(&self, index: usize, value: impl Into<Value>) -> Option<Value> {
        let mut data = self.0.borrow_mut();
        if index >= data.length {
            data.length = index.saturating_add(1);
        }
        data.elements.insert(index, value.into())
    }

    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().elements.get(&index).cloned()
    }

    /// Returns true if the index holds a value (as opposed to a hole).
    pub fn has(&self, index: usize) -> bool {
        self.0.borrow().elements.contains_key(&index)
    }

    /// Turn an index into a hole. The length is unchanged.
    pub fn remove(&self, index: usize) -> Option<Value> {
        self.0.borrow_mut().elements.remove(&index)
    }

    /// Assign a string-keyed property.
    ///
    /// Keys that are canonical array indices assign the element instead.
    /// `length` is rejected since it is not a property of its own.
    pub fn set_property(
        &self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, ValueError> {
        let key = key.into();
        if key == "length" {
            return Err(ValueError::ReservedKey { key });
        }
        if let Some(index) = parse_index(&key) {
            return Ok(self.set(index, value));
        }
        Ok(self.0.borrow_mut().properties.insert(key, value.into()))
    }

    pub fn property(&self, key: &str) -> Option<Value> {
        self.0.borrow().properties.get(key).cloned()
    }

    /// Number of present (non-hole) elements.
    pub fn element_count(&self) -> usize {
        self.0.borrow().elements.len()
    }

    /// Snapshot of the present elements in ascending index order.
    pub fn elements(&self) -> Vec<(usize, Value)> {
        self.0
            .borrow()
            .elements
            .iter()
            .map(|(index, value)| (*index, value.clone()))
            .collect()
    }

    /// Snapshot of the extra properties in insertion order.
    pub fn properties(&self) -> Vec<(String, Value)> {
        self.0
            .borrow()
            .properties
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Returns true when every index below the length is present and there
    /// are no extra properties, i.e. the array is a plain list.
    pub fn is_dense(&self) -> bool {
        let data = self.0.borrow();
        data.elements.len() == data.length && data.properties.is_empty()
    }

    /// Returns true if both handles point to the same array.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Identity of the underlying container, stable while it is alive.
    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }
}

impl<V: Into<Value>> FromIterator<V> for ArrayValue {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl fmt::Debug for ArrayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0.borrow();
        write!(
            f,
            "Array@{:#x}(length: {}, elements: {}, properties: {:?})",
            self.id(),
            data.length,
            data.elements.len(),
            data.properties.keys().collect::<Vec<_>>()
        )
    }
}

/// Parse a canonical array index (`"0"`, `"17"`, but not `"01"` or `"-1"`).
pub fn parse_index(key: &str) -> Option<usize> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index: u64 = key.parse().ok()?;
    if index > MAX_INDEX {
        return None;
    }
    usize::try_from(index).ok()
}
