//! Contiguous, resizable array list
//!
//! The backing buffer always holds exactly `capacity` initialised slots.
//! Slots `[0, size)` are live; everything past `size` is kept zeroed.
//! Growth follows [`grow_capacity`], so the reported capacity is the
//! policy's figure rather than whatever the allocator rounds up to.

use crate::constants::{grow_capacity, DEFAULT_CAPACITY};
use crate::error::ListError;
use crate::types::{write_elements, ContainerKind, ListSnapshot, PositionalList, Value};
use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// Dynamically-resizing array of [`Value`]s
#[derive(Clone)]
pub struct ArrayList {
    buf: Box<[Value]>,
    size: usize,
}

/// Allocate `capacity` zeroed slots, reporting failure instead of aborting
fn allocate(capacity: usize) -> Result<Box<[Value]>, ListError> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| ListError::Allocation {
            requested: capacity,
        })?;
    slots.resize(capacity, 0);
    Ok(slots.into_boxed_slice())
}

impl ArrayList {
    /// Constructs an empty list with an initial capacity of ten
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Constructs an empty list, reporting allocation failure
    pub fn try_new() -> Result<Self, ListError> {
        Self::try_with_capacity(DEFAULT_CAPACITY)
    }

    /// Constructs an empty list with exactly `capacity` slots
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: alloc::vec![0; capacity].into_boxed_slice(),
            size: 0,
        }
    }

    /// Fallible counterpart of [`ArrayList::with_capacity`]
    pub fn try_with_capacity(capacity: usize) -> Result<Self, ListError> {
        Ok(Self {
            buf: allocate(capacity)?,
            size: 0,
        })
    }

    /// Build a list holding a copy of `values`, sized to fit
    pub fn from_slice(values: &[Value]) -> Result<Self, ListError> {
        let mut list = Self::try_with_capacity(values.len())?;
        list.buf.copy_from_slice(values);
        list.size = values.len();
        Ok(list)
    }

    /// Number of live elements
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the list holds no elements
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of allocated slots
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Live elements as a slice
    pub fn as_slice(&self) -> &[Value] {
        &self.buf[..self.size]
    }

    /// Iterate over the live elements in order
    pub fn iter(&self) -> core::slice::Iter<'_, Value> {
        self.as_slice().iter()
    }

    /// Change the container capacity to exactly `capacity` elements
    ///
    /// A capacity of zero releases the buffer and empties the list. A
    /// capacity below the current size truncates; the discarded elements are
    /// not preserved. On allocation failure the list is left untouched.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), ListError> {
        #[cfg(feature = "logging")]
        debug!(
            "Resizing array list capacity {} -> {} (size {})",
            self.capacity(),
            capacity,
            self.size
        );

        if capacity == 0 {
            self.buf = Box::default();
            self.size = 0;
            return Ok(());
        }

        let mut next = allocate(capacity)?;
        let keep = self.size.min(capacity);
        next[..keep].copy_from_slice(&self.buf[..keep]);
        self.buf = next;
        self.size = keep;
        Ok(())
    }

    /// Trim the capacity to the current size
    pub fn shrink_to_fit(&mut self) -> Result<(), ListError> {
        self.set_capacity(self.size)
    }

    /// Grow the buffer if the next insert would not fit
    fn auto_expand(&mut self) -> Result<(), ListError> {
        if self.size == self.capacity() {
            self.set_capacity(grow_capacity(self.capacity()))?;
        }
        Ok(())
    }

    fn check_element_index(&self, index: usize) -> Result<(), ListError> {
        if index < self.size {
            return Ok(());
        }
        #[cfg(feature = "logging")]
        warn!("Element index {} out of range (size {})", index, self.size);
        Err(ListError::out_of_bounds(index, self.size))
    }

    fn check_position_index(&self, index: usize) -> Result<(), ListError> {
        if index <= self.size {
            return Ok(());
        }
        #[cfg(feature = "logging")]
        warn!("Position index {} out of range (size {})", index, self.size);
        Err(ListError::out_of_bounds(index, self.size))
    }

    /// Append `value` after the current last element
    ///
    /// Reallocates if and only if the new size would exceed the capacity.
    pub fn push_back(&mut self, value: Value) -> Result<(), ListError> {
        self.auto_expand()?;
        self.buf[self.size] = value;
        self.size += 1;
        Ok(())
    }

    /// Remove the last element, if any
    pub fn pop_back(&mut self) -> Option<Value> {
        if self.size == 0 {
            return None;
        }
        self.size -= 1;
        Some(core::mem::take(&mut self.buf[self.size]))
    }

    /// Insert `value` at position `index`, shifting later elements right
    pub fn insert(&mut self, index: usize, value: Value) -> Result<(), ListError> {
        self.check_position_index(index)?;
        self.auto_expand()?;
        self.buf.copy_within(index..self.size, index + 1);
        self.buf[index] = value;
        self.size += 1;
        Ok(())
    }

    /// Remove and return the element at `index`, shifting later elements left
    pub fn erase(&mut self, index: usize) -> Result<Value, ListError> {
        self.check_element_index(index)?;
        let removed = self.buf[index];
        self.buf.copy_within(index + 1..self.size, index);
        self.size -= 1;
        self.buf[self.size] = 0;
        Ok(removed)
    }

    /// Replace the element at `index`, returning the previous value
    pub fn set(&mut self, index: usize, value: Value) -> Result<Value, ListError> {
        self.check_element_index(index)?;
        Ok(core::mem::replace(&mut self.buf[index], value))
    }

    /// Return the element at `index`
    pub fn get(&self, index: usize) -> Result<Value, ListError> {
        self.check_element_index(index)?;
        Ok(self.buf[index])
    }

    /// Index of the first occurrence of `value`
    pub fn index_of(&self, value: Value) -> Option<usize> {
        self.as_slice().iter().position(|&v| v == value)
    }

    /// Index of the last occurrence of `value`
    pub fn last_index_of(&self, value: Value) -> Option<usize> {
        self.as_slice().iter().rposition(|&v| v == value)
    }

    /// Returns true if any live element equals `value`
    pub fn contains(&self, value: Value) -> bool {
        self.index_of(value).is_some()
    }

    /// Remove all elements; the capacity is unchanged
    pub fn clear(&mut self) {
        self.buf[..self.size].fill(0);
        self.size = 0;
    }

    /// Newline-terminated rendering, `[e0, e1, ...]\n`
    pub fn dump(&self) -> String {
        format!("{}\n", self)
    }

    /// Serialisable copy of the live elements plus size and capacity
    pub fn snapshot(&self) -> ListSnapshot {
        ListSnapshot {
            kind: ContainerKind::Array,
            size: self.size,
            capacity: Some(self.capacity()),
            elements: self.as_slice().to_vec(),
        }
    }
}

impl Default for ArrayList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ArrayList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for ArrayList {}

impl fmt::Debug for ArrayList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("size", &self.size)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl fmt::Display for ArrayList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(f, self.iter().copied())
    }
}

impl<'a> IntoIterator for &'a ArrayList {
    type Item = &'a Value;
    type IntoIter = core::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PositionalList for ArrayList {
    fn kind(&self) -> ContainerKind {
        ContainerKind::Array
    }

    fn len(&self) -> usize {
        self.size
    }

    fn insert_at(&mut self, index: usize, value: Value) -> Result<(), ListError> {
        self.insert(index, value)
    }

    fn remove_at(&mut self, index: usize) -> Result<Value, ListError> {
        self.erase(index)
    }

    fn get_at(&self, index: usize) -> Result<Value, ListError> {
        self.get(index)
    }

    fn set_at(&mut self, index: usize, value: Value) -> Result<Value, ListError> {
        self.set(index, value)
    }

    fn index_of(&self, value: Value) -> Option<usize> {
        ArrayList::index_of(self, value)
    }

    fn last_index_of(&self, value: Value) -> Option<usize> {
        ArrayList::last_index_of(self, value)
    }

    fn clear(&mut self) {
        ArrayList::clear(self)
    }

    fn to_vec(&self) -> Vec<Value> {
        self.as_slice().to_vec()
    }

    fn snapshot(&self) -> ListSnapshot {
        ArrayList::snapshot(self)
    }
}
