//! Core types shared by both containers

use crate::error::ListError;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Element type stored by every container
pub type Value = i32;

/// Which container a snapshot or command refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    /// Contiguous, resizable [`ArrayList`](crate::ArrayList)
    Array,
    /// Node-based [`LinkedList`](crate::LinkedList)
    Linked,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::Array => f.write_str("array"),
            ContainerKind::Linked => f.write_str("linked"),
        }
    }
}

/// Point-in-time copy of a container's live elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSnapshot {
    /// Container the snapshot was taken from
    pub kind: ContainerKind,

    /// Number of live elements
    pub size: usize,

    /// Allocated slots; only meaningful for array lists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<usize>,

    /// Live elements in order
    pub elements: Vec<Value>,
}

/// Positional operations common to both containers
///
/// Indices follow two ranges: a *position index* in `[0, len]` is valid for
/// insertion, an *element index* in `[0, len)` for access and removal.
pub trait PositionalList {
    /// Kind of the implementing container
    fn kind(&self) -> ContainerKind;

    /// Number of live elements
    fn len(&self) -> usize;

    /// Returns true if the container holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert `value` so that it ends up at position `index`
    fn insert_at(&mut self, index: usize, value: Value) -> Result<(), ListError>;

    /// Remove and return the element at `index`
    fn remove_at(&mut self, index: usize) -> Result<Value, ListError>;

    /// Return the element at `index`
    fn get_at(&self, index: usize) -> Result<Value, ListError>;

    /// Replace the element at `index`, returning the previous value
    fn set_at(&mut self, index: usize, value: Value) -> Result<Value, ListError>;

    /// Index of the first element equal to `value`
    fn index_of(&self, value: Value) -> Option<usize>;

    /// Index of the last element equal to `value`
    fn last_index_of(&self, value: Value) -> Option<usize>;

    /// Remove every element
    fn clear(&mut self);

    /// Copy the live elements out in order
    fn to_vec(&self) -> Vec<Value>;

    /// Serialisable copy of the current state
    fn snapshot(&self) -> ListSnapshot;

    /// Append `value` after the last element
    fn append(&mut self, value: Value) -> Result<(), ListError> {
        let len = self.len();
        self.insert_at(len, value)
    }
}

/// Render elements as `[e0, e1, ...]`
pub(crate) fn write_elements<I>(f: &mut fmt::Formatter<'_>, elements: I) -> fmt::Result
where
    I: IntoIterator<Item = Value>,
{
    f.write_str("[")?;
    for (i, value) in elements.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", value)?;
    }
    f.write_str("]")
}
