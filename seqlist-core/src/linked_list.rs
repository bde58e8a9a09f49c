//! Doubly-linked list over a slot arena
//!
//! Nodes live in a `Vec` of slots owned by the list. Links are `NodeId`
//! indices into that arena, so `prev` is a plain back-reference and never
//! owns the node it points at. Released slots are threaded onto a free
//! chain and reused by later inserts.

use crate::error::ListError;
use crate::types::{write_elements, ContainerKind, ListSnapshot, PositionalList, Value};
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "logging")]
use tracing::{debug, trace, warn};

/// Handle to a node slot inside a [`LinkedList`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    value: Value,
    next: Option<NodeId>,
    prev: Option<NodeId>,
}

#[derive(Debug, Clone)]
enum Slot {
    Occupied(Node),
    Vacant { next_free: Option<NodeId> },
}

/// Doubly-linked list of [`Value`]s
#[derive(Clone, Default)]
pub struct LinkedList {
    slots: Vec<Slot>,
    free: Option<NodeId>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    size: usize,
}

impl LinkedList {
    /// Constructs an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list holding `values` in order
    pub fn from_slice(values: &[Value]) -> Result<Self, ListError> {
        let mut list = Self::new();
        for &value in values {
            list.enqueue(value)?;
        }
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

    /// Iterate from head to tail; the iterator is double-ended
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.size,
        }
    }

    fn node(&self, id: NodeId) -> &Node {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("vacant slot {} reached through a link", id.0),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("vacant slot {} reached through a link", id.0),
        }
    }

    /// Take a slot from the free chain, or grow the arena by one
    fn alloc_node(&mut self, value: Value) -> Result<NodeId, ListError> {
        let node = Slot::Occupied(Node {
            value,
            next: None,
            prev: None,
        });

        if let Some(id) = self.free {
            if let Slot::Vacant { next_free } = self.slots[id.0] {
                self.free = next_free;
            }
            self.slots[id.0] = node;
            return Ok(id);
        }

        self.slots
            .try_reserve(1)
            .map_err(|_| ListError::Allocation { requested: 1 })?;
        self.slots.push(node);
        Ok(NodeId(self.slots.len() - 1))
    }

    /// Return a slot to the free chain, yielding the value it held
    fn release(&mut self, id: NodeId) -> Value {
        let slot = core::mem::replace(
            &mut self.slots[id.0],
            Slot::Vacant {
                next_free: self.free,
            },
        );
        self.free = Some(id);
        match slot {
            Slot::Occupied(node) => node.value,
            Slot::Vacant { .. } => unreachable!("slot {} released twice", id.0),
        }
    }

    /// Locate the node at element index `index`
    ///
    /// Walks from whichever end is closer, so at most `size / 2` links are
    /// followed.
    fn node_at(&self, index: usize) -> Option<NodeId> {
        if index >= self.size {
            return None;
        }

        if index < self.size >> 1 {
            let mut cur = self.head?;
            for _ in 0..index {
                cur = self.node(cur).next?;
            }
            Some(cur)
        } else {
            let mut cur = self.tail?;
            for _ in index..self.size - 1 {
                cur = self.node(cur).prev?;
            }
            Some(cur)
        }
    }

    fn element_node(&self, index: usize) -> Result<NodeId, ListError> {
        match self.node_at(index) {
            Some(id) => Ok(id),
            None => {
                #[cfg(feature = "logging")]
                warn!("Element index {} out of range (size {})", index, self.size);
                Err(ListError::out_of_bounds(index, self.size))
            }
        }
    }

    fn link_last(&mut self, id: NodeId) {
        let old_tail = self.tail;
        self.node_mut(id).prev = old_tail;
        match old_tail {
            Some(tail) => self.node_mut(tail).next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    fn link_before(&mut self, id: NodeId, right: NodeId) {
        let left = self.node(right).prev;
        {
            let node = self.node_mut(id);
            node.prev = left;
            node.next = Some(right);
        }
        self.node_mut(right).prev = Some(id);
        match left {
            Some(left) => self.node_mut(left).next = Some(id),
            None => self.head = Some(id),
        }
    }

    /// Insert `value` at position `index`, shifting later elements right
    ///
    /// `index == len()` appends after the tail.
    pub fn add(&mut self, index: usize, value: Value) -> Result<(), ListError> {
        if index > self.size {
            #[cfg(feature = "logging")]
            warn!("Position index {} out of range (size {})", index, self.size);
            return Err(ListError::out_of_bounds(index, self.size));
        }

        let right = self.node_at(index);
        let id = self.alloc_node(value)?;
        match right {
            Some(right) => {
                #[cfg(feature = "logging")]
                trace!("Linking node {} before node {}", id.0, right.0);
                self.link_before(id, right);
            }
            None => {
                #[cfg(feature = "logging")]
                trace!("Linking node {} after tail", id.0);
                self.link_last(id);
            }
        }
        self.size += 1;
        Ok(())
    }

    /// Remove and return the element at `index`
    pub fn remove_node(&mut self, index: usize) -> Result<Value, ListError> {
        let id = self.element_node(index)?;
        let (prev, next) = {
            let node = self.node(id);
            (node.prev, node.next)
        };

        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev = prev,
            None => self.tail = prev,
        }

        self.size -= 1;
        let value = self.release(id);

        // Last node gone: drop the arena instead of keeping vacant slots.
        if self.size == 0 {
            self.slots.clear();
            self.free = None;
        }
        Ok(value)
    }

    /// Replace the element at `index`, returning the previous value
    pub fn set(&mut self, index: usize, value: Value) -> Result<Value, ListError> {
        let id = self.element_node(index)?;
        Ok(core::mem::replace(&mut self.node_mut(id).value, value))
    }

    /// Return the element at `index`
    pub fn get(&self, index: usize) -> Result<Value, ListError> {
        let id = self.element_node(index)?;
        Ok(self.node(id).value)
    }

    /// Index of the first occurrence of `value`, scanning from the head
    pub fn index_of(&self, value: Value) -> Option<usize> {
        self.iter().position(|&v| v == value)
    }

    /// Index of the last occurrence of `value`, scanning from the tail
    pub fn last_index_of(&self, value: Value) -> Option<usize> {
        self.iter().rposition(|&v| v == value)
    }

    /// Returns true if any element equals `value`
    pub fn contains(&self, value: Value) -> bool {
        self.index_of(value).is_some()
    }

    /// Remove every element, releasing each node along the chain
    pub fn clear(&mut self) {
        let mut released = 0usize;
        let mut cur = self.head;
        while let Some(id) = cur {
            cur = self.node(id).next;
            self.release(id);
            released += 1;
        }

        #[cfg(feature = "logging")]
        debug!("Cleared linked list, released {} nodes", released);
        debug_assert_eq!(released, self.size);

        self.slots.clear();
        self.free = None;
        self.head = None;
        self.tail = None;
        self.size = 0;
    }

    /// Value at the head
    pub fn front(&self) -> Option<Value> {
        self.head.map(|id| self.node(id).value)
    }

    /// Value at the tail
    pub fn rear(&self) -> Option<Value> {
        self.tail.map(|id| self.node(id).value)
    }

    /// Append at the tail
    pub fn enqueue(&mut self, value: Value) -> Result<(), ListError> {
        self.add(self.size, value)
    }

    /// Remove from the head
    pub fn dequeue(&mut self) -> Option<Value> {
        if self.is_empty() {
            return None;
        }
        self.remove_node(0).ok()
    }

    /// Newline-terminated rendering, `[e0, e1, ...]\n`
    pub fn dump(&self) -> String {
        format!("{}\n", self)
    }

    /// Serialisable copy of the live elements
    pub fn snapshot(&self) -> ListSnapshot {
        ListSnapshot {
            kind: ContainerKind::Linked,
            size: self.size,
            capacity: None,
            elements: self.iter().copied().collect(),
        }
    }
}

/// Borrowing iterator over a [`LinkedList`]
pub struct Iter<'a> {
    list: &'a LinkedList,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = &'a Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for LinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl Eq for LinkedList {}

impl fmt::Debug for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(f, self.iter().copied())
    }
}

impl PositionalList for LinkedList {
    fn kind(&self) -> ContainerKind {
        ContainerKind::Linked
    }

    fn len(&self) -> usize {
        self.size
    }

    fn insert_at(&mut self, index: usize, value: Value) -> Result<(), ListError> {
        self.add(index, value)
    }

    fn remove_at(&mut self, index: usize) -> Result<Value, ListError> {
        self.remove_node(index)
    }

    fn get_at(&self, index: usize) -> Result<Value, ListError> {
        self.get(index)
    }

    fn set_at(&mut self, index: usize, value: Value) -> Result<Value, ListError> {
        self.set(index, value)
    }

    fn index_of(&self, value: Value) -> Option<usize> {
        LinkedList::index_of(self, value)
    }

    fn last_index_of(&self, value: Value) -> Option<usize> {
        LinkedList::last_index_of(self, value)
    }

    fn clear(&mut self) {
        LinkedList::clear(self)
    }

    fn to_vec(&self) -> Vec<Value> {
        self.iter().copied().collect()
    }

    fn snapshot(&self) -> ListSnapshot {
        LinkedList::snapshot(self)
    }
}
