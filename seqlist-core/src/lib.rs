//! # Seqlist Core
//!
//! Two linear containers over a fixed scalar element type: a
//! dynamically-resizing array list and a doubly-linked list.
//!
//! ## Modules
//!
//! - `constants`: Default capacity, growth policy and exit statuses
//! - `types`: Shared types (`Value`, `ListSnapshot`, `PositionalList`)
//! - `error`: Error type (`ListError`)
//! - `array_list`: Contiguous, resizable array list
//! - `linked_list`: Arena-backed doubly-linked list
//! - `compat`: Mapping results onto the legacy integer sentinels

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod array_list;
pub mod compat;
pub mod constants;
pub mod error;
pub mod linked_list;
pub mod types;

// Re-export commonly used types
pub use array_list::ArrayList;
pub use error::ListError;
pub use linked_list::LinkedList;
pub use types::{ContainerKind, ListSnapshot, PositionalList, Value};

/// Result type alias for container operations
pub type Result<T> = core::result::Result<T, ListError>;
