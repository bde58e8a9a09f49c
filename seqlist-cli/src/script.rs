//! JSON operation scripts
//!
//! A script is a JSON array of objects tagged by `op`:
//!
//! ```json
//! [
//!   {"op": "push_back", "value": 3},
//!   {"op": "insert", "index": 0, "value": 1},
//!   {"op": "dump"}
//! ]
//! ```

use anyhow::{Context, Result};
use seqlist_core::Value;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read};

/// A single container operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    PushBack { value: Value },
    PopBack,
    Insert { index: usize, value: Value },
    Erase { index: usize },
    Set { index: usize, value: Value },
    Get { index: usize },
    IndexOf { value: Value },
    LastIndexOf { value: Value },
    Contains { value: Value },
    Clear,
    SetCapacity { capacity: usize },
    ShrinkToFit,
    Front,
    Rear,
    Enqueue { value: Value },
    Dequeue,
    Dump,
}

impl Op {
    /// Script name of the operation
    pub fn name(&self) -> &'static str {
        match self {
            Op::PushBack { .. } => "push_back",
            Op::PopBack => "pop_back",
            Op::Insert { .. } => "insert",
            Op::Erase { .. } => "erase",
            Op::Set { .. } => "set",
            Op::Get { .. } => "get",
            Op::IndexOf { .. } => "index_of",
            Op::LastIndexOf { .. } => "last_index_of",
            Op::Contains { .. } => "contains",
            Op::Clear => "clear",
            Op::SetCapacity { .. } => "set_capacity",
            Op::ShrinkToFit => "shrink_to_fit",
            Op::Front => "front",
            Op::Rear => "rear",
            Op::Enqueue { .. } => "enqueue",
            Op::Dequeue => "dequeue",
            Op::Dump => "dump",
        }
    }
}

/// Parse a script from JSON text
pub fn parse_script(content: &str) -> Result<Vec<Op>> {
    serde_json::from_str(content).with_context(|| "Failed to parse operation script")
}

/// Load a script from a file, or stdin when `input` is `-`
pub fn load_script(input: &str) -> Result<Vec<Op>> {
    let content = if input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(input)
            .with_context(|| format!("Failed to read script file: {}", input))?
    };
    parse_script(&content)
}
