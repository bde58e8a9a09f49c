use crate::script::{load_script, Op};
use crate::ContainerArg;
use anyhow::{Context, Result};
use colored::*;
use seqlist_core::{
    compat::{index_or_sentinel, opt_value_or_sentinel, value_or_sentinel},
    ArrayList, LinkedList, ListError, ListSnapshot, PositionalList, Value,
};
use std::fs;
use tracing::{debug, info, warn};

/// How a script run treats failures and renders results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Log and skip failing ops instead of stopping at the first one
    pub lenient: bool,
    /// Render missing indices as -1 and invalid accesses as i32::MIN
    pub sentinels: bool,
    /// Emit the container contents after every op
    pub trace: bool,
}

/// Result of running a script against a container
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// Output lines produced by ops, in order
    pub lines: Vec<String>,
    /// Ops that failed and were skipped (lenient mode only)
    pub skipped: usize,
    /// Final contents rendered as `[e0, e1, ...]`
    pub rendered: String,
    /// Final state of the container
    pub snapshot: ListSnapshot,
}

enum Target {
    Array(ArrayList),
    Linked(LinkedList),
}

impl Target {
    fn new(container: ContainerArg) -> Self {
        match container {
            ContainerArg::Array => Target::Array(ArrayList::new()),
            ContainerArg::Linked => Target::Linked(LinkedList::new()),
        }
    }

    fn list(&mut self) -> &mut dyn PositionalList {
        match self {
            Target::Array(list) => list,
            Target::Linked(list) => list,
        }
    }

    fn render(&self) -> String {
        match self {
            Target::Array(list) => list.to_string(),
            Target::Linked(list) => list.to_string(),
        }
    }

    fn snapshot(&self) -> ListSnapshot {
        match self {
            Target::Array(list) => list.snapshot(),
            Target::Linked(list) => list.snapshot(),
        }
    }

    fn array(&mut self, op: &Op) -> Result<&mut ArrayList, ListError> {
        match self {
            Target::Array(list) => Ok(list),
            Target::Linked(_) => Err(unsupported(op, "linked")),
        }
    }

    fn linked(&mut self, op: &Op) -> Result<&mut LinkedList, ListError> {
        match self {
            Target::Linked(list) => Ok(list),
            Target::Array(_) => Err(unsupported(op, "array")),
        }
    }
}

fn unsupported(op: &Op, container: &str) -> ListError {
    ListError::UnsupportedOperation(format!("{} on {} list", op.name(), container))
}

fn render_value(result: Result<Value, ListError>, options: RunOptions) -> Result<String, ListError> {
    if options.sentinels {
        Ok(value_or_sentinel(result).to_string())
    } else {
        result.map(|v| v.to_string())
    }
}

fn render_opt_value(value: Option<Value>, options: RunOptions) -> String {
    if options.sentinels {
        opt_value_or_sentinel(value).to_string()
    } else {
        value.map_or_else(|| "none".to_string(), |v| v.to_string())
    }
}

fn render_index(index: Option<usize>, options: RunOptions) -> String {
    if options.sentinels {
        index_or_sentinel(index).to_string()
    } else {
        index.map_or_else(|| "none".to_string(), |i| i.to_string())
    }
}

/// Apply one op, returning the line it reports (if any)
fn apply(target: &mut Target, op: &Op, options: RunOptions) -> Result<Option<String>, ListError> {
    let line = match *op {
        Op::PushBack { value } => {
            target.list().append(value)?;
            None
        }
        Op::PopBack => {
            let popped = match target {
                Target::Array(list) => list.pop_back(),
                Target::Linked(list) if list.is_empty() => None,
                Target::Linked(list) => Some(list.remove_node(list.len() - 1)?),
            };
            Some(format!("pop_back -> {}", render_opt_value(popped, options)))
        }
        Op::Insert { index, value } => {
            target.list().insert_at(index, value)?;
            None
        }
        Op::Erase { index } => {
            let removed = render_value(target.list().remove_at(index), options)?;
            Some(format!("erase({}) -> {}", index, removed))
        }
        Op::Set { index, value } => {
            let previous = render_value(target.list().set_at(index, value), options)?;
            Some(format!("set({}, {}) -> {}", index, value, previous))
        }
        Op::Get { index } => {
            let value = render_value(target.list().get_at(index), options)?;
            Some(format!("get({}) -> {}", index, value))
        }
        Op::IndexOf { value } => {
            let found = target.list().index_of(value);
            Some(format!("index_of({}) -> {}", value, render_index(found, options)))
        }
        Op::LastIndexOf { value } => {
            let found = target.list().last_index_of(value);
            Some(format!(
                "last_index_of({}) -> {}",
                value,
                render_index(found, options)
            ))
        }
        Op::Contains { value } => {
            let found = target.list().index_of(value).is_some();
            Some(format!("contains({}) -> {}", value, found))
        }
        Op::Clear => {
            target.list().clear();
            None
        }
        Op::SetCapacity { capacity } => {
            let list = target.array(op)?;
            list.set_capacity(capacity)?;
            Some(format!(
                "size = {}\tcapacity = {}",
                list.len(),
                list.capacity()
            ))
        }
        Op::ShrinkToFit => {
            let list = target.array(op)?;
            list.shrink_to_fit()?;
            Some(format!(
                "size = {}\tcapacity = {}",
                list.len(),
                list.capacity()
            ))
        }
        Op::Front => {
            let value = target.linked(op)?.front();
            Some(format!("front -> {}", render_opt_value(value, options)))
        }
        Op::Rear => {
            let value = target.linked(op)?.rear();
            Some(format!("rear -> {}", render_opt_value(value, options)))
        }
        Op::Enqueue { value } => {
            target.linked(op)?.enqueue(value)?;
            None
        }
        Op::Dequeue => {
            let value = target.linked(op)?.dequeue();
            Some(format!("dequeue -> {}", render_opt_value(value, options)))
        }
        Op::Dump => Some(target.render()),
    };
    Ok(line)
}

/// Run `ops` against a fresh container
pub fn run_ops(container: ContainerArg, ops: &[Op], options: RunOptions) -> Result<RunOutcome> {
    let mut target = Target::new(container);
    let mut lines = Vec::new();
    let mut skipped = 0usize;

    for (i, op) in ops.iter().enumerate() {
        debug!("Applying op #{} ({:?})", i, op);

        match apply(&mut target, op, options) {
            Ok(line) => lines.extend(line),
            Err(e) if options.lenient => {
                warn!("Skipping op #{} ({}): {}", i, op.name(), e);
                skipped += 1;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("op #{} ({}) failed", i, op.name()));
            }
        }

        if options.trace {
            lines.push(format!("{:>4} {:<14} {}", i, op.name(), target.render()));
        }
    }

    Ok(RunOutcome {
        lines,
        skipped,
        rendered: target.render(),
        snapshot: target.snapshot(),
    })
}

pub fn execute(
    container: ContainerArg,
    script: &str,
    output: Option<&str>,
    options: RunOptions,
) -> Result<()> {
    info!("Running script {} against {:?} list", script, container);

    let ops = load_script(script)?;
    info!("Loaded {} ops", ops.len());

    let outcome = run_ops(container, &ops, options)?;

    for line in &outcome.lines {
        println!("{}", line);
    }
    println!("{}", outcome.rendered);

    if outcome.skipped > 0 {
        println!(
            "{} {} ops skipped",
            "!".yellow(),
            outcome.skipped.to_string().yellow()
        );
    } else {
        println!("{} {} ops applied", "✓".green(), ops.len());
    }

    if let Some(output_path) = output {
        let json = serde_json::to_string_pretty(&outcome.snapshot)
            .with_context(|| "Failed to serialize snapshot")?;
        fs::write(output_path, json)
            .with_context(|| format!("Failed to write output file: {}", output_path))?;
        info!("Wrote snapshot to {}", output_path);
    }

    Ok(())
}
