//! Library entry for seqlist-cli used by integration tests and embedding.

pub mod commands;
pub mod script;

use seqlist_core::{ContainerKind, ListError};

// Re-export commands for convenience
pub use commands::*;

/// Container selected on the command line
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ContainerArg {
    /// Contiguous, resizable array list
    Array,
    /// Doubly-linked list
    Linked,
}

impl From<ContainerArg> for ContainerKind {
    fn from(arg: ContainerArg) -> Self {
        match arg {
            ContainerArg::Array => ContainerKind::Array,
            ContainerArg::Linked => ContainerKind::Linked,
        }
    }
}

/// Exit status for failures that are not container errors (I/O, bad JSON)
pub const EXIT_OTHER_FAILURE: i32 = 4;

/// Exit status for an error that carries a [`ListError`] anywhere in its chain
pub fn list_error_exit_code(err: &anyhow::Error) -> Option<i32> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ListError>())
        .map(ListError::exit_code)
}

/// Process exit status for any command failure
pub fn exit_code(err: &anyhow::Error) -> i32 {
    list_error_exit_code(err).unwrap_or(EXIT_OTHER_FAILURE)
}
