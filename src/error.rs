use thiserror::Error;

use crate::history_manager::Stack;

/// Errors surfaced by the history manager and by commands.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// `undo` or `redo` was called while the respective stack was empty.
    #[error("nothing to {0}")]
    EmptyHistory(Stack),

    /// A command without an inverse reached a place where one is required.
    #[error("command `{description}` has no inverse")]
    NonInvertibleCommand { description: String },

    /// A command could not be applied to the current state.
    #[error("cannot apply `{command}`: {reason}")]
    InvalidOperation { command: String, reason: String },
}

impl Error {
    #[must_use]
    pub fn invalid_operation(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOperation {
            command: command.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
