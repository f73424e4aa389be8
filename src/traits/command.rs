use std::borrow::Cow;

use crate::error::Result;

/// A reversible unit of work applied to a context.
///
/// Instead of knowing how to undo itself, a command knows how to build its
/// opposite: a new command whose effect reverses this one. The
/// [`HistoryManager`](crate::history_manager::HistoryManager) records that
/// opposite before the command runs and replays it on undo.
///
/// # Associated Types
///
/// * `Context`: The state the command reads and mutates.
///
/// # Required Methods
///
/// * `execute(&self, ctx: &mut Self::Context)`: Applies the command.
/// * `opposite(&self, ctx: &Self::Context)`: Builds the inverse command from the state as it is
///   right before `execute` runs.
///
/// # Provided Methods
///
/// * `is_undoable(&self) -> bool`: Whether the command takes part in history. Defaults to `true`.
/// * `description(&self) -> Cow<str>`: Returns a description of the command. The default implementation returns "Unknown command".
///
/// # Example
///
/// ```
/// use undo_manager::prelude::*;
///
/// struct Add(i32);
///
/// impl Command for Add {
///     type Context = i32;
///
///     fn execute(&self, ctx: &mut i32) -> Result<()> {
///         *ctx += self.0;
///         Ok(())
///     }
///
///     fn opposite(&self, _ctx: &i32) -> Result<Option<Self>> {
///         Ok(Some(Add(-self.0)))
///     }
/// }
///
/// let mut history = HistoryManager::new();
/// let mut value = 0;
///
/// history.perform(&Add(5), &mut value).unwrap();
/// assert_eq!(value, 5);
///
/// history.undo(&mut value).unwrap();
/// assert_eq!(value, 0);
///
/// history.redo(&mut value).unwrap();
/// assert_eq!(value, 5);
/// ```
pub trait Command {
    type Context;

    /// Applies the command to the given context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperation`](crate::error::Error::InvalidOperation) when the
    /// command does not apply to the current state.
    fn execute(&self, ctx: &mut Self::Context) -> Result<()>;

    /// Builds the command that reverses this one.
    ///
    /// Called with the state as it exists immediately before [`execute`](Self::execute), and
    /// must not mutate it. Returns `Ok(None)` for commands that have no inverse; those must also
    /// return `false` from [`is_undoable`](Self::is_undoable).
    ///
    /// # Errors
    ///
    /// Returns an error when the inverse cannot be derived from the current state.
    fn opposite(&self, ctx: &Self::Context) -> Result<Option<Self>>
    where
        Self: Sized;

    /// Returns whether this command is recorded in history at all.
    fn is_undoable(&self) -> bool {
        true
    }

    /// Returns a description of the command. The default implementation returns "Unknown command".
    fn description(&self) -> Cow<'_, str> {
        Cow::Borrowed("Unknown command")
    }
}
