use std::{collections::VecDeque, fmt, num::NonZeroUsize};

use tracing::{debug, trace, warn};

use crate::{
    config::HistoryConfig,
    error::{Error, Result},
    traits::command::Command,
};

/// Selects one of the two history stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stack {
    Undo,
    Redo,
}

impl Stack {
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Undo => Self::Redo,
            Self::Redo => Self::Undo,
        }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undo => f.write_str("undo"),
            Self::Redo => f.write_str("redo"),
        }
    }
}

/// Two-stack undo/redo engine.
///
/// Every stored command is the inverse of something that already happened.
/// Undo pops the top of the undo stack and performs it with the redo stack as
/// the current target, so the inverse of the inverse lands on the redo stack.
/// Redo does the same in the other direction.
pub struct HistoryManager<C: Command> {
    undo: VecDeque<C>,
    redo: VecDeque<C>,
    target: Stack,
    history_limit: Option<NonZeroUsize>,
    clear_redo_on_perform: bool,
}

impl<C: Command> HistoryManager<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(HistoryConfig::default())
    }

    #[must_use]
    pub fn with_config(config: HistoryConfig) -> Self {
        let capacity = config.history_limit.map_or(0, NonZeroUsize::get);

        Self {
            undo: VecDeque::with_capacity(capacity),
            redo: VecDeque::with_capacity(capacity),
            target: Stack::Undo,
            history_limit: config.history_limit,
            clear_redo_on_perform: config.clear_redo_on_perform,
        }
    }

    /// Performs `command` and records its inverse on the undo stack.
    ///
    /// The inverse is computed from the state right before `execute`. Nothing is recorded when
    /// either step fails.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Command::opposite`] and [`Command::execute`], and returns
    /// [`Error::NonInvertibleCommand`] for an undoable command that produced no inverse.
    pub fn perform(&mut self, command: &C, ctx: &mut C::Context) -> Result<()> {
        debug!(
            command = %command.description(),
            undo_depth = self.undo.len(),
            redo_depth = self.redo.len(),
            "perform"
        );
        self.record_and_execute(command, ctx)?;

        if self.clear_redo_on_perform && command.is_undoable() && !self.redo.is_empty() {
            debug!(dropped = self.redo.len(), "clearing redo history");
            self.redo.clear();
        }

        Ok(())
    }

    /// Reverts the most recent command.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyHistory`] when there is nothing to undo. Errors from the replayed
    /// command leave both stacks as they were.
    pub fn undo(&mut self, ctx: &mut C::Context) -> Result<()> {
        self.replay(Stack::Undo, ctx)
    }

    /// Re-applies the most recently undone command.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyHistory`] when there is nothing to redo. Errors from the replayed
    /// command leave both stacks as they were.
    pub fn redo(&mut self, ctx: &mut C::Context) -> Result<()> {
        self.replay(Stack::Redo, ctx)
    }

    /// Performs each command in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first error; commands before it stay performed and recorded.
    pub fn batch_perform<I>(&mut self, commands: I, ctx: &mut C::Context) -> Result<()>
    where
        I: IntoIterator<Item = C>,
    {
        for command in commands {
            self.perform(&command, ctx)?;
        }

        Ok(())
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Stored inverses on the undo stack, most recent last.
    #[must_use]
    pub fn undo_history(&self) -> Option<Vec<&C>> {
        if self.undo.is_empty() {
            None
        } else {
            Some(self.undo.iter().collect())
        }
    }

    /// Stored inverses on the redo stack, most recent last.
    #[must_use]
    pub fn redo_history(&self) -> Option<Vec<&C>> {
        if self.redo.is_empty() {
            None
        } else {
            Some(self.redo.iter().collect())
        }
    }

    /// The stack that receives the next recorded inverse.
    #[must_use]
    pub fn current_target(&self) -> Stack {
        self.target
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    /// Caps both stacks at `limit`, dropping the oldest entries right away.
    pub fn set_history_limit(&mut self, limit: NonZeroUsize) {
        self.history_limit = Some(limit);
        let limit = limit.get();

        while self.undo.len() > limit {
            self.undo.pop_front();
        }

        while self.redo.len() > limit {
            self.redo.pop_front();
        }
    }

    pub fn clear_history_limit(&mut self) {
        self.history_limit = None;
    }

    pub fn set_clear_redo_on_perform(&mut self, clear: bool) {
        self.clear_redo_on_perform = clear;
    }

    fn record_and_execute(&mut self, command: &C, ctx: &mut C::Context) -> Result<()> {
        let inverse = if command.is_undoable() {
            let inverse = command
                .opposite(ctx)?
                .ok_or_else(|| Error::NonInvertibleCommand {
                    description: command.description().into_owned(),
                })?;
            Some(inverse)
        } else {
            None
        };

        command.execute(ctx)?;

        if let Some(inverse) = inverse {
            self.push(self.target, inverse);
        }

        Ok(())
    }

    fn replay(&mut self, from: Stack, ctx: &mut C::Context) -> Result<()> {
        let Some(command) = self.stack_mut(from).pop_back() else {
            return Err(Error::EmptyHistory(from));
        };

        if !command.is_undoable() {
            let description = command.description().into_owned();
            self.stack_mut(from).push_back(command);
            return Err(Error::NonInvertibleCommand { description });
        }

        debug!(
            direction = %from,
            command = %command.description(),
            undo_depth = self.undo.len(),
            redo_depth = self.redo.len(),
            "replay"
        );

        self.target = from.other();
        let result = self.record_and_execute(&command, ctx);
        self.target = Stack::Undo;

        if let Err(err) = result {
            warn!(direction = %from, error = %err, "replay failed, restoring command");
            self.stack_mut(from).push_back(command);
            return Err(err);
        }

        Ok(())
    }

    fn push(&mut self, onto: Stack, command: C) {
        let limit = self.history_limit;
        let stack = self.stack_mut(onto);

        if let Some(limit) = limit {
            while stack.len() >= limit.get() {
                stack.pop_front();
                trace!(stack = %onto, "evicted oldest entry");
            }
        }

        trace!(stack = %onto, command = %command.description(), "push");
        stack.push_back(command);
    }

    fn stack_mut(&mut self, stack: Stack) -> &mut VecDeque<C> {
        match stack {
            Stack::Undo => &mut self.undo,
            Stack::Redo => &mut self.redo,
        }
    }
}

impl<C: Command> Default for HistoryManager<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Command> fmt::Debug for HistoryManager<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryManager")
            .field("undo_len", &self.undo.len())
            .field("redo_len", &self.redo.len())
            .field("target", &self.target)
            .field("history_limit", &self.history_limit)
            .field("clear_redo_on_perform", &self.clear_redo_on_perform)
            .finish()
    }
}
