use std::borrow::Cow;

use crate::{error::Result, history_manager::HistoryManager, traits::command::Command};

/// What an [`Invoker`] does when triggered.
///
/// `Undo` and `Redo` drive the history itself, so they are never recorded and
/// each one's opposite is the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action<C> {
    Perform(C),
    Undo,
    Redo,
}

impl<C: Command> Action<C> {
    #[must_use]
    pub fn is_undoable(&self) -> bool {
        match self {
            Self::Perform(command) => command.is_undoable(),
            Self::Undo | Self::Redo => false,
        }
    }

    /// The paired history action for `Undo`/`Redo`.
    ///
    /// A `Perform` action has none here; the history manager records the command's own inverse
    /// when it runs.
    #[must_use]
    pub fn opposite(&self) -> Option<Self> {
        match self {
            Self::Perform(_) => None,
            Self::Undo => Some(Self::Redo),
            Self::Redo => Some(Self::Undo),
        }
    }

    #[must_use]
    pub fn description(&self) -> Cow<'_, str> {
        match self {
            Self::Perform(command) => command.description(),
            Self::Undo => Cow::Borrowed("Undo"),
            Self::Redo => Cow::Borrowed("Redo"),
        }
    }
}

impl<C> From<C> for Action<C> {
    fn from(command: C) -> Self {
        Self::Perform(command)
    }
}

/// A trigger such as a menu item or button that holds one action.
///
/// # Example
///
/// ```
/// use undo_manager::prelude::*;
///
/// let mut history = HistoryManager::new();
/// let mut buffer = TextBuffer::new("Hello World");
///
/// let mut item = Invoker::perform(TextCommand::AppendEnd('!'));
/// let undo = Invoker::undo();
///
/// item.trigger(&mut history, &mut buffer).unwrap();
/// assert_eq!(buffer.as_str(), "Hello World!");
///
/// undo.trigger(&mut history, &mut buffer).unwrap();
/// assert_eq!(buffer.as_str(), "Hello World");
///
/// item.set_command(TextCommand::DeleteStart);
/// item.trigger(&mut history, &mut buffer).unwrap();
/// assert_eq!(buffer.as_str(), "ello World");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoker<C> {
    action: Action<C>,
}

impl<C: Command> Invoker<C> {
    #[must_use]
    pub fn new(action: impl Into<Action<C>>) -> Self {
        Self {
            action: action.into(),
        }
    }

    #[must_use]
    pub fn perform(command: C) -> Self {
        Self {
            action: Action::Perform(command),
        }
    }

    #[must_use]
    pub fn undo() -> Self {
        Self {
            action: Action::Undo,
        }
    }

    #[must_use]
    pub fn redo() -> Self {
        Self {
            action: Action::Redo,
        }
    }

    /// Replaces the held action.
    pub fn set_command(&mut self, action: impl Into<Action<C>>) {
        self.action = action.into();
    }

    #[must_use]
    pub fn action(&self) -> &Action<C> {
        &self.action
    }

    #[must_use]
    pub fn description(&self) -> Cow<'_, str> {
        self.action.description()
    }

    /// Forwards the held action to `history`.
    ///
    /// # Errors
    ///
    /// Returns whatever [`HistoryManager::perform`], [`HistoryManager::undo`] or
    /// [`HistoryManager::redo`] returns.
    pub fn trigger(&self, history: &mut HistoryManager<C>, ctx: &mut C::Context) -> Result<()> {
        match &self.action {
            Action::Perform(command) => history.perform(command, ctx),
            Action::Undo => history.undo(ctx),
            Action::Redo => history.redo(ctx),
        }
    }
}
