use std::{fmt, sync::Arc};

use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};

use crate::{
    config::HistoryConfig,
    error::Result,
    history_manager::HistoryManager,
    invoker::Invoker,
    traits::command::Command,
};

struct Session<C: Command> {
    history: HistoryManager<C>,
    state: C::Context,
}

/// A [`HistoryManager`] and the state it edits, shared between threads.
///
/// Both live behind a single lock, so every `perform`, `undo` and `redo`
/// (pop, retarget, push, execute) is atomic with respect to other callers.
///
/// # Examples
///
/// ```
/// use std::thread;
/// use undo_manager::prelude::*;
///
/// let shared = ConcurrentHistory::new(HistoryConfig::default(), TextBuffer::new("ab"));
///
/// let worker = {
///     let shared = shared.clone();
///     thread::spawn(move || shared.perform(&TextCommand::AppendEnd('c')))
/// };
/// worker.join().unwrap().unwrap();
///
/// assert_eq!(shared.with_state(|buffer| buffer.to_string()), "abc");
/// shared.undo().unwrap();
/// assert_eq!(shared.state().as_str(), "ab");
/// ```
pub struct ConcurrentHistory<C: Command> {
    session: Mutex<Session<C>>,
}

impl<C: Command> ConcurrentHistory<C> {
    #[must_use]
    pub fn new(config: HistoryConfig, state: C::Context) -> Arc<Self> {
        Arc::new(Self {
            session: Mutex::new(Session {
                history: HistoryManager::with_config(config),
                state,
            }),
        })
    }

    /// See [`HistoryManager::perform`].
    ///
    /// # Errors
    ///
    /// Same as [`HistoryManager::perform`].
    pub fn perform(&self, command: &C) -> Result<()> {
        let mut session = self.session.lock();
        let Session { history, state } = &mut *session;
        history.perform(command, state)
    }

    /// See [`HistoryManager::undo`].
    ///
    /// # Errors
    ///
    /// Same as [`HistoryManager::undo`].
    pub fn undo(&self) -> Result<()> {
        let mut session = self.session.lock();
        let Session { history, state } = &mut *session;
        history.undo(state)
    }

    /// See [`HistoryManager::redo`].
    ///
    /// # Errors
    ///
    /// Same as [`HistoryManager::redo`].
    pub fn redo(&self) -> Result<()> {
        let mut session = self.session.lock();
        let Session { history, state } = &mut *session;
        history.redo(state)
    }

    /// Triggers `invoker` against this history while holding the lock.
    ///
    /// # Errors
    ///
    /// Same as [`Invoker::trigger`].
    pub fn trigger(&self, invoker: &Invoker<C>) -> Result<()> {
        let mut session = self.session.lock();
        let Session { history, state } = &mut *session;
        invoker.trigger(history, state)
    }

    /// Performs all commands under one lock acquisition.
    ///
    /// # Errors
    ///
    /// Same as [`HistoryManager::batch_perform`].
    pub fn batch_perform<I>(&self, commands: I) -> Result<()>
    where
        I: IntoIterator<Item = C>,
    {
        let mut session = self.session.lock();
        let Session { history, state } = &mut *session;
        history.batch_perform(commands, state)
    }

    #[must_use]
    pub fn with_state<R>(&self, f: impl FnOnce(&C::Context) -> R) -> R {
        f(&self.session.lock().state)
    }

    /// Locks the session and returns a guard over the state. Blocks history operations until
    /// dropped.
    #[must_use]
    pub fn state(&self) -> MappedMutexGuard<'_, C::Context> {
        MutexGuard::map(self.session.lock(), |session| &mut session.state)
    }

    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.session.lock().history.undo_len()
    }

    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.session.lock().history.redo_len()
    }

    /// Consumes the history and returns the manager and state.
    ///
    /// # Errors
    ///
    /// Returns the `Arc` back if other references to it still exist.
    pub fn into_parts(this: Arc<Self>) -> Result<(HistoryManager<C>, C::Context), Arc<Self>> {
        let this = Arc::try_unwrap(this)?;
        let Session { history, state } = this.session.into_inner();
        Ok((history, state))
    }
}

impl<C> fmt::Debug for ConcurrentHistory<C>
where
    C: Command,
    C::Context: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.session.try_lock() {
            Some(session) => f
                .debug_struct("ConcurrentHistory")
                .field("history", &session.history)
                .field("state", &session.state)
                .finish(),
            None => write!(f, "ConcurrentHistory(<locked>)"),
        }
    }
}
