use std::num::NonZeroUsize;

/// Settings for a [`HistoryManager`](crate::history_manager::HistoryManager).
///
/// The default is unlimited history that keeps the redo stack when a new
/// command is performed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Maximum depth of each stack. `None` means unlimited.
    pub history_limit: Option<NonZeroUsize>,
    /// Clear the redo stack whenever a new undoable command is performed.
    pub clear_redo_on_perform: bool,
}

impl HistoryConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_history_limit(mut self, limit: NonZeroUsize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    #[must_use]
    pub fn clear_redo_on_perform(mut self, clear: bool) -> Self {
        self.clear_redo_on_perform = clear;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unlimited_and_keeps_redo() {
        let config = HistoryConfig::default();
        assert!(config.history_limit.is_none());
        assert!(!config.clear_redo_on_perform);
    }

    #[test]
    fn test_builder() {
        let config = HistoryConfig::new()
            .with_history_limit(NonZeroUsize::new(3).unwrap())
            .clear_redo_on_perform(true);

        assert_eq!(config.history_limit.map(NonZeroUsize::get), Some(3));
        assert!(config.clear_redo_on_perform);
    }
}
