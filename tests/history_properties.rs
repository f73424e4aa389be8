//! Property tests for the two-stack history:
//!
//! 1. perform then undo restores the previous state (for every command except
//!    title-casing, whose lowercase-all inverse is approximate)
//! 2. N undos then N redos replay the forward states exactly
//! 3. each operation moves exactly one entry between stacks
//! 4. undo/redo on an empty stack fails without touching the state

use proptest::prelude::*;
use undo_manager::prelude::*;

fn text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z ]{0,12}"
}

fn letter_strategy() -> impl Strategy<Value = char> {
    prop_oneof![
        proptest::char::range('a', 'z'),
        proptest::char::range('A', 'Z'),
    ]
}

/// Commands whose opposite is an exact inverse on every state. Leaves out `TitleCase`.
fn command_strategy() -> impl Strategy<Value = TextCommand> {
    prop_oneof![
        letter_strategy().prop_map(TextCommand::AppendEnd),
        letter_strategy().prop_map(TextCommand::AppendStart),
        Just(TextCommand::DeleteEnd),
        Just(TextCommand::DeleteStart),
        (0usize..12).prop_map(TextCommand::Capitalize),
        (0usize..12).prop_map(TextCommand::Lowercase),
        Just(TextCommand::LowercaseAll),
    ]
}

proptest! {
    #[test]
    fn perform_then_undo_restores_state(
        start in text_strategy(),
        command in command_strategy(),
    ) {
        let mut history = HistoryManager::new();
        let mut buffer = TextBuffer::new(start.clone());

        if history.perform(&command, &mut buffer).is_ok() {
            history.undo(&mut buffer).unwrap();
        } else {
            prop_assert!(!history.can_undo());
        }

        prop_assert_eq!(buffer.as_str(), start.as_str());
    }

    #[test]
    fn undo_redo_replays_forward_states(
        start in text_strategy(),
        commands in prop::collection::vec(command_strategy(), 0..40),
    ) {
        let mut history = HistoryManager::new();
        let mut buffer = TextBuffer::new(start.clone());
        let mut forward = vec![start];

        for command in &commands {
            if history.perform(command, &mut buffer).is_ok() {
                forward.push(buffer.to_string());
            }
        }
        let performed = forward.len() - 1;
        prop_assert_eq!(history.undo_len(), performed);

        for expected in forward.iter().rev().skip(1) {
            history.undo(&mut buffer).unwrap();
            prop_assert_eq!(buffer.as_str(), expected.as_str());
        }
        prop_assert!(!history.can_undo());
        prop_assert_eq!(history.redo_len(), performed);

        for expected in forward.iter().skip(1) {
            history.redo(&mut buffer).unwrap();
            prop_assert_eq!(buffer.as_str(), expected.as_str());
        }
        prop_assert!(!history.can_redo());
        prop_assert_eq!(history.undo_len(), performed);
    }

    #[test]
    fn each_operation_moves_one_entry(
        start in text_strategy(),
        ops in prop::collection::vec((0u8..3, command_strategy()), 0..60),
    ) {
        let mut history = HistoryManager::new();
        let mut buffer = TextBuffer::new(start);

        for (kind, command) in ops {
            let (undo_before, redo_before) = (history.undo_len(), history.redo_len());
            let text_before = buffer.to_string();

            let (result, expected) = match kind {
                0 => (history.perform(&command, &mut buffer), (undo_before + 1, redo_before)),
                1 => (history.undo(&mut buffer), (undo_before.wrapping_sub(1), redo_before + 1)),
                _ => (history.redo(&mut buffer), (undo_before + 1, redo_before.wrapping_sub(1))),
            };

            if result.is_ok() {
                prop_assert_eq!((history.undo_len(), history.redo_len()), expected);
            } else {
                prop_assert_eq!((history.undo_len(), history.redo_len()), (undo_before, redo_before));
                prop_assert_eq!(buffer.as_str(), text_before.as_str());
            }
            prop_assert_eq!(history.current_target(), Stack::Undo);
        }
    }

    #[test]
    fn empty_history_is_guarded(start in text_strategy()) {
        let mut history = HistoryManager::<TextCommand>::new();
        let mut buffer = TextBuffer::new(start.clone());

        prop_assert_eq!(history.undo(&mut buffer), Err(Error::EmptyHistory(Stack::Undo)));
        prop_assert_eq!(history.redo(&mut buffer), Err(Error::EmptyHistory(Stack::Redo)));
        prop_assert_eq!(buffer.as_str(), start.as_str());
    }
}
