//! Presses a row of menu items against one text buffer, undoing and redoing
//! after each press. Set `RUST_LOG=undo_manager=debug` to watch the stacks.

use undo_manager::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "undo_manager=info".into()),
        )
        .init();

    let mut history = HistoryManager::new();
    let mut buffer = TextBuffer::new("Hello World").with_echo(Echo::Stdout);

    let menu_undo = Invoker::undo();
    let menu_redo = Invoker::redo();
    let menu = [
        Invoker::perform(TextCommand::AppendEnd('h')),
        Invoker::perform(TextCommand::DeleteEnd),
        Invoker::perform(TextCommand::DeleteStart),
        Invoker::perform(TextCommand::Capitalize(3)),
        Invoker::perform(TextCommand::Lowercase(0)),
        Invoker::perform(TextCommand::TitleCase),
        Invoker::perform(TextCommand::LowercaseAll),
    ];

    for item in &menu {
        println!("-- {}", item.description());
        item.trigger(&mut history, &mut buffer)?;
        menu_undo.trigger(&mut history, &mut buffer)?;
        menu_redo.trigger(&mut history, &mut buffer)?;
    }

    if let Err(err) = menu_redo.trigger(&mut history, &mut buffer) {
        println!("-- {err}");
    }

    Ok(())
}
