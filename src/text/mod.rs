//! A text buffer and the edits that can be performed on it.

mod buffer;
mod commands;

pub use buffer::{Echo, TextBuffer};
pub use commands::TextCommand;
