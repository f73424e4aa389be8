#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::style)]
#![warn(clippy::correctness)]
#![warn(clippy::complexity)]
#![warn(clippy::suspicious)]
#![warn(clippy::cargo)]

//! Unlimited undo/redo for commands that know how to build their own inverse.
//!
//! A [`HistoryManager`](history_manager::HistoryManager) records the opposite of
//! every command it performs. Undoing performs that opposite and records *its*
//! opposite on the redo stack, and redoing does the same in reverse.

pub mod concurrent_history;
pub mod config;
pub mod error;
pub mod history_manager;
pub mod invoker;
pub mod text;
pub mod traits;

pub mod prelude {
	pub use crate::concurrent_history::ConcurrentHistory;
	pub use crate::config::HistoryConfig;
	pub use crate::error::{Error, Result};
	pub use crate::history_manager::{HistoryManager, Stack};
	pub use crate::invoker::{Action, Invoker};
	pub use crate::text::{Echo, TextBuffer, TextCommand};
	pub use crate::traits::command::Command;
}
