//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, HistoryEntry, InputMode, Message, MessageStyle, run_tui};
pub use rendering::ui;
