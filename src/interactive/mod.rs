//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, CheckRequest, Message, MessageStyle, run_tui};
