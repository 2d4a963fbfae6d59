//! Terminal output formatting
//!
//! Share-text formatting and pretty-printing for the line-based commands.

pub mod display;
pub mod formatters;

pub use display::{print_guess_row, print_statistics, print_summary};
pub use formatters::{format_summary, win_message};
