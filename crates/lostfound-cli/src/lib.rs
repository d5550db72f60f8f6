// Rust guideline compliant 2026-10-19

//! Lostfound CLI library.
//!
//! This library exposes the CLI modules for use in tests and the binary.

pub mod commands;
pub mod context;
pub mod logging;
pub mod output;
pub mod progress;
pub mod terminal;

pub use context::CommandContext;
pub use output::{create_formatter, OutputFormatter, Tab};
pub use terminal::{get_terminal_width, should_use_color, wrap_text};
