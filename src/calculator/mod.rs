//! Calculator core: state machine and display formatting.
//!
//! This module provides:
//! - The event-driven state machine that turns digit/operator presses
//!   into a displayed numeric string
//! - Display formatting with thousand separators
//! - Copying the display value to the clipboard

mod clipboard;
mod engine;
mod format;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use engine::{CalculatorEvent, CalculatorState, Operation};
pub use format::{format_display, render_value};
