pub mod calculator;
pub mod keymap;
pub mod keypad;
pub mod theme;

pub use calculator::CalculatorView;
pub use theme::{CalculatorTheme, theme};
