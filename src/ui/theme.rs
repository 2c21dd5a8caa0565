//! Theme values for the calculator window.
//!
//! All colors and metrics live here so the render functions stay free of
//! magic numbers. Accessed through the global `theme()` function.

use gpui::{Hsla, Pixels, hsla, px};
use lazy_static::lazy_static;

use crate::ui::keypad::ButtonKind;

/// Colors and metrics for the calculator UI.
pub struct CalculatorTheme {
    pub window_background: Hsla,
    pub window_padding: Pixels,

    pub display_height: Pixels,
    pub display_text_color: Hsla,
    pub pending_text_color: Hsla,

    pub keypad_gap: Pixels,
    pub button_height: Pixels,
    pub button_border_radius: Pixels,

    pub digit_button_background: Hsla,
    pub digit_button_hover: Hsla,
    pub function_button_background: Hsla,
    pub function_button_hover: Hsla,
    pub operator_button_background: Hsla,
    pub operator_button_hover: Hsla,
    pub equals_button_background: Hsla,
    pub equals_button_hover: Hsla,

    pub digit_button_text: Hsla,
    pub function_button_text: Hsla,
    pub operator_button_text: Hsla,
    pub equals_button_text: Hsla,
}

impl Default for CalculatorTheme {
    fn default() -> Self {
        Self {
            window_background: hsla(240.0 / 360.0, 0.05, 0.10, 1.0),
            window_padding: px(12.0),

            display_height: px(96.0),
            display_text_color: hsla(0.0, 0.0, 0.95, 1.0),
            pending_text_color: hsla(0.0, 0.0, 0.55, 1.0),

            keypad_gap: px(8.0),
            button_height: px(52.0),
            button_border_radius: px(8.0),

            digit_button_background: hsla(240.0 / 360.0, 0.04, 0.18, 1.0),
            digit_button_hover: hsla(240.0 / 360.0, 0.04, 0.24, 1.0),
            function_button_background: hsla(240.0 / 360.0, 0.03, 0.28, 1.0),
            function_button_hover: hsla(240.0 / 360.0, 0.03, 0.34, 1.0),
            operator_button_background: hsla(210.0 / 360.0, 0.6, 0.5, 0.15),
            operator_button_hover: hsla(210.0 / 360.0, 0.6, 0.5, 0.25),
            equals_button_background: hsla(210.0 / 360.0, 0.7, 0.5, 1.0),
            equals_button_hover: hsla(210.0 / 360.0, 0.7, 0.58, 1.0),

            digit_button_text: hsla(0.0, 0.0, 0.92, 1.0),
            function_button_text: hsla(0.0, 0.0, 0.92, 1.0),
            operator_button_text: hsla(210.0 / 360.0, 0.7, 0.7, 1.0),
            equals_button_text: hsla(0.0, 0.0, 0.98, 1.0),
        }
    }
}

impl CalculatorTheme {
    /// Background color for a keypad button.
    pub fn button_background(&self, kind: ButtonKind) -> Hsla {
        match kind {
            ButtonKind::Digit => self.digit_button_background,
            ButtonKind::Function => self.function_button_background,
            ButtonKind::Operator => self.operator_button_background,
            ButtonKind::Equals => self.equals_button_background,
        }
    }

    /// Hover background color for a keypad button.
    pub fn button_hover(&self, kind: ButtonKind) -> Hsla {
        match kind {
            ButtonKind::Digit => self.digit_button_hover,
            ButtonKind::Function => self.function_button_hover,
            ButtonKind::Operator => self.operator_button_hover,
            ButtonKind::Equals => self.equals_button_hover,
        }
    }

    /// Text color for a keypad button.
    pub fn button_text(&self, kind: ButtonKind) -> Hsla {
        match kind {
            ButtonKind::Digit => self.digit_button_text,
            ButtonKind::Function => self.function_button_text,
            ButtonKind::Operator => self.operator_button_text,
            ButtonKind::Equals => self.equals_button_text,
        }
    }
}

lazy_static! {
    static ref THEME: CalculatorTheme = CalculatorTheme::default();
}

/// Get the global theme.
pub fn theme() -> &'static CalculatorTheme {
    &THEME
}
