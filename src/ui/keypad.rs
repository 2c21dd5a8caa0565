//! Static description of the keypad.
//!
//! The keypad buttons and their grid placement. Rendering lives in
//! `ui::calculator`; this module only says what each button is.

use crate::calculator::{CalculatorEvent, Operation};

/// Styling category for a keypad button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonKind {
    Digit,
    Function,
    Operator,
    Equals,
}

/// One button on the keypad.
pub struct KeypadButton {
    pub label: &'static str,
    pub event: CalculatorEvent,
    pub kind: ButtonKind,
}

impl KeypadButton {
    const fn new(label: &'static str, event: CalculatorEvent, kind: ButtonKind) -> Self {
        Self { label, event, kind }
    }

    const fn digit(label: &'static str, digit: u8) -> Self {
        Self::new(label, CalculatorEvent::Digit(digit), ButtonKind::Digit)
    }
}

/// The keypad grid, top row first.
pub static KEYPAD_LAYOUT: [[KeypadButton; 4]; 5] = [
    [
        KeypadButton::new("C", CalculatorEvent::Clear, ButtonKind::Function),
        KeypadButton::new("±", CalculatorEvent::ToggleSign, ButtonKind::Function),
        KeypadButton::new("%", CalculatorEvent::Percent, ButtonKind::Function),
        KeypadButton::new(
            "÷",
            CalculatorEvent::Operator(Operation::Divide),
            ButtonKind::Operator,
        ),
    ],
    [
        KeypadButton::digit("7", 7),
        KeypadButton::digit("8", 8),
        KeypadButton::digit("9", 9),
        KeypadButton::new(
            "×",
            CalculatorEvent::Operator(Operation::Multiply),
            ButtonKind::Operator,
        ),
    ],
    [
        KeypadButton::digit("4", 4),
        KeypadButton::digit("5", 5),
        KeypadButton::digit("6", 6),
        KeypadButton::new(
            "−",
            CalculatorEvent::Operator(Operation::Subtract),
            ButtonKind::Operator,
        ),
    ],
    [
        KeypadButton::digit("1", 1),
        KeypadButton::digit("2", 2),
        KeypadButton::digit("3", 3),
        KeypadButton::new(
            "+",
            CalculatorEvent::Operator(Operation::Add),
            ButtonKind::Operator,
        ),
    ],
    [
        KeypadButton::new("⌫", CalculatorEvent::Backspace, ButtonKind::Function),
        KeypadButton::digit("0", 0),
        KeypadButton::new(".", CalculatorEvent::Decimal, ButtonKind::Digit),
        KeypadButton::new("=", CalculatorEvent::Equals, ButtonKind::Equals),
    ],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_covers_every_button() {
        // One event per button: digits 0-9, decimal, four operators,
        // equals, clear, sign toggle, percent, backspace.
        let buttons: Vec<_> = KEYPAD_LAYOUT.iter().flatten().collect();
        assert_eq!(buttons.len(), 20);

        let digits = buttons
            .iter()
            .filter(|b| matches!(b.event, CalculatorEvent::Digit(_)))
            .count();
        assert_eq!(digits, 10);
    }

    #[test]
    fn test_keypad_events_are_unique() {
        let events: Vec<_> = KEYPAD_LAYOUT.iter().flatten().map(|b| b.event).collect();
        for (i, a) in events.iter().enumerate() {
            for b in &events[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
