//! The calculator state machine.
//!
//! A small reducer over four pieces of state: the display string being
//! edited, the stored left operand, the pending operation, and a flag
//! marking that the next digit starts a fresh operand. Every operation is
//! total; there is no input sequence that fails.

use crate::calculator::format::render_value;

/// A binary arithmetic operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Apply the operation to two operands.
    ///
    /// Division by zero yields 0 rather than infinity; the widget never
    /// shows an error state.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    0.0
                } else {
                    a / b
                }
            }
        }
    }

    /// The symbol shown on the keypad and in the pending-operation line.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }
}

/// A discrete input event, produced by a keypad button or a keystroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalculatorEvent {
    /// A digit 0..=9.
    Digit(u8),
    /// The decimal point.
    Decimal,
    /// One of the four binary operators.
    Operator(Operation),
    /// The "=" action.
    Equals,
    /// Reset to the initial state.
    Clear,
    /// Delete the last character of the current operand.
    Backspace,
    /// Negate the current operand.
    ToggleSign,
    /// Divide the current operand by 100.
    Percent,
}

/// The complete state of the calculator widget.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorState {
    /// String representation of the operand currently being edited.
    display: String,
    /// Left operand of a pending binary operation.
    previous_value: Option<f64>,
    /// The pending operation; set and cleared together with
    /// `previous_value`.
    operation: Option<Operation>,
    /// True immediately after an operator or equals, meaning the next
    /// digit replaces the display instead of appending to it.
    awaiting_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            previous_value: None,
            operation: None,
            awaiting_operand: false,
        }
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The operand currently being edited, as entered.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The stored left operand and pending operator, if a binary
    /// operation is in progress.
    pub fn pending(&self) -> Option<(f64, Operation)> {
        match (self.previous_value, self.operation) {
            (Some(value), Some(operation)) => Some((value, operation)),
            _ => None,
        }
    }

    /// Dispatch a single input event. Buttons and keystrokes both funnel
    /// through here.
    pub fn apply(&mut self, event: CalculatorEvent) {
        match event {
            CalculatorEvent::Digit(digit) => self.input_digit(digit),
            CalculatorEvent::Decimal => self.input_decimal(),
            CalculatorEvent::Operator(operation) => self.perform_operation(operation),
            CalculatorEvent::Equals => self.calculate(),
            CalculatorEvent::Clear => self.clear(),
            CalculatorEvent::Backspace => self.backspace(),
            CalculatorEvent::ToggleSign => self.toggle_sign(),
            CalculatorEvent::Percent => self.input_percent(),
        }
    }

    /// Enter a digit, starting a fresh operand if one is awaited.
    pub fn input_digit(&mut self, digit: u8) {
        debug_assert!(digit <= 9);
        let c = (b'0' + digit) as char;

        if self.awaiting_operand {
            self.display = c.to_string();
            self.awaiting_operand = false;
        } else if self.display == "0" {
            self.display = c.to_string();
        } else {
            self.display.push(c);
        }
    }

    /// Enter the decimal point. A no-op if the current operand already
    /// contains one.
    pub fn input_decimal(&mut self) {
        if self.awaiting_operand {
            self.display = "0.".to_string();
            self.awaiting_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Reset to the initial state. Always available as an escape hatch.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Delete the last character of the current operand. A no-op while a
    /// fresh operand is awaited.
    pub fn backspace(&mut self) {
        if self.awaiting_operand {
            return;
        }

        self.display.pop();

        // Deleting the digits of a negative number can leave a bare "-";
        // normalize it so the display always parses.
        if self.display.is_empty() || self.display == "-" {
            self.display = "0".to_string();
        }
    }

    /// Negate the current operand, re-rendering it numerically so "0"
    /// stays "0" rather than becoming "-0".
    pub fn toggle_sign(&mut self) {
        self.display = render_value(-self.current_value());
    }

    /// Divide the current operand by 100.
    pub fn input_percent(&mut self) {
        self.display = render_value(self.current_value() / 100.0);
    }

    /// Select an operator. If an operation is already pending its result
    /// is computed first, so consecutive operators chain left-to-right
    /// with no precedence.
    pub fn perform_operation(&mut self, next: Operation) {
        let input_value = self.current_value();

        if self.previous_value.is_none() {
            self.previous_value = Some(input_value);
        } else if let Some(operation) = self.operation
            && let Some(previous) = self.previous_value
        {
            let result = operation.apply(previous, input_value);
            self.display = render_value(result);
            self.previous_value = Some(result);
        }

        self.operation = Some(next);
        self.awaiting_operand = true;
    }

    /// The "=" action. A no-op unless an operation is pending. The
    /// pending state is cleared afterwards, but a following operator
    /// press recaptures the result as its left operand.
    pub fn calculate(&mut self) {
        if let Some(operation) = self.operation.take()
            && let Some(previous) = self.previous_value.take()
        {
            let result = operation.apply(previous, self.current_value());
            self.display = render_value(result);
            self.awaiting_operand = true;
        }
    }

    /// Parse the display as a number. The input methods keep the display
    /// parseable, so the fallback is unreachable in practice.
    fn current_value(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }
}
