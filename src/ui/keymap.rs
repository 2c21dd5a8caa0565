//! Keyboard bindings for the calculator.
//!
//! Thin glue that maps keystrokes to calculator events. Unrecognized
//! keys map to `None` and are left for the platform to handle.

use gpui::Keystroke;

use crate::calculator::{CalculatorEvent, Operation};

/// Map a resolved key string to a calculator event.
///
/// `key` is either the logical key name ("enter", "backspace", ...) or
/// the typed character ("7", "+", ...).
pub fn event_for_key(key: &str) -> Option<CalculatorEvent> {
    if key.len() == 1
        && let Some(digit) = key.chars().next().and_then(|c| c.to_digit(10))
    {
        return Some(CalculatorEvent::Digit(digit as u8));
    }

    let event = match key {
        "." => CalculatorEvent::Decimal,
        "+" => CalculatorEvent::Operator(Operation::Add),
        "-" => CalculatorEvent::Operator(Operation::Subtract),
        "*" => CalculatorEvent::Operator(Operation::Multiply),
        "/" => CalculatorEvent::Operator(Operation::Divide),
        "%" => CalculatorEvent::Percent,
        "enter" | "=" => CalculatorEvent::Equals,
        "escape" => CalculatorEvent::Clear,
        "backspace" => CalculatorEvent::Backspace,
        _ => return None,
    };

    Some(event)
}

/// Map a GPUI keystroke to a calculator event.
///
/// Keystrokes carrying command-style modifiers are ignored so shortcuts
/// like Ctrl+C keep working. Shifted symbols ("+", "%") arrive through
/// `key_char` on some layouts, so that is checked before the key name.
pub fn event_for_keystroke(keystroke: &Keystroke) -> Option<CalculatorEvent> {
    if keystroke.modifiers.control || keystroke.modifiers.alt || keystroke.modifiers.platform {
        return None;
    }

    if let Some(ch) = keystroke.key_char.as_deref()
        && let Some(event) = event_for_key(ch)
    {
        return Some(event);
    }

    event_for_key(keystroke.key.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::Modifiers;

    #[test]
    fn test_digit_keys() {
        for digit in 0..=9u8 {
            let key = digit.to_string();
            assert_eq!(event_for_key(&key), Some(CalculatorEvent::Digit(digit)));
        }
    }

    #[test]
    fn test_operator_keys() {
        assert_eq!(
            event_for_key("+"),
            Some(CalculatorEvent::Operator(Operation::Add))
        );
        assert_eq!(
            event_for_key("-"),
            Some(CalculatorEvent::Operator(Operation::Subtract))
        );
        assert_eq!(
            event_for_key("*"),
            Some(CalculatorEvent::Operator(Operation::Multiply))
        );
        assert_eq!(
            event_for_key("/"),
            Some(CalculatorEvent::Operator(Operation::Divide))
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(event_for_key("enter"), Some(CalculatorEvent::Equals));
        assert_eq!(event_for_key("="), Some(CalculatorEvent::Equals));
        assert_eq!(event_for_key("escape"), Some(CalculatorEvent::Clear));
        assert_eq!(event_for_key("backspace"), Some(CalculatorEvent::Backspace));
        assert_eq!(event_for_key("."), Some(CalculatorEvent::Decimal));
        assert_eq!(event_for_key("%"), Some(CalculatorEvent::Percent));
    }

    #[test]
    fn test_unrecognized_keys_are_ignored() {
        assert_eq!(event_for_key("a"), None);
        assert_eq!(event_for_key("tab"), None);
        assert_eq!(event_for_key("space"), None);
        assert_eq!(event_for_key("f1"), None);
    }

    #[test]
    fn test_plain_keystrokes_map_to_events() {
        let keystroke = Keystroke::parse("7").unwrap();
        assert_eq!(
            event_for_keystroke(&keystroke),
            Some(CalculatorEvent::Digit(7))
        );

        let keystroke = Keystroke::parse("enter").unwrap();
        assert_eq!(
            event_for_keystroke(&keystroke),
            Some(CalculatorEvent::Equals)
        );

        let keystroke = Keystroke::parse("backspace").unwrap();
        assert_eq!(
            event_for_keystroke(&keystroke),
            Some(CalculatorEvent::Backspace)
        );
    }

    #[test]
    fn test_keystrokes_with_command_modifiers_are_suppressed() {
        for binding in ["ctrl-c", "ctrl-5", "alt-5", "cmd-9"] {
            let keystroke = Keystroke::parse(binding).unwrap();
            assert_eq!(event_for_keystroke(&keystroke), None, "binding {binding}");
        }
    }

    #[test]
    fn test_shifted_symbol_resolves_through_key_char() {
        // "+" typed as shift-= reports the logical key "=" with the
        // produced character in key_char; the character wins.
        let keystroke = Keystroke {
            modifiers: Modifiers {
                shift: true,
                ..Default::default()
            },
            key: "=".to_string(),
            key_char: Some("+".to_string()),
        };
        assert_eq!(
            event_for_keystroke(&keystroke),
            Some(CalculatorEvent::Operator(Operation::Add))
        );
    }

    #[test]
    fn test_shifted_key_without_key_char_falls_back_to_key_name() {
        let keystroke = Keystroke::parse("shift-=").unwrap();
        assert_eq!(
            event_for_keystroke(&keystroke),
            Some(CalculatorEvent::Equals)
        );
    }
}
