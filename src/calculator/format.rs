//! Display formatting.
//!
//! Two layers: `render_value` produces the minimal decimal string the
//! engine stores back into its display after a computation, and
//! `format_display` adds thousand separators at render time without
//! disturbing an operand the user is still typing.

/// Convert a numeric value to its minimal decimal representation.
///
/// No grouping and no forced trailing zeros; grouping is applied only at
/// display time by `format_display`. Negative zero and non-finite values
/// render as "0", matching the division-by-zero policy.
pub fn render_value(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Format a display string for rendering with thousand separators and at
/// most 10 fractional digits.
///
/// In-progress input is passed through untouched: a trailing decimal
/// point ("3.") and a trailing zero after the point ("3.50") are both
/// states the user is still typing through. Unparseable input is also
/// passed through rather than failing; the engine never produces it.
pub fn format_display(display: &str) -> String {
    let Ok(value) = display.parse::<f64>() else {
        return display.to_string();
    };

    if display.ends_with('.') {
        return display.to_string();
    }

    if display.contains('.') && display.ends_with('0') {
        return display.to_string();
    }

    if value.fract() == 0.0 && value.abs() < 1e15 {
        return group_digits(&format!("{}", value as i64));
    }

    let formatted = format!("{:.10}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

    match trimmed.split_once('.') {
        Some((int_part, dec_part)) => format!("{}.{}", group_digits(int_part), dec_part),
        None => group_digits(trimmed),
    }
}

/// Insert thousand separators into a plain decimal integer string.
///
/// Works on the digit string directly so values outside the i64 range
/// still group correctly.
fn group_digits(int_part: &str) -> String {
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut reversed = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            reversed.push(',');
        }
        reversed.push(c);
    }

    let grouped: String = reversed.chars().rev().collect();
    format!("{}{}", sign, grouped)
}
