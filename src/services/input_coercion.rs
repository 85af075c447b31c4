//! Coercion of raw form values into the numbers the quantifier works on.
//!
//! Anything missing, null, empty or non-numeric becomes `0.0`. Text is read
//! from its longest leading numeric prefix, so `"12.5 days"` is `12.5`.

use serde::{Deserialize, Serialize};

use crate::domain::estimate::{AllocationModel, DayType};

/// A field value as it arrives from a form or a hand-edited register file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawInput {
    Number(f64),
    Flag(bool),
    Text(String),
}

impl From<f64> for RawInput {
    fn from(value: f64) -> Self {
        RawInput::Number(value)
    }
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        RawInput::Text(value.to_string())
    }
}

pub fn coerce_number(raw: Option<&RawInput>) -> f64 {
    let value = match raw {
        None | Some(RawInput::Flag(_)) => None,
        Some(RawInput::Number(value)) => Some(*value),
        Some(RawInput::Text(text)) => parse_leading_number(text),
    };

    match value {
        // -0.0 and NaN are falsy too
        Some(value) if value.is_finite() && value != 0.0 => value,
        Some(_) | None => {
            if let Some(RawInput::Text(text)) = raw {
                if !text.trim().is_empty() && !is_zero_literal(text) {
                    log::debug!("coercing non-numeric input {text:?} to 0");
                }
            }
            0.0
        }
    }
}

/// Like [`coerce_number`] but keeps "absent" distinct from zero. Used for the
/// contract cap, where absent and zero both mean "no cap".
pub fn coerce_optional_number(raw: Option<&RawInput>) -> Option<f64> {
    raw.map(|value| coerce_number(Some(value)))
}

pub fn coerce_allocation_model(raw: Option<&str>) -> AllocationModel {
    raw.map(AllocationModel::parse_lenient).unwrap_or_default()
}

pub fn coerce_day_type(raw: Option<&str>) -> DayType {
    raw.map(DayType::parse_lenient).unwrap_or_default()
}

fn is_zero_literal(text: &str) -> bool {
    parse_leading_number(text).is_some_and(|value| value == 0.0)
}

/// Parses the longest prefix of `text` (after leading whitespace) that forms
/// a decimal number: optional sign, digits with an optional fraction, and an
/// optional exponent.
fn parse_leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    if text[end..].starts_with("Infinity") {
        return None;
    }

    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digit_count = end - digits_start;
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        let fraction_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        digit_count += end - fraction_start;
    }
    if digit_count == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exponent_end = end + 1;
        if exponent_end < bytes.len() && matches!(bytes[exponent_end], b'+' | b'-') {
            exponent_end += 1;
        }
        let exponent_digits_start = exponent_end;
        while exponent_end < bytes.len() && bytes[exponent_end].is_ascii_digit() {
            exponent_end += 1;
        }
        if exponent_end > exponent_digits_start {
            end = exponent_end;
        }
    }

    text[..end].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> RawInput {
        RawInput::from(value)
    }

    #[test]
    fn missing_input_coerces_to_zero() {
        assert_eq!(coerce_number(None), 0.0);
    }

    #[test]
    fn numbers_pass_through() {
        assert_eq!(coerce_number(Some(&RawInput::Number(2000.0))), 2000.0);
        assert_eq!(coerce_number(Some(&RawInput::Number(-3.5))), -3.5);
    }

    #[test]
    fn text_is_read_from_its_numeric_prefix() {
        let test_cases = vec![
            ("1000", 1000.0),
            ("  12.5 days", 12.5),
            ("0.4", 0.4),
            (".75", 0.75),
            ("5.", 5.0),
            ("-2", -2.0),
            ("+3", 3.0),
            ("1e3", 1000.0),
            ("2e", 2.0),
            ("7e+x", 7.0),
            ("4,500", 4.0),
        ];

        for (input, expected) in test_cases {
            assert_eq!(
                coerce_number(Some(&text(input))),
                expected,
                "unexpected value for {input:?}"
            );
        }
    }

    #[test]
    fn non_numeric_text_coerces_to_zero() {
        for input in ["", "   ", "abc", "$1000", ".", "-", "e5", "Infinity", "-Infinity"] {
            assert_eq!(coerce_number(Some(&text(input))), 0.0, "input {input:?}");
        }
    }

    #[test]
    fn flags_and_non_finite_numbers_coerce_to_zero() {
        assert_eq!(coerce_number(Some(&RawInput::Flag(true))), 0.0);
        assert_eq!(coerce_number(Some(&RawInput::Number(f64::NAN))), 0.0);
        assert_eq!(coerce_number(Some(&RawInput::Number(f64::INFINITY))), 0.0);
    }

    #[test]
    fn negative_zero_coerces_to_positive_zero() {
        let value = coerce_number(Some(&text("-0")));
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
    }

    #[test]
    fn optional_number_keeps_absence() {
        assert_eq!(coerce_optional_number(None), None);
        assert_eq!(coerce_optional_number(Some(&text("n/a"))), Some(0.0));
        assert_eq!(coerce_optional_number(Some(&text("4500"))), Some(4500.0));
    }

    #[test]
    fn selections_fall_back_to_defaults() {
        assert_eq!(coerce_allocation_model(None), AllocationModel::None);
        assert_eq!(coerce_allocation_model(Some("fixedCap")), AllocationModel::FixedCap);
        assert_eq!(coerce_day_type(None), DayType::Calendar);
        assert_eq!(coerce_day_type(Some("business")), DayType::Business);
    }
}
