//! Display formatting for operand text.
//!
//! Formatting is pure: it reads operand text and returns a new string.

use super::entry::{parse_operand, DIVISION_BY_ZERO_SENTINEL};
use serde::{Deserialize, Serialize};

/// The single formatting hook: how the integer part is grouped.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DisplayFormat {
    /// Inserted between every three integer digits; `None` disables grouping.
    pub group_separator: Option<char>,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            group_separator: Some(','),
        }
    }
}

impl DisplayFormat {
    /// Render operand text for display.
    ///
    /// The error sentinel passes through untouched. Otherwise the integer part
    /// is normalized and grouped (or dropped if it is not a number) and the
    /// fractional part, if any, is appended verbatim after `.`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use abacus::core::DisplayFormat;
    ///
    /// let format = DisplayFormat::default();
    /// assert_eq!(format.format_operand("1234567.250"), "1,234,567.250");
    /// assert_eq!(format.format_operand("0."), "0.");
    /// assert_eq!(format.format_operand(".5"), ".5");
    /// ```
    pub fn format_operand(&self, operand: &str) -> String {
        if operand == DIVISION_BY_ZERO_SENTINEL {
            return operand.to_string();
        }
        // inf / NaN results have no digits to group
        if operand.parse::<f64>().is_ok_and(|v| !v.is_finite()) {
            return operand.to_string();
        }

        let (integer, fraction) = match operand.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (operand, None),
        };

        let integer_display = if parse_operand(integer).is_some() {
            self.group_integer(integer)
        } else {
            String::new()
        };

        match fraction {
            Some(fraction) => format!("{integer_display}.{fraction}"),
            None => integer_display,
        }
    }

    fn group_integer(&self, integer: &str) -> String {
        let (sign, digits) = match integer.strip_prefix('-') {
            Some(digits) => ("-", digits),
            None => ("", integer),
        };
        let digits = digits.trim_start_matches('0');
        let digits = if digits.is_empty() { "0" } else { digits };

        let Some(separator) = self.group_separator else {
            return format!("{sign}{digits}");
        };

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        grouped.push_str(sign);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(separator);
            }
            grouped.push(c);
        }
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        let format = DisplayFormat::default();
        assert_eq!(format.format_operand("0"), "0");
        assert_eq!(format.format_operand("999"), "999");
        assert_eq!(format.format_operand("1000"), "1,000");
        assert_eq!(format.format_operand("1234567"), "1,234,567");
        assert_eq!(format.format_operand("-1234"), "-1,234");
    }

    #[test]
    fn fraction_is_kept_verbatim() {
        let format = DisplayFormat::default();
        assert_eq!(format.format_operand("1234.5000"), "1,234.5000");
        assert_eq!(format.format_operand("12."), "12.");
        assert_eq!(format.format_operand("0.30000000000000004"), "0.30000000000000004");
    }

    #[test]
    fn leading_zeroes_are_normalized() {
        let format = DisplayFormat::default();
        assert_eq!(format.format_operand("0007"), "7");
        assert_eq!(format.format_operand("000"), "0");
    }

    #[test]
    fn unparseable_integer_part_renders_empty() {
        let format = DisplayFormat::default();
        assert_eq!(format.format_operand(".25"), ".25");
        assert_eq!(format.format_operand("-"), "");
        assert_eq!(format.format_operand(""), "");
    }

    #[test]
    fn sentinel_passes_through() {
        let format = DisplayFormat::default();
        assert_eq!(
            format.format_operand(DIVISION_BY_ZERO_SENTINEL),
            DIVISION_BY_ZERO_SENTINEL
        );
    }

    #[test]
    fn non_finite_results_pass_through() {
        let format = DisplayFormat::default();
        assert_eq!(format.format_operand("inf"), "inf");
        assert_eq!(format.format_operand("-inf"), "-inf");
        assert_eq!(format.format_operand("NaN"), "NaN");
    }

    #[test]
    fn custom_and_disabled_separators() {
        let dotted = DisplayFormat {
            group_separator: Some(' '),
        };
        assert_eq!(dotted.format_operand("1234567.8"), "1 234 567.8");

        let plain = DisplayFormat {
            group_separator: None,
        };
        assert_eq!(plain.format_operand("1234567.8"), "1234567.8");
    }

    #[test]
    fn formatting_is_deterministic() {
        let format = DisplayFormat::default();
        let first = format.format_operand("9876543.21");
        let second = format.format_operand("9876543.21");
        assert_eq!(first, second);
    }
}
