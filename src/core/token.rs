//! Discrete input tokens and the keyboard table that produces them.

use super::operator::Operator;
use serde::{Deserialize, Serialize};

/// One unit of input delivered to the calculator.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Token {
    /// A digit `0`-`9` or the decimal point `.`.
    Digit(char),
    Operator(Operator),
    Equals,
    AllClear,
    Delete,
}

impl Token {
    /// Map a key name to a token.
    ///
    /// Single characters map digits, `.`, the four operator keys and `=`.
    /// Named keys are `Enter`, `Backspace` and `Escape`. Anything else is
    /// unrecognized.
    ///
    /// # Example
    ///
    /// ```rust
    /// use abacus::core::{Operator, Token};
    ///
    /// assert_eq!(Token::from_key("7"), Some(Token::Digit('7')));
    /// assert_eq!(Token::from_key("*"), Some(Token::Operator(Operator::Multiply)));
    /// assert_eq!(Token::from_key("Enter"), Some(Token::Equals));
    /// assert_eq!(Token::from_key("Tab"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => return Some(Self::Equals),
            "Backspace" => return Some(Self::Delete),
            "Escape" => return Some(Self::AllClear),
            _ => {}
        }

        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Map a single typed character to a token.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' | '.' => Some(Self::Digit(c)),
            '=' => Some(Self::Equals),
            _ => Operator::from_key(c).map(Self::Operator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_and_point_map_directly() {
        for c in "0123456789.".chars() {
            assert_eq!(Token::from_key(&c.to_string()), Some(Token::Digit(c)));
        }
    }

    #[test]
    fn operator_keys_map_to_operators() {
        assert_eq!(Token::from_key("/"), Some(Token::Operator(Operator::Divide)));
        assert_eq!(Token::from_key("*"), Some(Token::Operator(Operator::Multiply)));
        assert_eq!(Token::from_key("-"), Some(Token::Operator(Operator::Subtract)));
        assert_eq!(Token::from_key("+"), Some(Token::Operator(Operator::Add)));
    }

    #[test]
    fn command_keys_map_to_commands() {
        assert_eq!(Token::from_key("Enter"), Some(Token::Equals));
        assert_eq!(Token::from_key("="), Some(Token::Equals));
        assert_eq!(Token::from_key("Backspace"), Some(Token::Delete));
        assert_eq!(Token::from_key("Escape"), Some(Token::AllClear));
    }

    #[test]
    fn unknown_keys_are_unrecognized() {
        assert_eq!(Token::from_key(""), None);
        assert_eq!(Token::from_key("a"), None);
        assert_eq!(Token::from_key("Delete"), None);
        assert_eq!(Token::from_key("enter"), None);
        assert_eq!(Token::from_key("12"), None);
        assert_eq!(Token::from_key("×"), None);
    }
}
