// SPDX-License-Identifier: MIT OR Apache-2.0

//! Load-time classification of raw property values.
//!
//! Each value is classified once when it enters the store. Accessors consult
//! the recorded [`Shape`] to decide whether a request can succeed at all, and
//! only then parse the raw text for the requested width.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The apparent syntactic class of a stored value.
///
/// Classification rules, checked in order:
///
/// 1. `Integer`: an optional `+` or `-` followed by one or more ASCII digits,
///    of any magnitude.
/// 2. `Decimal`: any other text that parses as an `f64` literal and contains
///    at least one ASCII digit. `inf` and `NaN` spellings stay `Text`.
/// 3. `Boolean`: `true` or `false`, ignoring ASCII case.
/// 4. `Text`: everything else, including the empty value.
///
/// # Examples
///
/// ```
/// use typedprops::domain::Shape;
///
/// assert_eq!(Shape::classify("-3"), Shape::Integer);
/// assert_eq!(Shape::classify("3.14"), Shape::Decimal);
/// assert_eq!(Shape::classify("TRUE"), Shape::Boolean);
/// assert_eq!(Shape::classify("Hello World!"), Shape::Text);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    /// Signed base-10 integer literal.
    Integer,
    /// Decimal or exponent floating-point literal.
    Decimal,
    /// `true` / `false` keyword.
    Boolean,
    /// Plain text.
    Text,
}

impl Shape {
    /// Classifies a raw value.
    pub fn classify(raw: &str) -> Shape {
        if is_integer_literal(raw) {
            Shape::Integer
        } else if is_decimal_literal(raw) {
            Shape::Decimal
        } else if raw.eq_ignore_ascii_case("true") || raw.eq_ignore_ascii_case("false") {
            Shape::Boolean
        } else {
            Shape::Text
        }
    }

    /// Returns `true` for `Integer` and `Decimal`.
    pub fn is_numeric(self) -> bool {
        matches!(self, Shape::Integer | Shape::Decimal)
    }

    /// Returns `true` for shapes that read back as strings (`Text` and `Boolean`).
    pub fn is_textual(self) -> bool {
        !self.is_numeric()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Integer => "integer",
            Shape::Decimal => "decimal",
            Shape::Boolean => "boolean",
            Shape::Text => "text",
        };
        f.write_str(name)
    }
}

fn is_integer_literal(raw: &str) -> bool {
    let digits = raw.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_decimal_literal(raw: &str) -> bool {
    raw.bytes().any(|b| b.is_ascii_digit()) && raw.parse::<f64>().is_ok()
}
