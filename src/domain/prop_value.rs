// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property value type with strict typed conversions.
//!
//! A [`PropValue`] keeps the raw text exactly as it appeared after the first
//! `=` on its line, together with the [`Shape`] recorded when it was created.
//! Conversions take the key only to build precise errors.

use crate::domain::errors::{PropsError, Result};
use crate::domain::shape::Shape;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A raw property value plus its load-time shape.
///
/// # Examples
///
/// ```
/// use typedprops::domain::{PropValue, Shape};
///
/// let value = PropValue::from("-3");
/// assert_eq!(value.shape(), Shape::Integer);
/// assert_eq!(value.as_i32("NEGATIVE").unwrap(), -3);
/// assert!(value.as_string("NEGATIVE").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PropValue {
    raw: String,
    shape: Shape,
}

impl PropValue {
    /// Creates a new `PropValue`, classifying its shape.
    pub fn new(raw: String) -> Self {
        let shape = Shape::classify(&raw);
        PropValue { raw, shape }
    }

    /// Returns the raw text.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the shape recorded at creation.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Converts the value into its raw `String`.
    pub fn into_string(self) -> String {
        self.raw
    }

    /// Reads the value as a string.
    ///
    /// Numeric-shaped values are not strings: `"1"` or `"3.14"` fail with
    /// `TypeMismatch`. Boolean keywords and plain text succeed.
    pub fn as_string(&self, key: &str) -> Result<&str> {
        if self.shape.is_textual() {
            Ok(&self.raw)
        } else {
            Err(PropsError::mismatch(key, &self.raw, "String"))
        }
    }

    /// Reads the value as an `i32`.
    ///
    /// Fails for anything that is not an integer literal, and for integer
    /// literals outside the 32-bit range.
    pub fn as_i32(&self, key: &str) -> Result<i32> {
        self.require(self.shape == Shape::Integer, key, "i32")?;
        self.raw
            .parse::<i32>()
            .map_err(|e| PropsError::from_parse_int_error(key, &self.raw, "i32", e))
    }

    /// Reads the value as an `i64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use typedprops::domain::PropValue;
    ///
    /// let value = PropValue::from("9223372036854775807");
    /// assert_eq!(value.as_i64("my long").unwrap(), i64::MAX);
    /// assert!(value.as_i32("my long").is_err());
    /// ```
    pub fn as_i64(&self, key: &str) -> Result<i64> {
        self.require(self.shape == Shape::Integer, key, "i64")?;
        self.raw
            .parse::<i64>()
            .map_err(|e| PropsError::from_parse_int_error(key, &self.raw, "i64", e))
    }

    /// Reads the value as an `f32`.
    ///
    /// Integer and decimal literals are accepted. A magnitude that `f32`
    /// cannot hold, too large or too small, is a `TypeMismatch` even when it
    /// fits an `f64`.
    pub fn as_f32(&self, key: &str) -> Result<f32> {
        self.require(self.shape.is_numeric(), key, "f32")?;
        let parsed = self
            .raw
            .parse::<f32>()
            .map_err(|e| PropsError::from_parse_float_error(key, &self.raw, "f32", e))?;
        self.require(self.represents(parsed == 0.0, parsed.is_finite()), key, "f32")?;
        Ok(parsed)
    }

    /// Reads the value as an `f64`.
    ///
    /// Magnitudes beyond the `f64` range in either direction are a
    /// `TypeMismatch` rather than infinity or zero.
    pub fn as_f64(&self, key: &str) -> Result<f64> {
        self.require(self.shape.is_numeric(), key, "f64")?;
        let parsed = self
            .raw
            .parse::<f64>()
            .map_err(|e| PropsError::from_parse_float_error(key, &self.raw, "f64", e))?;
        self.require(self.represents(parsed == 0.0, parsed.is_finite()), key, "f64")?;
        Ok(parsed)
    }

    /// Coerces any numeric-shaped value into an `i32`.
    ///
    /// Integers that fit an `i64` are narrowed with two's-complement
    /// wrapping. Decimals, and integers too long for an `i64`, go through
    /// `f64` and are truncated toward zero, saturating at the `i32` bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use typedprops::domain::PropValue;
    ///
    /// assert_eq!(PropValue::from("9223372036854775807").as_truncated_i32("k").unwrap(), -1);
    /// assert_eq!(PropValue::from("-0.3").as_truncated_i32("k").unwrap(), 0);
    /// assert_eq!(PropValue::from("1.797693E41").as_truncated_i32("k").unwrap(), i32::MAX);
    /// ```
    pub fn as_truncated_i32(&self, key: &str) -> Result<i32> {
        self.require(self.shape.is_numeric(), key, "i32 (truncated)")?;
        if self.shape == Shape::Integer {
            if let Ok(n) = self.raw.parse::<i64>() {
                return Ok(n as i32);
            }
        }
        self.raw
            .parse::<f64>()
            .map(|d| d as i32)
            .map_err(|e| PropsError::from_parse_float_error(key, &self.raw, "i32 (truncated)", e))
    }

    /// Reads the value as a boolean keyword.
    ///
    /// Only `true` and `false` (ignoring ASCII case) are accepted; `yes`,
    /// `1` and friends are a `TypeMismatch`.
    pub fn as_bool(&self, key: &str) -> Result<bool> {
        self.require(self.shape == Shape::Boolean, key, "boolean")?;
        Ok(self.raw.eq_ignore_ascii_case("true"))
    }

    /// Parses the value into any type that implements `FromStr`.
    ///
    /// This is the hook domain-specific stores build on: a parse failure
    /// becomes a `TypeMismatch` carrying the parser's own error.
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.raw
            .parse::<T>()
            .map_err(|e| PropsError::TypeMismatch {
                key: key.to_string(),
                value: self.raw.clone(),
                target_type: std::any::type_name::<T>().to_string(),
                source: Some(Box::new(e)),
            })
    }

    // A parsed float is faithful unless it overflowed, or came out zero from
    // a literal with a non-zero digit before its exponent.
    fn represents(&self, is_zero: bool, is_finite: bool) -> bool {
        if !is_finite {
            return false;
        }
        let mantissa = self.raw.split(['e', 'E']).next().unwrap_or_default();
        !is_zero || !mantissa.bytes().any(|b| matches!(b, b'1'..=b'9'))
    }

    fn require(&self, accepted: bool, key: &str, target_type: &str) -> Result<()> {
        if accepted {
            Ok(())
        } else {
            Err(PropsError::mismatch(key, &self.raw, target_type))
        }
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::new(s)
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::new(s.to_string())
    }
}

impl From<PropValue> for String {
    fn from(value: PropValue) -> Self {
        value.raw
    }
}

impl AsRef<str> for PropValue {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::IpAddr;

    #[test]
    fn test_prop_value_keeps_raw_text() {
        let value = PropValue::from("  spaces  ");
        assert_eq!(value.as_str(), "  spaces  ");
        assert_eq!(value.shape(), Shape::Text);
    }

    #[test]
    fn test_as_string() {
        assert_eq!(PropValue::from("HELLO").as_string("k").unwrap(), "HELLO");
        assert_eq!(PropValue::from("Здравей!").as_string("k").unwrap(), "Здравей!");
        assert_eq!(PropValue::from("true").as_string("k").unwrap(), "true");
        assert_eq!(PropValue::from("").as_string("k").unwrap(), "");
    }

    #[test]
    fn test_as_string_rejects_numbers() {
        for raw in ["1", "-3", "3.14", "9223372036854775807", "1.797693E41"] {
            let err = PropValue::from(raw).as_string("k").unwrap_err();
            assert!(err.is_type_mismatch(), "raw: {}", raw);
        }
    }

    #[test]
    fn test_as_i32() {
        assert_eq!(PropValue::from("1").as_i32("k").unwrap(), 1);
        assert_eq!(PropValue::from("-3").as_i32("k").unwrap(), -3);
        assert_eq!(PropValue::from("+7").as_i32("k").unwrap(), 7);
        assert_eq!(PropValue::from("2147483647").as_i32("k").unwrap(), i32::MAX);
    }

    #[test]
    fn test_as_i32_rejects_overflow_and_decimals() {
        assert!(PropValue::from("2147483648").as_i32("k").unwrap_err().is_type_mismatch());
        assert!(PropValue::from("3.14").as_i32("k").unwrap_err().is_type_mismatch());
        assert!(PropValue::from("HELLO").as_i32("k").unwrap_err().is_type_mismatch());
        assert!(PropValue::from("true").as_i32("k").unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_as_i64() {
        assert_eq!(PropValue::from("2").as_i64("k").unwrap(), 2);
        assert_eq!(
            PropValue::from("-9223372036854775808").as_i64("k").unwrap(),
            i64::MIN
        );
        assert!(PropValue::from("9223372036854775808")
            .as_i64("k")
            .unwrap_err()
            .is_type_mismatch());
        assert!(PropValue::from("1.0").as_i64("k").is_err());
    }

    #[test]
    fn test_as_f32() {
        assert_eq!(PropValue::from("-0.3").as_f32("k").unwrap(), -0.3f32);
        assert_eq!(PropValue::from("1.0").as_f32("k").unwrap(), 1.0);
        assert_eq!(PropValue::from("2").as_f32("k").unwrap(), 2.0);
    }

    #[test]
    fn test_as_f32_rejects_double_only_magnitude() {
        let err = PropValue::from("1.797693E41").as_f32("my double").unwrap_err();
        assert!(err.is_type_mismatch());
        assert!(err.to_string().contains("f32"));
    }

    #[test]
    fn test_as_f32_rejects_underflow() {
        let err = PropValue::from("1e-50").as_f32("tiny").unwrap_err();
        assert!(err.is_type_mismatch());
        assert!(err.to_string().contains("f32"));
        assert!(PropValue::from("-0.0000000000000000000000000000000000000000000000001")
            .as_f32("k")
            .unwrap_err()
            .is_type_mismatch());
        // Still a double
        assert_eq!(PropValue::from("1e-50").as_f64("k").unwrap(), 1e-50);
        // Genuine zeros are fine
        assert_eq!(PropValue::from("0.0").as_f32("k").unwrap(), 0.0);
        assert_eq!(PropValue::from("-0e10").as_f32("k").unwrap(), 0.0);
        assert_eq!(PropValue::from("0").as_f32("k").unwrap(), 0.0);
    }

    #[test]
    fn test_as_f64_rejects_underflow() {
        assert!(PropValue::from("1e-400").as_f64("k").unwrap_err().is_type_mismatch());
        assert!(PropValue::from("-2.5E-999").as_f64("k").unwrap_err().is_type_mismatch());
        assert_eq!(PropValue::from("0.000e-400").as_f64("k").unwrap(), 0.0);
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(PropValue::from("3.14").as_f64("k").unwrap(), 3.14);
        assert_eq!(PropValue::from("1.797693E41").as_f64("k").unwrap(), 1.797693e41);
        assert_eq!(PropValue::from("-3").as_f64("k").unwrap(), -3.0);
        assert!(PropValue::from("1e400").as_f64("k").unwrap_err().is_type_mismatch());
        assert!(PropValue::from("NaN").as_f64("k").unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_as_truncated_i32() {
        assert_eq!(PropValue::from("2").as_truncated_i32("k").unwrap(), 2);
        assert_eq!(
            PropValue::from("9223372036854775807").as_truncated_i32("k").unwrap(),
            i64::MAX as i32
        );
        assert_eq!(PropValue::from("-0.3").as_truncated_i32("k").unwrap(), 0);
        assert_eq!(PropValue::from("7.9").as_truncated_i32("k").unwrap(), 7);
        assert_eq!(
            PropValue::from("1.797693E41").as_truncated_i32("k").unwrap(),
            i32::MAX
        );
        assert_eq!(
            PropValue::from("-99999999999999999999999").as_truncated_i32("k").unwrap(),
            i32::MIN
        );
    }

    #[test]
    fn test_as_truncated_i32_rejects_text() {
        assert!(PropValue::from("HELLO")
            .as_truncated_i32("k")
            .unwrap_err()
            .is_type_mismatch());
    }

    #[test]
    fn test_as_bool() {
        assert!(PropValue::from("true").as_bool("k").unwrap());
        assert!(PropValue::from("TRUE").as_bool("k").unwrap());
        assert!(!PropValue::from("false").as_bool("k").unwrap());
        for raw in ["HELLO", "2", "yes", "1", ""] {
            assert!(PropValue::from(raw).as_bool("k").unwrap_err().is_type_mismatch());
        }
    }

    #[test]
    fn test_parse_custom_type() {
        let ip: IpAddr = PropValue::from("127.0.0.1").parse("host").unwrap();
        assert_eq!(ip.to_string(), "127.0.0.1");
    }

    #[test]
    fn test_parse_invalid() {
        let result: Result<IpAddr> = PropValue::from("not_an_ip").parse("host");
        assert!(result.unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_string_round_trip() {
        let s: String = PropValue::from("a=b+c").into();
        assert_eq!(s, "a=b+c");
    }
}
