// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed accessor trait definition.
//!
//! `TypedProps` is the extension hook of the crate. An implementor supplies raw
//! lookup and iteration over its mapping; every typed accessor is a provided
//! method built on those two, so a domain-specific store gets the same
//! `MissingKey` / `TypeMismatch` behaviour for free and only adds accessors of
//! its own on top of [`TypedProps::get_parsed`].

use crate::domain::{PropKey, PropValue, PropsError, Result, Shape};
use std::str::FromStr;

/// Strongly-typed read access over a raw property mapping.
///
/// Every accessor fails with `PropsError::MissingKey` when the key is absent
/// and with `PropsError::TypeMismatch` when the stored text cannot be read as
/// the requested type. No accessor returns a default value.
///
/// # Examples
///
/// ```rust
/// use typedprops::domain::{PropKey, PropValue};
/// use typedprops::ports::TypedProps;
/// use std::collections::HashMap;
///
/// struct MapProps(HashMap<PropKey, PropValue>);
///
/// impl TypedProps for MapProps {
///     fn raw(&self, key: &str) -> Option<&PropValue> {
///         self.0.get(key)
///     }
///
///     fn entries(&self) -> Box<dyn Iterator<Item = (&PropKey, &PropValue)> + '_> {
///         Box::new(self.0.iter())
///     }
/// }
///
/// let mut map = HashMap::new();
/// map.insert(PropKey::from("CONSTANT_ONE"), PropValue::from("1"));
/// let props = MapProps(map);
///
/// assert_eq!(props.get_int("CONSTANT_ONE").unwrap(), 1);
/// assert!(props.get_string("CONSTANT_ONE").unwrap_err().is_type_mismatch());
/// assert!(props.get_int("nothing").unwrap_err().is_missing_key());
/// ```
pub trait TypedProps {
    /// Returns the raw entry for `key`, if present.
    fn raw(&self, key: &str) -> Option<&PropValue>;

    /// Returns a fresh traversal over every entry, in unspecified order.
    fn entries(&self) -> Box<dyn Iterator<Item = (&PropKey, &PropValue)> + '_>;

    /// Returns the raw entry for `key` or `MissingKey`.
    fn lookup(&self, key: &str) -> Result<&PropValue> {
        self.raw(key).ok_or_else(|| PropsError::MissingKey {
            key: key.to_string(),
        })
    }

    /// Returns `true` if `key` is present.
    fn contains(&self, key: &str) -> bool {
        self.raw(key).is_some()
    }

    /// Returns the raw text for `key`, whatever its shape.
    fn get(&self, key: &str) -> Result<&str> {
        self.lookup(key).map(PropValue::as_str)
    }

    /// Returns the value for `key` as a string. Numeric-shaped values fail.
    fn get_string(&self, key: &str) -> Result<&str> {
        self.lookup(key)?.as_string(key)
    }

    /// Returns the value for `key` as an `i32`.
    fn get_int(&self, key: &str) -> Result<i32> {
        self.lookup(key)?.as_i32(key)
    }

    /// Returns the value for `key` as an `i64`.
    fn get_long(&self, key: &str) -> Result<i64> {
        self.lookup(key)?.as_i64(key)
    }

    /// Returns the value for `key` as an `f32`.
    fn get_float(&self, key: &str) -> Result<f32> {
        self.lookup(key)?.as_f32(key)
    }

    /// Returns the value for `key` as an `f64`.
    fn get_double(&self, key: &str) -> Result<f64> {
        self.lookup(key)?.as_f64(key)
    }

    /// Returns any numeric value for `key` narrowed to an `i32`.
    ///
    /// See [`PropValue::as_truncated_i32`] for the narrowing rules.
    fn get_any_int(&self, key: &str) -> Result<i32> {
        self.lookup(key)?.as_truncated_i32(key)
    }

    /// Returns the boolean keyword stored for `key`.
    fn is_true(&self, key: &str) -> Result<bool> {
        self.lookup(key)?.as_bool(key)
    }

    /// Parses the value for `key` with `T::from_str`.
    fn get_parsed<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.lookup(key)?.parse(key)
    }

    /// Iterates over every entry that [`get_int`](TypedProps::get_int) accepts.
    ///
    /// Each call starts a new traversal.
    fn integers(&self) -> Box<dyn Iterator<Item = (&str, i32)> + '_> {
        Box::new(self.entries().filter_map(|(key, value)| {
            if value.shape() != Shape::Integer {
                return None;
            }
            value.as_i32(key.as_str()).ok().map(|n| (key.as_str(), n))
        }))
    }

    /// Iterates over every plain-text entry.
    ///
    /// Only `Shape::Text` values are visited. Boolean keywords read fine
    /// through [`get_string`](TypedProps::get_string) but are their own shape
    /// and are skipped here, like numbers. Each call starts a new traversal.
    fn strings(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        Box::new(
            self.entries()
                .filter(|(_, value)| value.shape() == Shape::Text)
                .map(|(key, value)| (key.as_str(), value.as_str())),
        )
    }

    /// Calls `f` with every integer entry.
    fn for_each_integer<F>(&self, mut f: F)
    where
        F: FnMut(&str, i32),
    {
        for (key, value) in self.integers() {
            f(key, value);
        }
    }

    /// Calls `f` with every string entry.
    fn for_each_string<F>(&self, mut f: F)
    where
        F: FnMut(&str, &str),
    {
        for (key, value) in self.strings() {
            f(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapProps(HashMap<PropKey, PropValue>);

    impl MapProps {
        fn of(pairs: &[(&str, &str)]) -> Self {
            MapProps(
                pairs
                    .iter()
                    .map(|(k, v)| (PropKey::from(*k), PropValue::from(*v)))
                    .collect(),
            )
        }
    }

    impl TypedProps for MapProps {
        fn raw(&self, key: &str) -> Option<&PropValue> {
            self.0.get(key)
        }

        fn entries(&self) -> Box<dyn Iterator<Item = (&PropKey, &PropValue)> + '_> {
            Box::new(self.0.iter())
        }
    }

    fn sample() -> MapProps {
        MapProps::of(&[
            ("CONSTANT_HELLO", "HELLO"),
            ("CONSTANT_ONE", "1"),
            ("NEGATIVE", "-3"),
            ("CONSTANT_PI", "3.14"),
            ("my long", "9223372036854775807"),
            ("my boolean", "true"),
        ])
    }

    #[test]
    fn test_accessors() {
        let props = sample();
        assert_eq!(props.get_string("CONSTANT_HELLO").unwrap(), "HELLO");
        assert_eq!(props.get_int("CONSTANT_ONE").unwrap(), 1);
        assert_eq!(props.get_int("NEGATIVE").unwrap(), -3);
        assert_eq!(props.get_double("CONSTANT_PI").unwrap(), 3.14);
        assert_eq!(props.get_long("my long").unwrap(), i64::MAX);
        assert!(props.is_true("my boolean").unwrap());
    }

    #[test]
    fn test_get_returns_raw_text_for_any_shape() {
        let props = sample();
        assert_eq!(props.get("CONSTANT_ONE").unwrap(), "1");
        assert_eq!(props.get("CONSTANT_PI").unwrap(), "3.14");
    }

    #[test]
    fn test_type_mismatches() {
        let props = sample();
        assert!(props.get_string("CONSTANT_ONE").unwrap_err().is_type_mismatch());
        assert!(props.get_int("my long").unwrap_err().is_type_mismatch());
        assert!(props.is_true("CONSTANT_HELLO").unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_missing_key_on_every_accessor() {
        let props = sample();
        assert!(props.get("nothing").unwrap_err().is_missing_key());
        assert!(props.get_string("nothing").unwrap_err().is_missing_key());
        assert!(props.get_int("nothing").unwrap_err().is_missing_key());
        assert!(props.get_long("nothing").unwrap_err().is_missing_key());
        assert!(props.get_float("nothing").unwrap_err().is_missing_key());
        assert!(props.get_double("nothing").unwrap_err().is_missing_key());
        assert!(props.get_any_int("nothing").unwrap_err().is_missing_key());
        assert!(props.is_true("nothing").unwrap_err().is_missing_key());
        assert!(props
            .get_parsed::<std::net::IpAddr>("nothing")
            .unwrap_err()
            .is_missing_key());
        assert!(!props.contains("nothing"));
    }

    #[test]
    fn test_integers_skips_other_shapes() {
        let props = sample();
        let mut found: Vec<(&str, i32)> = props.integers().collect();
        found.sort();
        assert_eq!(found, vec![("CONSTANT_ONE", 1), ("NEGATIVE", -3)]);
    }

    #[test]
    fn test_strings_visits_plain_text_only() {
        let props = sample();
        let found: Vec<(&str, &str)> = props.strings().collect();
        assert_eq!(found, vec![("CONSTANT_HELLO", "HELLO")]);

        // Readable as a string, but not visited
        assert_eq!(props.get_string("my boolean").unwrap(), "true");
    }

    #[test]
    fn test_iteration_is_restartable() {
        let props = sample();
        assert_eq!(props.integers().count(), props.integers().count());
    }

    #[test]
    fn test_for_each_callbacks() {
        let props = sample();
        let mut total = 0;
        props.for_each_integer(|_, n| total += n);
        assert_eq!(total, -2);

        let mut keys = Vec::new();
        props.for_each_string(|key, _| keys.push(key.to_string()));
        keys.sort();
        assert_eq!(keys, vec!["CONSTANT_HELLO"]);
    }
}
