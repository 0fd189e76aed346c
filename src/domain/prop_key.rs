// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property key newtype.
//!
//! Keys are taken verbatim from the text before the first `=` on a line, so
//! they may contain spaces and non-ASCII characters. Matching is exact and
//! case-sensitive.

use std::borrow::Borrow;
use std::fmt;

/// A type-safe wrapper for property keys.
///
/// `PropKey` implements `Borrow<str>`, so a `HashMap<PropKey, _>` can be
/// queried with a plain `&str`.
///
/// # Examples
///
/// ```
/// use typedprops::domain::prop_key::PropKey;
///
/// let key = PropKey::from("CONSTANT MULTI WORD STRING");
/// assert_eq!(key.as_str(), "CONSTANT MULTI WORD STRING");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropKey(String);

impl PropKey {
    /// Creates a new `PropKey` from a `String`.
    pub fn new(key: String) -> Self {
        PropKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `PropKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for PropKey {
    fn from(s: String) -> Self {
        PropKey(s)
    }
}

impl From<&str> for PropKey {
    fn from(s: &str) -> Self {
        PropKey(s.to_string())
    }
}

impl From<PropKey> for String {
    fn from(key: PropKey) -> Self {
        key.0
    }
}

impl AsRef<str> for PropKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PropKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
