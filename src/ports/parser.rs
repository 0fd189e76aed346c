// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line parser trait definition.
//!
//! This module defines the `LineParser` trait, which turns raw lines into
//! key/value entries. Parsing happens before any entry reaches the store, so a
//! parser error leaves the store untouched.

use crate::domain::{PropKey, PropValue, Result};

/// A trait for parsing props lines into entries.
///
/// Entries are returned in file order; when a key repeats, the store keeps the
/// last one.
///
/// # Examples
///
/// ```rust
/// use typedprops::ports::LineParser;
/// use typedprops::domain::{PropKey, PropValue, Result};
///
/// struct ColonParser;
///
/// impl LineParser for ColonParser {
///     fn parse_lines(&self, lines: &[String]) -> Result<Vec<(PropKey, PropValue)>> {
///         Ok(lines
///             .iter()
///             .filter_map(|line| line.split_once(':'))
///             .map(|(k, v)| (PropKey::from(k), PropValue::from(v)))
///             .collect())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["colon"]
///     }
/// }
///
/// let entries = ColonParser.parse_lines(&["a:1".to_string()]).unwrap();
/// assert_eq!(entries[0].0.as_str(), "a");
/// ```
pub trait LineParser: Send + Sync {
    /// Parses lines into `(key, value)` entries in file order.
    fn parse_lines(&self, lines: &[String]) -> Result<Vec<(PropKey, PropValue)>>;

    /// Returns the file extensions (without the leading dot) this parser reads.
    fn supported_extensions(&self) -> &[&str];
}
