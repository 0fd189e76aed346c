// SPDX-License-Identifier: MIT OR Apache-2.0

//! `KEY=VALUE` line parser adapter.
//!
//! This module provides the parser for the `.props` format: blank lines and
//! lines starting with `#` are ignored, and every other line is split at its
//! first `=`. Keys and values are kept verbatim, without trimming.

use crate::domain::{PropKey, PropValue, PropsError, Result};
use crate::ports::LineParser;

const COMMENT_SYMBOL: char = '#';
const KEY_VALUE_SEPARATOR: char = '=';

/// What to do with a non-comment line that has no `=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedLinePolicy {
    /// Log the line at `warn` level and keep parsing.
    #[default]
    Skip,
    /// Fail the whole parse with `PropsError::MalformedLine`.
    Abort,
}

/// Parser for `.props` content.
///
/// # Examples
///
/// ```rust
/// use typedprops::adapters::KeyValueParser;
/// use typedprops::ports::LineParser;
///
/// let lines = vec![
///     "# comment".to_string(),
///     "".to_string(),
///     "equation=a=b+c".to_string(),
/// ];
/// let entries = KeyValueParser::new().parse_lines(&lines).unwrap();
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].0.as_str(), "equation");
/// assert_eq!(entries[0].1.as_str(), "a=b+c");
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeyValueParser {
    policy: MalformedLinePolicy,
}

impl KeyValueParser {
    /// Creates a parser that skips malformed lines.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with the given malformed-line policy.
    pub fn with_policy(policy: MalformedLinePolicy) -> Self {
        KeyValueParser { policy }
    }

    /// Returns the malformed-line policy.
    pub fn policy(&self) -> MalformedLinePolicy {
        self.policy
    }
}

impl LineParser for KeyValueParser {
    fn parse_lines(&self, lines: &[String]) -> Result<Vec<(PropKey, PropValue)>> {
        let mut entries = Vec::with_capacity(lines.len());

        for (index, line) in lines.iter().enumerate() {
            if line.is_empty() || line.starts_with(COMMENT_SYMBOL) {
                continue;
            }

            match line.split_once(KEY_VALUE_SEPARATOR) {
                Some((key, value)) => entries.push((PropKey::from(key), PropValue::from(value))),
                None => match self.policy {
                    MalformedLinePolicy::Skip => {
                        tracing::warn!(
                            "Skipping line {} without '{}' separator: {}",
                            index + 1,
                            KEY_VALUE_SEPARATOR,
                            line
                        );
                    }
                    MalformedLinePolicy::Abort => {
                        return Err(PropsError::MalformedLine {
                            line_number: index + 1,
                            line: line.clone(),
                        });
                    }
                },
            }
        }

        Ok(entries)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["props"]
    }
}
