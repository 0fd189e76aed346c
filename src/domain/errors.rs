// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the props store.
//!
//! Every failure a caller can observe is a variant of [`PropsError`]. Accessors
//! never fall back to a default value, so a missing or mistyped property always
//! surfaces here.

use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for props operations.
///
/// # Examples
///
/// ```
/// use typedprops::domain::errors::PropsError;
///
/// fn lookup() -> Result<String, PropsError> {
///     Err(PropsError::MissingKey {
///         key: "window.title".to_string(),
///     })
/// }
///
/// assert!(lookup().unwrap_err().is_missing_key());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PropsError {
    /// The props file could not be opened.
    #[error("Could not find props file \"{}\"", .path.display())]
    FileNotFound {
        /// The path that was requested
        path: PathBuf,
        /// The underlying open error
        #[source]
        source: std::io::Error,
    },

    /// No property exists for the requested key.
    #[error("No property \"{key}\"")]
    MissingKey {
        /// The key that was looked up
        key: String,
    },

    /// The stored value cannot be read as the requested type.
    #[error("Property \"{key}\" with value \"{value}\" cannot be read as {target_type}")]
    TypeMismatch {
        /// The key that was looked up
        key: String,
        /// The raw stored value
        value: String,
        /// The requested type name
        target_type: String,
        /// The underlying conversion error, if there was one
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A non-comment line has no `=` separator.
    #[error("Malformed line {line_number}: \"{line}\" has no '=' separator")]
    MalformedLine {
        /// 1-based line number within the loaded file
        line_number: usize,
        /// The offending line
        line: String,
    },

    /// Reading failed after the file was opened.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PropsError {
    /// Creates a `TypeMismatch` that has no underlying parse error.
    pub fn mismatch(key: &str, value: &str, target_type: &str) -> Self {
        PropsError::TypeMismatch {
            key: key.to_string(),
            value: value.to_string(),
            target_type: target_type.to_string(),
            source: None,
        }
    }

    /// Creates a `TypeMismatch` from a `ParseIntError`.
    pub fn from_parse_int_error(
        key: &str,
        value: &str,
        target_type: &str,
        err: ParseIntError,
    ) -> Self {
        PropsError::TypeMismatch {
            key: key.to_string(),
            value: value.to_string(),
            target_type: target_type.to_string(),
            source: Some(Box::new(err)),
        }
    }

    /// Creates a `TypeMismatch` from a `ParseFloatError`.
    pub fn from_parse_float_error(
        key: &str,
        value: &str,
        target_type: &str,
        err: ParseFloatError,
    ) -> Self {
        PropsError::TypeMismatch {
            key: key.to_string(),
            value: value.to_string(),
            target_type: target_type.to_string(),
            source: Some(Box::new(err)),
        }
    }

    /// Returns `true` for [`PropsError::MissingKey`].
    pub fn is_missing_key(&self) -> bool {
        matches!(self, PropsError::MissingKey { .. })
    }

    /// Returns `true` for [`PropsError::TypeMismatch`].
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, PropsError::TypeMismatch { .. })
    }
}

/// A specialized Result type for props operations.
pub type Result<T> = std::result::Result<T, PropsError>;
