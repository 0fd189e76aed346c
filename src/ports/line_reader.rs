// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line reader trait definition.
//!
//! This module defines the `LineReader` trait, the port through which the store
//! obtains raw text lines for a path. The store never touches the filesystem
//! directly.

use crate::domain::Result;
use std::path::Path;

/// A trait for obtaining the lines of a props file.
///
/// # Contract
///
/// - If `path` cannot be opened, return `PropsError::FileNotFound`.
/// - If reading fails after the open succeeded, return `PropsError::IoError`.
/// - Lines are returned without their terminators (LF, CR or CRLF).
/// - Any handle opened for `path` is released before the method returns, on
///   success and failure alike.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a store can live behind a
/// process-wide lock.
///
/// # Examples
///
/// ```rust
/// use typedprops::ports::LineReader;
/// use typedprops::domain::Result;
/// use std::path::Path;
///
/// struct FixedReader(Vec<String>);
///
/// impl LineReader for FixedReader {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn read_lines(&self, _path: &Path) -> Result<Vec<String>> {
///         Ok(self.0.clone())
///     }
/// }
///
/// let reader = FixedReader(vec!["KEY=VALUE".to_string()]);
/// assert_eq!(reader.read_lines(Path::new("any.props")).unwrap().len(), 1);
/// ```
pub trait LineReader: Send + Sync {
    /// Returns a short name for this reader, used in log output.
    fn name(&self) -> &str;

    /// Reads every line of the file at `path`.
    fn read_lines(&self, path: &Path) -> Result<Vec<String>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PropsError;

    struct MissingReader;

    impl LineReader for MissingReader {
        fn name(&self) -> &str {
            "missing"
        }

        fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
            Err(PropsError::FileNotFound {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            })
        }
    }

    #[test]
    fn test_line_reader_name() {
        assert_eq!(MissingReader.name(), "missing");
    }

    #[test]
    fn test_line_reader_failure() {
        let result = MissingReader.read_lines(Path::new("nowhere.props"));
        assert!(matches!(result, Err(PropsError::FileNotFound { .. })));
    }

    #[test]
    fn test_line_reader_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Box<dyn LineReader>>();
    }
}
