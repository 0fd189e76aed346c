// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-backed line reader adapter.
//!
//! This module provides the `LineReader` the store uses by default. It reads a
//! whole UTF-8 file and splits it on LF, CR or CRLF.

use crate::domain::{PropsError, Result};
use crate::ports::LineReader;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Maximum allowed size for a props file (10MB)
const MAX_PROPS_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Splits text into lines on LF, CR or CRLF.
///
/// Terminators are removed. A trailing terminator does not produce an extra
/// empty line, but blank lines in the middle are kept.
///
/// # Examples
///
/// ```rust
/// use typedprops::adapters::split_lines;
///
/// assert_eq!(split_lines("a\r\nb\rc\n\nd\n"), vec!["a", "b", "c", "", "d"]);
/// assert!(split_lines("").is_empty());
/// ```
pub fn split_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = content;
    while !rest.is_empty() {
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(index) => {
                lines.push(rest[..index].to_string());
                let terminator = if rest[index..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[index + terminator..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }
    lines
}

/// Line reader for props files on the local filesystem.
///
/// The file handle lives only for the duration of one `read_lines` call and is
/// closed when the call returns, whichever way it returns.
///
/// # Examples
///
/// ```rust,no_run
/// use typedprops::adapters::FileLineReader;
/// use typedprops::ports::LineReader;
/// use std::path::Path;
///
/// let reader = FileLineReader::new();
/// let lines = reader.read_lines(Path::new("assets/test.props")).unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct FileLineReader;

impl FileLineReader {
    /// Creates a new file line reader.
    pub fn new() -> Self {
        FileLineReader
    }
}

impl LineReader for FileLineReader {
    fn name(&self) -> &str {
        "file"
    }

    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        let not_found = |source: io::Error| PropsError::FileNotFound {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(not_found)?;
        let metadata = file.metadata().map_err(not_found)?;
        if metadata.is_dir() {
            return Err(not_found(io::Error::new(
                io::ErrorKind::InvalidInput,
                "path is a directory",
            )));
        }

        if metadata.len() > MAX_PROPS_FILE_SIZE {
            return Err(PropsError::IoError(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Props file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_PROPS_FILE_SIZE
                ),
            )));
        }

        let mut content = String::new();
        file.read_to_string(&mut content)?;
        Ok(split_lines(&content))
    }
}
