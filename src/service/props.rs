// SPDX-License-Identifier: MIT OR Apache-2.0

//! The props store and its builder.
//!
//! [`Props`] owns one raw mapping. Loads are cumulative and last-write-wins;
//! all reads go through the [`TypedProps`] accessors and never touch the
//! filesystem.

use crate::adapters::{split_lines, FileLineReader, KeyValueParser, MalformedLinePolicy};
use crate::domain::{PropKey, PropValue, PropsError, Result};
use crate::ports::{LineParser, LineReader, TypedProps};
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// File loaded by [`Props::load_default`] unless the builder says otherwise.
pub const DEFAULT_PROPS_FILE: &str = "default.props";

/// A typed configuration store backed by `.props` files.
///
/// `Props` has no internal locking. Loading and clearing take `&mut self`;
/// sharing a store across threads is the caller's job (see the `global`
/// module for a ready-made process-wide instance).
///
/// # Examples
///
/// ```rust,no_run
/// use typedprops::prelude::*;
///
/// # fn main() -> Result<()> {
/// let mut props = Props::new();
/// props.load("assets/test.props")?;
///
/// let hello = props.get_string("CONSTANT_HELLO")?;
/// let one = props.get_int("CONSTANT_ONE")?;
/// # Ok(())
/// # }
/// ```
pub struct Props {
    /// Raw mapping from key to value
    values: HashMap<PropKey, PropValue>,
    /// Where lines come from
    reader: Box<dyn LineReader>,
    /// How lines become entries
    parser: Box<dyn LineParser>,
    /// Path used by `load_default`
    default_path: PathBuf,
}

impl Props {
    /// Creates an empty store that reads local files and skips malformed lines.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typedprops::service::Props;
    ///
    /// let props = Props::new();
    /// assert_eq!(props.size(), 0);
    /// ```
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            reader: Box::new(FileLineReader::new()),
            parser: Box::new(KeyValueParser::new()),
            default_path: PathBuf::from(DEFAULT_PROPS_FILE),
        }
    }

    /// Creates a new store builder.
    pub fn builder() -> PropsBuilder {
        PropsBuilder::new()
    }

    /// Loads the file at `path` into the store.
    ///
    /// The whole file is read and parsed before anything is inserted, so on
    /// error the store is left exactly as it was. Keys already present are
    /// overwritten by the file's values.
    ///
    /// # Errors
    ///
    /// * `FileNotFound` if the path cannot be opened
    /// * `IoError` if reading fails after opening
    /// * `MalformedLine` if a line lacks `=` and the parser aborts on that
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let lines = self.reader.read_lines(path)?;
        let entries = self.parser.parse_lines(&lines)?;
        let count = entries.len();
        self.values.extend(entries);

        tracing::debug!(
            "Loaded {} properties from '{}' using the {} reader ({} total)",
            count,
            path.display(),
            self.reader.name(),
            self.values.len()
        );
        Ok(())
    }

    /// Loads the default props file.
    ///
    /// This is `default.props` in the working directory unless the builder
    /// configured another path.
    pub fn load_default(&mut self) -> Result<()> {
        let path = self.default_path.clone();
        self.load(path)
    }

    /// Loads props text that is already in memory, with the same rules as
    /// [`load`](Props::load).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typedprops::prelude::*;
    ///
    /// let mut props = Props::new();
    /// props.load_str("# colors\nmy int=2\nmy boolean=true\n").unwrap();
    /// assert_eq!(props.get_int("my int").unwrap(), 2);
    /// assert!(props.is_true("my boolean").unwrap());
    /// ```
    pub fn load_str(&mut self, content: &str) -> Result<()> {
        let entries = self.parser.parse_lines(&split_lines(content))?;
        let count = entries.len();
        self.values.extend(entries);

        tracing::debug!(
            "Loaded {} properties from memory ({} total)",
            count,
            self.values.len()
        );
        Ok(())
    }

    /// Returns the number of properties in the store.
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the store holds no properties.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Removes every property. The backing files are not touched.
    pub fn clear(&mut self) {
        let dropped = self.values.len();
        self.values.clear();
        tracing::debug!("Cleared {} properties", dropped);
    }

    /// Iterates over every key, in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.keys().map(PropKey::as_str)
    }

    /// Returns the path [`load_default`](Props::load_default) reads.
    pub fn default_path(&self) -> &Path {
        &self.default_path
    }
}

impl Default for Props {
    fn default() -> Self {
        Self::new()
    }
}

impl TypedProps for Props {
    fn raw(&self, key: &str) -> Option<&PropValue> {
        self.values.get(key)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&PropKey, &PropValue)> + '_> {
        Box::new(self.values.iter())
    }
}

impl fmt::Debug for Props {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Props")
            .field("values", &self.values)
            .field("reader", &self.reader.name())
            .field("parser", &self.parser.supported_extensions())
            .field("default_path", &self.default_path)
            .finish()
    }
}

/// Builder for constructing a [`Props`] store.
///
/// # Examples
///
/// ```rust,no_run
/// use typedprops::adapters::MalformedLinePolicy;
/// use typedprops::service::PropsBuilder;
///
/// # fn main() -> typedprops::domain::Result<()> {
/// let props = PropsBuilder::new()
///     .with_malformed_line_policy(MalformedLinePolicy::Abort)
///     .with_file("assets/base.props")
///     .with_file("assets/local.props")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct PropsBuilder {
    reader: Option<Box<dyn LineReader>>,
    parser: Option<Box<dyn LineParser>>,
    default_path: PathBuf,
    files: Vec<PathBuf>,
}

impl PropsBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            reader: None,
            parser: None,
            default_path: PathBuf::from(DEFAULT_PROPS_FILE),
            files: Vec::new(),
        }
    }

    /// Uses `reader` to obtain lines instead of the local filesystem.
    pub fn with_line_reader(mut self, reader: Box<dyn LineReader>) -> Self {
        self.reader = Some(reader);
        self
    }

    /// Uses `parser` to turn lines into entries.
    ///
    /// Replaces any parser set by
    /// [`with_malformed_line_policy`](PropsBuilder::with_malformed_line_policy).
    pub fn with_parser(mut self, parser: Box<dyn LineParser>) -> Self {
        self.parser = Some(parser);
        self
    }

    /// Uses the `.props` parser with the given malformed-line policy.
    pub fn with_malformed_line_policy(self, policy: MalformedLinePolicy) -> Self {
        self.with_parser(Box::new(KeyValueParser::with_policy(policy)))
    }

    /// Sets the path read by [`Props::load_default`].
    pub fn with_default_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_path = path.into();
        self
    }

    /// Points [`Props::load_default`] at `default.props` inside the
    /// OS-appropriate configuration directory for the application.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn with_default_location(self, app_name: &str, qualifier: &str) -> Result<Self> {
        let proj_dirs = ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| {
            PropsError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Failed to determine project directories",
            ))
        })?;

        let path = proj_dirs.config_dir().join(DEFAULT_PROPS_FILE);
        Ok(self.with_default_path(path))
    }

    /// Queues a file to be loaded by [`build`](PropsBuilder::build).
    ///
    /// Files load in the order they were added, so later files override
    /// earlier ones.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    /// Builds the store and loads every queued file.
    pub fn build(self) -> Result<Props> {
        let mut props = Props::new();
        if let Some(reader) = self.reader {
            props.reader = reader;
        }
        if let Some(parser) = self.parser {
            props.parser = parser;
        }
        props.default_path = self.default_path;

        for file in &self.files {
            props.load(file)?;
        }

        Ok(props)
    }
}

impl Default for PropsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
