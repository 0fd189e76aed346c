// SPDX-License-Identifier: MIT OR Apache-2.0

//! A typed configuration store for flat `.props` files.
//!
//! The crate loads `KEY=VALUE` text files into memory and reads them back
//! through strongly-typed accessors that fail loudly instead of guessing:
//! a missing key is a `MissingKey` error, a value that cannot be read as the
//! requested type is a `TypeMismatch` error, and no accessor ever substitutes
//! a default.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: keys, values, load-time shapes, errors, graphics types
//! - **Ports**: `LineReader`, `LineParser` and the `TypedProps` accessor trait
//! - **Adapters**: the local-file reader and the `KEY=VALUE` parser
//! - **Service**: the `Props` store, its builder, `GraphicsProps` and the
//!   optional process-wide store
//!
//! # File Format
//!
//! ```text
//! # comment line (ignored)
//! KEY=VALUE
//! ANOTHER_KEY=multi word value
//! equation=a=b+c
//! ```
//!
//! Lines end with LF, CR or CRLF. Each line is split at its first `=`; keys
//! and values are kept verbatim. Later definitions of a key win.
//!
//! # Feature Flags
//!
//! - `graphics`: color, point, dimension and font accessors (default)
//! - `global`: a lazily created process-wide store (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use typedprops::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let mut props = Props::new();
//! props.load_str("CONSTANT_HELLO=HELLO\nCONSTANT_ONE=1\nCONSTANT_PI=3.14\n")?;
//!
//! assert_eq!(props.get_string("CONSTANT_HELLO")?, "HELLO");
//! assert_eq!(props.get_int("CONSTANT_ONE")?, 1);
//! assert_eq!(props.get_double("CONSTANT_PI")?, 3.14);
//!
//! // Numbers are not strings, and absent keys are errors
//! assert!(props.get_string("CONSTANT_ONE").unwrap_err().is_type_mismatch());
//! assert!(props.get_int("nothing").unwrap_err().is_missing_key());
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::MalformedLinePolicy;
    pub use crate::domain::{PropKey, PropValue, PropsError, Result, Shape};
    pub use crate::ports::{LineParser, LineReader, TypedProps};
    pub use crate::service::{Props, PropsBuilder};

    // Re-export graphics types based on feature flags
    #[cfg(feature = "graphics")]
    pub use crate::domain::{Color, Dimension, Font, FontStyle, Point};
    #[cfg(feature = "graphics")]
    pub use crate::service::GraphicsProps;
}
