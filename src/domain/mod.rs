// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing the core property types.
//!
//! Keys, values, shapes and errors live here. Nothing in this module performs
//! I/O; it only describes and interprets text that has already been loaded.

pub mod errors;
#[cfg(feature = "graphics")]
pub mod graphics;
pub mod prop_key;
pub mod prop_value;
pub mod shape;

// Re-export commonly used types
pub use errors::{PropsError, Result};
#[cfg(feature = "graphics")]
pub use graphics::{Color, Dimension, Font, FontStyle, GraphicsParseError, Point};
pub use prop_key::PropKey;
pub use prop_value::PropValue;
pub use shape::Shape;
