// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! These traits separate the store from the collaborators it consumes (a line
//! reader and a line parser) and define the typed-accessor surface that every
//! store, plain or domain-extended, exposes.

pub mod line_reader;
pub mod parser;
pub mod typed_props;

// Re-export commonly used types
pub use line_reader::LineReader;
pub use parser::LineParser;
pub use typed_props::TypedProps;
