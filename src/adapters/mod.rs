// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing implementations of the ports.
//!
//! The crate ships one reader (local files) and one parser (the `.props`
//! `KEY=VALUE` format). Other readers or formats plug in through the
//! `LineReader` and `LineParser` traits.

pub mod file_reader;
pub mod key_value_parser;

pub use file_reader::{split_lines, FileLineReader};
pub use key_value_parser::{KeyValueParser, MalformedLinePolicy};
