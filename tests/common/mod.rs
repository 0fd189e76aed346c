// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for the integration tests.

use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Path of a file under `tests/fixtures`.
#[allow(dead_code)]
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Writes raw bytes to a temporary props file.
///
/// The file is deleted when the returned handle drops.
#[allow(dead_code)]
pub fn temp_props(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}

/// Installs a test-friendly tracing subscriber once per test binary.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
