// SPDX-License-Identifier: MIT OR Apache-2.0

//! Optional process-wide props store.
//!
//! Some call sites cannot have a store passed to them. This module keeps one
//! lazily created [`Props`] behind an `RwLock` for them. The lock belongs to
//! this wrapper; `Props` itself stays lock-free. A poisoned lock is recovered,
//! since a load either fully applies or leaves the mapping untouched.

use crate::domain::Result;
use crate::service::Props;
use once_cell::sync::Lazy;
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

static GLOBAL_PROPS: Lazy<RwLock<Props>> = Lazy::new(|| RwLock::new(Props::new()));

/// Acquires shared read access to the process-wide store.
///
/// Hold the guard only as long as needed: `load` and `clear` wait for every
/// reader to drop theirs.
///
/// # Examples
///
/// ```rust,no_run
/// use typedprops::prelude::*;
/// use typedprops::service::global;
///
/// # fn main() -> Result<()> {
/// global::load("default.props")?;
/// let width = global::read().get_int("window.width")?;
/// # Ok(())
/// # }
/// ```
pub fn read() -> RwLockReadGuard<'static, Props> {
    GLOBAL_PROPS.read().unwrap_or_else(PoisonError::into_inner)
}

/// Acquires exclusive write access to the process-wide store.
pub fn write() -> RwLockWriteGuard<'static, Props> {
    GLOBAL_PROPS.write().unwrap_or_else(PoisonError::into_inner)
}

/// Loads `path` into the process-wide store.
pub fn load(path: impl AsRef<Path>) -> Result<()> {
    write().load(path)
}

/// Loads the default props file into the process-wide store.
pub fn load_default() -> Result<()> {
    write().load_default()
}

/// Removes every property from the process-wide store.
pub fn clear() {
    write().clear();
}
