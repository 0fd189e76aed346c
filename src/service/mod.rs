// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the props stores.
//!
//! `Props` is the plain store, `GraphicsProps` the domain-extended one (feature
//! `graphics`), and `global` an optional process-wide instance (feature
//! `global`).

#[cfg(feature = "global")]
pub mod global;
#[cfg(feature = "graphics")]
pub mod graphics_props;
pub mod props;

// Re-export commonly used types
#[cfg(feature = "graphics")]
pub use graphics_props::GraphicsProps;
pub use props::{Props, PropsBuilder, DEFAULT_PROPS_FILE};
