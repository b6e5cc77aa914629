//! # tint-core
//!
//! Core types for tint color math.
//!
//! This crate provides the foundational pieces shared by every tint crate:
//!
//! - [`Rgba`] - Unit-interval RGBA color value
//! - [`rgba_to_string`], [`parse_rgba`] - The `rgba(R,G,B,A)` textual form
//! - [`Error`], [`Result`] - Errors raised while parsing that textual form
//!
//! ## Crate Structure
//!
//! ```text
//! tint-core (this crate)
//!    ^
//!    |
//!    +-- tint-math (lerp, hue wheel)
//!    +-- tint-color (HSL/HSI conversion, morphing)
//!    +-- tint-cli (command-line front end)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for [`Rgba`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod format;
pub mod pixel;

// Re-exports for convenience
pub use error::*;
pub use format::{parse_rgba, rgba_to_string};
pub use pixel::Rgba;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use tint_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::format::{parse_rgba, rgba_to_string};
    pub use crate::pixel::Rgba;
}
