//! # tint-math
//!
//! Scalar math used by the tint color conversions:
//!
//! - Interpolation utilities ([`lerp`], [`trunc_fract`])
//! - The six-sector hue wheel ([`hue_to_rgb`], [`hue_sector`])
//!
//! Everything here works on plain `f64` values and RGB triples so it can be
//! shared by every color model that sweeps a hue between two levels.
//!
//! # Usage
//!
//! ```rust
//! use tint_math::hue_to_rgb;
//!
//! let mut rgb = [0.0; 3];
//! hue_to_rgb(0.0, 1.0, 240.0, &mut rgb);
//! assert_eq!(rgb, [0.0, 0.0, 1.0]);
//! ```
//!
//! # Used By
//!
//! - `tint-color` - HSL/HSI conversion and color morphing

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod hue;
mod interp;

pub use hue::*;
pub use interp::*;
