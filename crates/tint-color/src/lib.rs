//! # tint-color
//!
//! Color model conversions on top of [`tint_core::Rgba`]:
//!
//! - **HSL** - [`hsla_to_rgba`], [`Hsla`]
//! - **HSI** - [`hsia_to_rgba`], [`Hsia`]
//! - **Morphing** - [`morph_rgba`], linear interpolation between two colors
//! - **Formatting** - [`rgba_to_string`], re-exported from `tint-core`
//!
//! Every conversion is a total function: inputs are neither validated nor
//! clamped, and out-of-range values flow through the arithmetic as is.
//!
//! # Architecture
//!
//! ```text
//!        tint-color
//!            |
//!     +------+------+
//!     |             |
//! tint-math     tint-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use tint_color::{hsla_to_rgba, hsia_to_rgba, morph_rgba, rgba_to_string};
//!
//! let red = hsla_to_rgba(0.0, 1.0, 0.5, 1.0);
//! assert_eq!(rgba_to_string(red), "rgba(255,0,0,1.00)");
//!
//! let blue = hsia_to_rgba(240.0, 1.0, 1.0, 1.0);
//! let purple = morph_rgba(red, blue, 0.5);
//! assert_eq!(rgba_to_string(purple), "rgba(127,0,127,1.00)");
//! ```
//!
//! # Feature Flags
//!
//! - `serde` - Serialization for [`Hsla`], [`Hsia`] and [`Rgba`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod hsi;
pub mod hsl;
pub mod morph;

pub use hsi::{hsia_to_rgba, Hsia};
pub use hsl::{hsla_to_rgba, Hsla};
pub use morph::morph_rgba;
pub use tint_core::{rgba_to_string, Rgba};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::hsi::{hsia_to_rgba, Hsia};
    pub use crate::hsl::{hsla_to_rgba, Hsla};
    pub use crate::morph::morph_rgba;
    pub use tint_core::prelude::*;
}
