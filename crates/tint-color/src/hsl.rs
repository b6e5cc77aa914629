//! HSL (hue, saturation, lightness) to RGBA.
//!
//! Lightness picks the midpoint of the hue sweep and saturation its width:
//! the sweep runs from `l - delta` to `l + delta`, where `delta` is
//! `s * l` in the dark half and `s * (1 - l)` in the light half.

use tint_core::Rgba;
use tint_math::hue_to_rgb;

/// HSL color with alpha.
///
/// Hue is in degrees, everything else in `[0, 1]`.
///
/// # Example
///
/// ```rust
/// use tint_color::{Hsla, Rgba};
///
/// let green: Rgba = Hsla::new(120.0, 1.0, 0.5, 1.0).into();
/// assert!((green.g - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsla {
    /// Hue in degrees. Any value; whole turns are dropped.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Lightness.
    pub l: f64,
    /// Alpha, passed through unchanged.
    pub a: f64,
}

impl Hsla {
    /// Create a new HSL color.
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    /// Convert to RGBA. See [`hsla_to_rgba`].
    #[inline]
    pub fn to_rgba(self) -> Rgba {
        hsla_to_rgba(self.h, self.s, self.l, self.a)
    }
}

impl From<Hsla> for Rgba {
    #[inline]
    fn from(c: Hsla) -> Self {
        c.to_rgba()
    }
}

/// Converts hue/saturation/lightness/alpha to RGBA.
///
/// The first matching rule wins:
///
/// 1. `lightness <= 0` gives black.
/// 2. `lightness >= 1` gives white.
/// 3. `saturation <= 0` gives a gray at `lightness`.
/// 4. Otherwise the hue is swept around `lightness` (see the module docs).
///
/// Alpha is copied to the output as is.
///
/// # Example
///
/// ```rust
/// use tint_color::hsla_to_rgba;
///
/// assert_eq!(hsla_to_rgba(200.0, 0.7, 0.0, 0.5).to_array(), [0.0, 0.0, 0.0, 0.5]);
/// assert_eq!(hsla_to_rgba(0.0, 1.0, 0.5, 1.0).to_array(), [1.0, 0.0, 0.0, 1.0]);
/// ```
pub fn hsla_to_rgba(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Rgba {
    if lightness <= 0.0 {
        return Rgba::gray(0.0, alpha);
    }
    if lightness >= 1.0 {
        return Rgba::gray(1.0, alpha);
    }
    if saturation <= 0.0 {
        return Rgba::gray(lightness, alpha);
    }

    let delta = if lightness <= 0.5 {
        saturation * lightness
    } else {
        saturation * (1.0 - lightness)
    };

    let mut rgb = [0.0; 3];
    hue_to_rgb(lightness - delta, lightness + delta, hue, &mut rgb);
    Rgba::from_rgb(rgb, alpha)
}
