//! HSI (hue, saturation, intensity) to RGBA.
//!
//! Intensity is the top of the hue sweep and saturation pulls the bottom
//! down from it: the sweep runs from `i * (1 - s)` to `i`.

use tint_core::Rgba;
use tint_math::hue_to_rgb;

/// HSI color with alpha.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsia {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Intensity.
    pub i: f64,
    /// Alpha.
    pub a: f64,
}

impl Hsia {
    /// Create a new HSI color.
    #[inline]
    pub const fn new(h: f64, s: f64, i: f64, a: f64) -> Self {
        Self { h, s, i, a }
    }

    /// Convert to RGBA. See [`hsia_to_rgba`].
    #[inline]
    pub fn to_rgba(self) -> Rgba {
        hsia_to_rgba(self.h, self.s, self.i, self.a)
    }
}

impl From<Hsia> for Rgba {
    #[inline]
    fn from(c: Hsia) -> Self {
        c.to_rgba()
    }
}

/// Converts hue/saturation/intensity/alpha to RGBA.
///
/// `intensity <= 0` gives black and `saturation <= 0` a gray at
/// `intensity`; otherwise the hue is swept from `intensity * (1 - saturation)`
/// up to `intensity`. There is no upper cutoff, so intensities above 1 scale
/// past white.
///
/// # Example
///
/// ```rust
/// use tint_color::hsia_to_rgba;
///
/// assert_eq!(hsia_to_rgba(0.0, 1.0, 1.0, 1.0).to_array(), [1.0, 0.0, 0.0, 1.0]);
/// assert_eq!(hsia_to_rgba(0.0, 0.0, 0.6, 1.0).to_array(), [0.6, 0.6, 0.6, 1.0]);
/// ```
pub fn hsia_to_rgba(hue: f64, saturation: f64, intensity: f64, alpha: f64) -> Rgba {
    if intensity <= 0.0 {
        return Rgba::gray(0.0, alpha);
    }
    if saturation <= 0.0 {
        return Rgba::gray(intensity, alpha);
    }

    let m = intensity * (1.0 - saturation);
    let mut rgb = [0.0; 3];
    hue_to_rgb(m, intensity, hue, &mut rgb);
    Rgba::from_rgb(rgb, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_black() {
        assert_eq!(hsia_to_rgba(10.0, 0.5, 0.0, 0.3), Rgba::gray(0.0, 0.3));
        assert_eq!(hsia_to_rgba(10.0, 0.0, -1.0, 0.3), Rgba::gray(0.0, 0.3));
    }

    #[test]
    fn test_gray() {
        assert_eq!(hsia_to_rgba(10.0, 0.0, 0.4, 1.0), Rgba::gray(0.4, 1.0));
        assert_eq!(hsia_to_rgba(10.0, 0.0, 1.0, 1.0), Rgba::WHITE);
    }

    #[test]
    fn test_half_saturation() {
        // sweep from 0.4 to 0.8, hue 60 deg sits on the sector 1 boundary
        let c = hsia_to_rgba(60.0, 0.5, 0.8, 1.0);
        assert_abs_diff_eq!(c.r, 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(c.g, 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(c.b, 0.4, epsilon = 1e-12);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_intensity_above_one() {
        let c = hsia_to_rgba(0.0, 0.0, 1.5, 1.0);
        assert_eq!(c, Rgba::gray(1.5, 1.0));
    }

    #[test]
    fn test_struct_matches_function() {
        let hsia = Hsia::new(200.0, 0.3, 0.9, 0.5);
        assert_eq!(hsia.to_rgba(), hsia_to_rgba(200.0, 0.3, 0.9, 0.5));
    }
}
