//! The RGBA color value.
//!
//! [`Rgba`] is a plain four-channel record of `f64` values. Channels are
//! nominally in `[0, 1]`, but nothing enforces that: out-of-range values are
//! carried through every operation untouched.
//!
//! # Memory Layout
//!
//! Uses `#[repr(C)]` for predictable layout: `[R, G, B, A]`.

/// RGBA color with unit-interval channels.
///
/// # Example
///
/// ```
/// use tint_core::Rgba;
///
/// let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
/// assert_eq!(red.to_array(), [1.0, 0.0, 0.0, 1.0]);
///
/// let gray = Rgba::gray(0.5, 1.0);
/// assert_eq!(gray.rgb(), [0.5, 0.5, 0.5]);
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    /// Red channel value.
    pub r: f64,
    /// Green channel value.
    pub g: f64,
    /// Blue channel value.
    pub b: f64,
    /// Alpha channel value.
    pub a: f64,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Create a new RGBA color.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create a gray with all three color channels set to `value`.
    #[inline]
    pub const fn gray(value: f64, a: f64) -> Self {
        Self::new(value, value, value, a)
    }

    /// Create from an RGB triple with specified alpha.
    #[inline]
    pub const fn from_rgb(rgb: [f64; 3], a: f64) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2], a)
    }

    /// Returns the color channels without alpha.
    #[inline]
    pub const fn rgb(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Returns `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Creates from `[r, g, b, a]`.
    #[inline]
    pub const fn from_array(c: [f64; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    /// Combines two colors channel by channel, alpha included.
    #[inline]
    pub fn zip_with(self, other: Self, mut f: impl FnMut(f64, f64) -> f64) -> Self {
        Self::new(
            f(self.r, other.r),
            f(self.g, other.g),
            f(self.b, other.b),
            f(self.a, other.a),
        )
    }
}

impl From<[f64; 4]> for Rgba {
    #[inline]
    fn from(c: [f64; 4]) -> Self {
        Self::from_array(c)
    }
}

impl From<Rgba> for [f64; 4] {
    #[inline]
    fn from(c: Rgba) -> Self {
        c.to_array()
    }
}
