//! Linear interpolation between two RGBA colors.

use tint_core::Rgba;
use tint_math::lerp;

/// Morphs `from` toward `to` by `percent`, channel by channel.
///
/// Each channel, alpha included, becomes `from + (to - from) * percent`.
/// `percent` is not clamped: values outside `[0, 1]` extrapolate, which
/// gives overshoot past either endpoint.
///
/// # Example
///
/// ```rust
/// use tint_color::{morph_rgba, Rgba};
///
/// let black = Rgba::new(0.0, 0.0, 0.0, 0.0);
/// let white = Rgba::WHITE;
///
/// assert_eq!(morph_rgba(black, white, 0.25).to_array(), [0.25, 0.25, 0.25, 0.25]);
/// assert_eq!(morph_rgba(black, white, 1.5).to_array(), [1.5, 1.5, 1.5, 1.5]);
/// ```
#[inline]
pub fn morph_rgba(from: Rgba, to: Rgba, percent: f64) -> Rgba {
    from.zip_with(to, |a, b| lerp(a, b, percent))
}
