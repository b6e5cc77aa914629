//! The six-sector hue wheel.
//!
//! A hue in degrees selects one of six 60° sectors. Within a sector one
//! channel sits at `max`, one at `min`, and the third ramps linearly between
//! them:
//!
//! ```text
//! sector   R        G        B
//!   0      max      rising   min
//!   1      falling  max      min
//!   2      min      max      rising
//!   3      min      falling  max
//!   4      rising   min      max
//!   5      max      min      falling
//! ```
//!
//! The hue is wrapped by dropping whole turns with truncation toward zero.
//! Negative hues therefore keep a negative fraction: anything in
//! `(-60°, 0°]` stays in sector 0 with a negative ramp factor, and anything
//! further below lands in the sector-5 row.

use crate::interp::{lerp, trunc_fract};

/// Splits a hue in degrees into its sector index and the position inside it.
///
/// The sector is the scaled hue truncated toward zero; the factor is what
/// remains. For hues in `[0°, 360°)` this yields a sector in `0..=5` and a
/// factor in `[0, 1)`.
///
/// # Example
///
/// ```rust
/// use tint_math::hue_sector;
///
/// assert_eq!(hue_sector(90.0), (1, 0.5));
/// assert_eq!(hue_sector(450.0), (1, 0.5));
/// assert_eq!(hue_sector(-90.0), (-1, -0.5));
/// ```
#[inline]
pub fn hue_sector(hue: f64) -> (i32, f64) {
    let scaled = trunc_fract(hue / 360.0) * 6.0;
    let sector = scaled as i32;
    (sector, scaled - f64::from(sector))
}

/// Writes the RGB of `hue` swept between `min` and `max` into `rgb`.
///
/// Only the three color channels are written; callers keep alpha elsewhere.
/// No input is validated or clamped.
///
/// # Example
///
/// ```rust
/// use tint_math::hue_to_rgb;
///
/// let mut rgb = [0.0; 3];
/// hue_to_rgb(0.2, 0.8, 30.0, &mut rgb);
/// assert_eq!(rgb[0], 0.8);
/// assert!((rgb[1] - 0.5).abs() < 1e-12);
/// assert_eq!(rgb[2], 0.2);
/// ```
pub fn hue_to_rgb(min: f64, max: f64, hue: f64, rgb: &mut [f64; 3]) {
    let (sector, factor) = hue_sector(hue);
    let rising = lerp(min, max, factor);
    let falling = lerp(max, min, factor);

    *rgb = match sector {
        0 => [max, rising, min],
        1 => [falling, max, min],
        2 => [min, max, rising],
        3 => [min, falling, max],
        4 => [rising, min, max],
        _ => [max, min, falling],
    };
}
