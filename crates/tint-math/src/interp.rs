//! Interpolation utilities.
//!
//! # Usage
//!
//! ```rust
//! use tint_math::{lerp, trunc_fract};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! assert_eq!(trunc_fract(1.75), 0.75);
//! assert_eq!(trunc_fract(-1.75), -0.75);
//! ```

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` (up to rounding) when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Formula
///
/// `a + (b - a) * t`
///
/// # Example
///
/// ```rust
/// use tint_math::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
/// assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
/// assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
/// ```
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Fractional part with the sign of the input.
///
/// Subtracts the value truncated toward zero, so negative inputs give a
/// result in `(-1, 0]`. This is not a Euclidean modulo: `trunc_fract(-0.25)`
/// is `-0.25`, not `0.75`.
#[inline]
pub fn trunc_fract(x: f64) -> f64 {
    x - x.trunc()
}
