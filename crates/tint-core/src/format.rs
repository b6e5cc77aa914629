//! Textual `rgba(R,G,B,A)` form of a color.
//!
//! Formatting scales the color channels by 255 and truncates toward zero;
//! it never rounds. Alpha stays in the unit interval and is written with
//! exactly two decimals, exact ties rounding away from zero (0.125 gives
//! `0.13`).
//!
//! ```rust
//! use tint_core::{rgba_to_string, Rgba};
//!
//! assert_eq!(rgba_to_string(Rgba::new(1.0, 0.0, 0.0, 1.0)), "rgba(255,0,0,1.00)");
//! // 0.5 * 255 = 127.5 truncates to 127
//! assert_eq!(rgba_to_string(Rgba::new(0.0, 0.5, 1.0, 0.5)), "rgba(0,127,255,0.50)");
//! ```
//!
//! Parsing accepts that output back (whitespace around fields is allowed).
//! Because formatting truncates, a round trip recovers each color channel
//! only to within `1/255`.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::pixel::Rgba;

const PREFIX: &str = "rgba(";
const SUFFIX: &str = ")";

/// Scales a unit-interval channel to `0..=255`, truncating toward zero.
///
/// Follows `as` cast semantics for invalid input: out-of-range values
/// saturate at the `i32` bounds and NaN becomes 0.
#[inline]
fn channel_to_8bit(value: f64) -> i32 {
    (value * 255.0) as i32
}

/// Rounds alpha so that `{:.2}` breaks exact ties away from zero.
///
/// A binary float sits exactly halfway between two hundredths only when it
/// is an odd multiple of 1/8 (0.125, 0.375, ...). Those are rounded here;
/// every other value is left for `{:.2}`, which is exact on non-ties.
#[inline]
fn alpha_to_hundredths(alpha: f64) -> f64 {
    let eighths = alpha * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        (alpha * 100.0).round() / 100.0
    } else {
        alpha
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{:.2})",
            channel_to_8bit(self.r),
            channel_to_8bit(self.g),
            channel_to_8bit(self.b),
            alpha_to_hundredths(self.a)
        )
    }
}

/// Formats a color as `rgba(R,G,B,A)`.
///
/// Equivalent to `c.to_string()`.
#[inline]
pub fn rgba_to_string(c: Rgba) -> String {
    c.to_string()
}

/// Parses the `rgba(R,G,B,A)` form produced by [`rgba_to_string`].
///
/// R, G and B must be integers in `0..=255` and are divided by 255.
/// A is read as a float and kept as is.
///
/// # Example
///
/// ```rust
/// use tint_core::parse_rgba;
///
/// let c = parse_rgba("rgba(255, 0, 51, 0.50)").unwrap();
/// assert_eq!(c.to_array(), [1.0, 0.0, 0.2, 0.5]);
/// ```
pub fn parse_rgba(s: &str) -> Result<Rgba> {
    let trimmed = s.trim();
    let body = trimmed
        .strip_prefix(PREFIX)
        .and_then(|rest| rest.strip_suffix(SUFFIX))
        .ok_or_else(|| Error::syntax(trimmed))?;

    let fields: Vec<&str> = body.split(',').map(str::trim).collect();
    if fields.len() != 4 {
        return Err(Error::ChannelCount {
            found: fields.len(),
        });
    }

    let mut rgb = [0.0; 3];
    for (channel, (slot, field)) in rgb.iter_mut().zip(&fields).enumerate() {
        let value: i64 = field
            .parse()
            .map_err(|_| Error::invalid_channel(channel, *field))?;
        if !(0..=255).contains(&value) {
            return Err(Error::ChannelOutOfRange { channel, value });
        }
        *slot = value as f64 / 255.0;
    }

    let alpha: f64 = fields[3]
        .parse()
        .map_err(|_| Error::invalid_channel(3, fields[3]))?;

    Ok(Rgba::from_rgb(rgb, alpha))
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_rgba(s)
    }
}
