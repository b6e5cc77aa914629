//! Error types for tint-core operations.
//!
//! The color conversions themselves are total and never fail. Errors only
//! arise when reading a color back from its `rgba(R,G,B,A)` textual form.
//!
//! # Usage
//!
//! ```rust
//! use tint_core::{parse_rgba, Error};
//!
//! let err = parse_rgba("rgb(1,2,3)").unwrap_err();
//! assert!(matches!(err, Error::Syntax { .. }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing an `rgba(...)` string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Input is not wrapped in `rgba(` ... `)`.
    #[error("malformed color {input:?}: expected rgba(R,G,B,A)")]
    Syntax {
        /// The offending input.
        input: String,
    },

    /// Wrong number of comma-separated fields inside the parentheses.
    #[error("expected 4 channels, found {found}")]
    ChannelCount {
        /// Number of fields present.
        found: usize,
    },

    /// A field could not be parsed as a number.
    #[error("channel {channel} is not a number: {value:?}")]
    InvalidChannel {
        /// Zero-based channel index (0 = red, 3 = alpha).
        channel: usize,
        /// The raw field text.
        value: String,
    },

    /// An 8-bit channel lies outside `0..=255`.
    #[error("channel {channel} value {value} is outside 0..=255")]
    ChannelOutOfRange {
        /// Zero-based channel index.
        channel: usize,
        /// The parsed value.
        value: i64,
    },
}

impl Error {
    /// Creates an [`Error::Syntax`] error.
    #[inline]
    pub fn syntax(input: impl Into<String>) -> Self {
        Self::Syntax {
            input: input.into(),
        }
    }

    /// Creates an [`Error::InvalidChannel`] error.
    #[inline]
    pub fn invalid_channel(channel: usize, value: impl Into<String>) -> Self {
        Self::InvalidChannel {
            channel,
            value: value.into(),
        }
    }
}
