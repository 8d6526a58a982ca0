//! Error type for parsing color strings.

use thiserror::Error;

/// Error type for parsing hex color strings.
///
/// Returned by [`Rgb::from_str`](std::str::FromStr) when the input is not
/// exactly six hexadecimal digits with an optional leading `#`.
/// [`hex_to_rgb`](crate::hex_to_rgb) collapses every variant to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has the wrong number of digits (must be 6 after stripping '#')
    #[error("invalid hex color length: expected 6 digits, got {0}")]
    InvalidLength(usize),

    /// A character outside `0-9`, `a-f`, `A-F` was found
    #[error("invalid hex character {found:?} at position {position}")]
    InvalidHex {
        /// The offending character
        found: char,
        /// Character offset after the optional '#'
        position: usize,
    },
}
