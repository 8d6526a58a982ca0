//! RGB color type and HEX codes
//!
//! `Rgb` is the canonical sampled color: whatever the image sampler hands
//! over, every other representation is derived from it.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

/// An 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Canonical `#RRGGBB` code, uppercase.
    ///
    /// # Example
    /// ```
    /// use chroma_core::Rgb;
    /// assert_eq!(Rgb::new(10, 171, 255).to_hex(), "#0AABFF");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// True when all three channels are equal (no hue).
    #[inline]
    pub fn is_gray(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    /// CSS functional notation, e.g. `rgb(255, 0, 0)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Accepts `#RRGGBB` or `RRGGBB`, case-insensitive. The 3-digit
    /// shorthand is not accepted and surrounding whitespace is not trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use chroma_core::{ParseColorError, Rgb};
    ///
    /// let teal: Rgb = "#008080".parse().unwrap();
    /// assert_eq!(teal, Rgb::new(0, 128, 128));
    ///
    /// assert_eq!("#F00".parse::<Rgb>(), Err(ParseColorError::InvalidLength(3)));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);

        // Only ASCII hex digits may reach the nibble decode below.
        if let Some((position, found)) = digits
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_hexdigit())
        {
            return Err(ParseColorError::InvalidHex { found, position });
        }
        if digits.len() != 6 {
            return Err(ParseColorError::InvalidLength(digits.len()));
        }

        let mut channels = [0u8; 3];
        for (channel, pair) in channels.iter_mut().zip(digits.as_bytes().chunks_exact(2)) {
            *channel = (hex_value(pair[0]) << 4) | hex_value(pair[1]);
        }
        Ok(Self::from_bytes(channels))
    }
}

#[inline]
fn hex_value(digit: u8) -> u8 {
    (digit as char).to_digit(16).unwrap_or(0) as u8
}

/// Format a color as `#RRGGBB` (uppercase, zero-padded).
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_hex()
}

/// Parse a `#RRGGBB` / `RRGGBB` code, returning `None` for anything malformed.
///
/// Use [`Rgb::from_str`](std::str::FromStr) when the reason for the failure matters.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    hex.parse().ok()
}
