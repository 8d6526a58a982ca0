//! Color types and conversion utilities
//!
//! This module provides the integer color models used throughout the crate
//! and the conversions between them.
//!
//! # Color Models
//!
//! - **Rgb**: The sampled 8-bit sRGB color. Every other model derives from it.
//! - **Hsl / Hsv**: Cylindrical models used for display and palette math.
//! - **Cmyk**: Subtractive ink percentages, for print-oriented users.
//!
//! # Example
//!
//! ```
//! use chroma_core::{hex_to_rgb, rgb_to_hsl, hsl_to_rgb, Rgb};
//!
//! let rgb = hex_to_rgb("#3366CC").unwrap();
//! assert_eq!(rgb, Rgb::new(0x33, 0x66, 0xCC));
//!
//! let hsl = rgb_to_hsl(rgb);
//! assert_eq!((hsl.h, hsl.s, hsl.l), (220, 60, 50));
//!
//! // Back to RGB, within one step per channel
//! let back = hsl_to_rgb(hsl);
//! assert!((back.b as i16 - rgb.b as i16).abs() <= 1);
//! ```

mod cmyk;
mod data;
mod error;
mod hsl;
mod hsv;
mod rgb;

pub use cmyk::{rgb_to_cmyk, Cmyk};
pub use data::ColorData;
pub use error::ParseColorError;
pub use hsl::{hsl_components_to_rgb, hsl_to_rgb, rgb_to_hsl, Hsl};
pub use hsv::{rgb_to_hsv, Hsv};
pub use rgb::{hex_to_rgb, rgb_to_hex, Rgb};

/// Normalized channels plus their extremes, shared by the HSL and HSV paths.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Chroma {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub max: f64,
    pub min: f64,
    hue_sector: HueSector,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum HueSector {
    Red,
    Green,
    Blue,
}

impl Chroma {
    pub fn from_rgb(rgb: Rgb) -> Self {
        // Pick the dominant channel on the integers so ties resolve red, green, blue.
        let max_u8 = rgb.r.max(rgb.g).max(rgb.b);
        let min_u8 = rgb.r.min(rgb.g).min(rgb.b);
        let hue_sector = if max_u8 == rgb.r {
            HueSector::Red
        } else if max_u8 == rgb.g {
            HueSector::Green
        } else {
            HueSector::Blue
        };

        Self {
            r: rgb.r as f64 / 255.0,
            g: rgb.g as f64 / 255.0,
            b: rgb.b as f64 / 255.0,
            max: max_u8 as f64 / 255.0,
            min: min_u8 as f64 / 255.0,
            hue_sector,
        }
    }

    /// Spread between the largest and smallest channel.
    #[inline]
    pub fn delta(&self) -> f64 {
        self.max - self.min
    }

    #[inline]
    pub fn is_achromatic(&self) -> bool {
        self.delta() == 0.0
    }

    /// Hue in whole degrees, wrapped into `0..360`.
    ///
    /// Grays have no hue and report 0.
    pub fn hue_degrees(&self) -> u16 {
        if self.is_achromatic() {
            return 0;
        }

        let d = self.delta();
        let sector = match self.hue_sector {
            HueSector::Red => (self.g - self.b) / d + if self.g < self.b { 6.0 } else { 0.0 },
            HueSector::Green => (self.b - self.r) / d + 2.0,
            HueSector::Blue => (self.r - self.g) / d + 4.0,
        };

        let degrees = (sector / 6.0 * 360.0).round() as i32;
        degrees.rem_euclid(360) as u16
    }
}

/// Scale a unit fraction to a whole percent.
#[inline]
pub(crate) fn to_percent(value: f64) -> u8 {
    (value * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Scale a unit fraction to an 8-bit channel.
#[inline]
pub(crate) fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
