//! Dichromatic vision simulation
//!
//! Each [`BlindnessType`] carries a fixed 3x3 matrix that maps an sRGB
//! color to an approximation of how it appears to a viewer missing one cone
//! type. The matrices act directly on 8-bit channel values; results are
//! rounded and clamped back into `0..=255`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::color::Rgb;

type Matrix = [[f64; 3]; 3];

const PROTANOPIA: Matrix = [
    [0.567, 0.433, 0.0],
    [0.558, 0.442, 0.0],
    [0.0, 0.242, 0.758],
];

const DEUTERANOPIA: Matrix = [
    [0.625, 0.375, 0.0],
    [0.7, 0.3, 0.0],
    [0.0, 0.3, 0.7],
];

const TRITANOPIA: Matrix = [
    [0.95, 0.05, 0.0],
    [0.0, 0.433, 0.567],
    [0.0, 0.475, 0.525],
];

/// Kind of color-vision deficiency to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum BlindnessType {
    /// Missing long-wavelength (red) cones
    Protanopia,
    /// Missing medium-wavelength (green) cones
    Deuteranopia,
    /// Missing short-wavelength (blue) cones
    Tritanopia,
}

impl BlindnessType {
    /// All simulated deficiencies, in display order.
    pub const ALL: [BlindnessType; 3] = [
        BlindnessType::Protanopia,
        BlindnessType::Deuteranopia,
        BlindnessType::Tritanopia,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BlindnessType::Protanopia => "protanopia",
            BlindnessType::Deuteranopia => "deuteranopia",
            BlindnessType::Tritanopia => "tritanopia",
        }
    }

    fn matrix(self) -> &'static Matrix {
        match self {
            BlindnessType::Protanopia => &PROTANOPIA,
            BlindnessType::Deuteranopia => &DEUTERANOPIA,
            BlindnessType::Tritanopia => &TRITANOPIA,
        }
    }
}

impl fmt::Display for BlindnessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Unknown blindness type name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown blindness type {0:?} (expected protanopia, deuteranopia or tritanopia)")]
pub struct ParseBlindnessError(pub String);

impl FromStr for BlindnessType {
    type Err = ParseBlindnessError;

    /// Parse a type name, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "protanopia" => Ok(BlindnessType::Protanopia),
            "deuteranopia" => Ok(BlindnessType::Deuteranopia),
            "tritanopia" => Ok(BlindnessType::Tritanopia),
            _ => Err(ParseBlindnessError(s.to_string())),
        }
    }
}

/// Simulate how `rgb` appears under the given deficiency.
///
/// # Example
/// ```
/// use chroma_core::{simulate_blindness, BlindnessType, Rgb};
/// let seen = simulate_blindness(Rgb::new(0, 0, 255), BlindnessType::Tritanopia);
/// assert_eq!(seen, Rgb::new(0, 145, 134));
/// ```
pub fn simulate_blindness(rgb: Rgb, kind: BlindnessType) -> Rgb {
    let input = [rgb.r as f64, rgb.g as f64, rgb.b as f64];
    let m = kind.matrix();

    let channel = |row: &[f64; 3]| {
        let v = row[0] * input[0] + row[1] * input[1] + row[2] * input[2];
        v.round().clamp(0.0, 255.0) as u8
    };

    Rgb::new(channel(&m[0]), channel(&m[1]), channel(&m[2]))
}

/// Simulate every deficiency in [`BlindnessType::ALL`] order.
pub fn simulate_all(rgb: Rgb) -> [(BlindnessType, Rgb); 3] {
    BlindnessType::ALL.map(|kind| (kind, simulate_blindness(rgb, kind)))
}
