//! WCAG relative luminance and contrast ratio
//!
//! Luminance follows the WCAG 2.x definition: sRGB channels are gamma
//! expanded (linear segment up to 0.03928, power 2.4 above) and weighted by
//! the Rec. 709 coefficients. The contrast ratio between two colors is
//! `(L_lighter + 0.05) / (L_darker + 0.05)`, ranging from 1 (identical) to
//! 21 (black on white).

use crate::color::Rgb;

/// Minimum ratio for normal text at level AA.
pub const AA_NORMAL_THRESHOLD: f64 = 4.5;
/// Minimum ratio for large text at level AA.
pub const AA_LARGE_THRESHOLD: f64 = 3.0;
/// Minimum ratio for normal text at level AAA.
pub const AAA_NORMAL_THRESHOLD: f64 = 7.0;
/// Minimum ratio for large text at level AAA.
pub const AAA_LARGE_THRESHOLD: f64 = 4.5;

/// Gamma-expand one 8-bit sRGB channel to linear light.
#[inline]
fn linearize(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of `rgb`, in `0.0..=1.0`.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

/// WCAG contrast ratio between two colors. Order does not matter.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio of a foreground/background pair with its WCAG verdicts.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContrastReport {
    pub foreground: Rgb,
    pub background: Rgb,
    pub ratio: f64,
    pub aa_normal: bool,
    pub aa_large: bool,
    pub aaa_normal: bool,
    pub aaa_large: bool,
}

impl ContrastReport {
    /// Compute the ratio for `foreground` on `background` and grade it.
    pub fn evaluate(foreground: Rgb, background: Rgb) -> Self {
        let ratio = contrast_ratio(foreground, background);
        Self {
            foreground,
            background,
            ratio,
            aa_normal: ratio >= AA_NORMAL_THRESHOLD,
            aa_large: ratio >= AA_LARGE_THRESHOLD,
            aaa_normal: ratio >= AAA_NORMAL_THRESHOLD,
            aaa_large: ratio >= AAA_LARGE_THRESHOLD,
        }
    }

    /// Ratio formatted the way it is usually quoted, e.g. `4.48:1`.
    pub fn ratio_label(&self) -> String {
        format!("{:.2}:1", self.ratio)
    }
}
