//! HSL color type
//!
//! Hue/saturation/lightness with whole-degree hue and whole-percent
//! saturation and lightness. Palette generation works in this model.

use std::fmt;

use super::{to_channel, to_percent, Chroma, Rgb};

/// A color in HSL space with integer components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue in degrees (0..360)
    pub h: u16,
    /// Saturation in percent (0..=100)
    pub s: u8,
    /// Lightness in percent (0..=100)
    pub l: u8,
}

impl Hsl {
    #[inline]
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsl(rgb)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl_to_rgb(hsl)
    }
}

impl fmt::Display for Hsl {
    /// CSS functional notation, e.g. `hsl(0, 100%, 50%)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// Convert RGB to HSL.
///
/// Grays (max == min) get hue 0 and saturation 0 without touching the hue
/// formula.
///
/// # Example
/// ```
/// use chroma_core::{rgb_to_hsl, Hsl, Rgb};
/// assert_eq!(rgb_to_hsl(Rgb::new(255, 0, 0)), Hsl::new(0, 100, 50));
/// assert_eq!(rgb_to_hsl(Rgb::new(255, 255, 255)), Hsl::new(0, 0, 100));
/// ```
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let chroma = Chroma::from_rgb(rgb);
    let l = (chroma.max + chroma.min) / 2.0;

    let s = if chroma.is_achromatic() {
        0.0
    } else if l > 0.5 {
        chroma.delta() / (2.0 - chroma.max - chroma.min)
    } else {
        chroma.delta() / (chroma.max + chroma.min)
    };

    Hsl {
        h: chroma.hue_degrees(),
        s: to_percent(s),
        l: to_percent(l),
    }
}

/// Convert HSL to RGB.
///
/// Hue outside `0..360` wraps; saturation and lightness above 100 clamp.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    hsl_components_to_rgb(hsl.h as f64, hsl.s as f64, hsl.l as f64)
}

/// Convert fractional HSL components to RGB.
///
/// `h` is in degrees and may be negative or exceed 360; `s` and `l` are
/// percentages clamped to `0..=100`. Palette generation scales lightness by
/// fractional factors and must not round before this final step.
///
/// # Example
/// ```
/// use chroma_core::{hsl_components_to_rgb, Rgb};
/// // -60 degrees is magenta
/// assert_eq!(hsl_components_to_rgb(-60.0, 100.0, 50.0), Rgb::new(255, 0, 255));
/// ```
pub fn hsl_components_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = h.rem_euclid(360.0) / 360.0;
    let s = s.clamp(0.0, 100.0) / 100.0;
    let l = l.clamp(0.0, 100.0) / 100.0;

    if s == 0.0 {
        let v = to_channel(l);
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::new(
        to_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
        to_channel(hue_to_channel(p, q, h)),
        to_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

/// Piecewise-linear channel intensity for a hue offset `t` (in turns).
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
