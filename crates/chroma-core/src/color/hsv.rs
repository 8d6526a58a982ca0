//! HSV color type

use std::fmt;

use super::{to_percent, Chroma, Rgb};

/// A color in HSV space with integer components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    /// Hue in degrees (0..360)
    pub h: u16,
    /// Saturation in percent (0..=100)
    pub s: u8,
    /// Value in percent (0..=100)
    pub v: u8,
}

impl Hsv {
    #[inline]
    pub const fn new(h: u16, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsv(rgb)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsv({}, {}%, {}%)", self.h, self.s, self.v)
    }
}

/// Convert RGB to HSV.
///
/// Value is the largest channel. Saturation is 0 for pure black, where the
/// ratio would be 0/0.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let chroma = Chroma::from_rgb(rgb);
    let s = if chroma.max == 0.0 {
        0.0
    } else {
        chroma.delta() / chroma.max
    };

    Hsv {
        h: chroma.hue_degrees(),
        s: to_percent(s),
        v: to_percent(chroma.max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hsv_extremes() {
        assert_eq!(rgb_to_hsv(Rgb::new(0, 0, 0)), Hsv::new(0, 0, 0));
        assert_eq!(rgb_to_hsv(Rgb::new(255, 255, 255)), Hsv::new(0, 0, 100));
    }

    #[test]
    fn test_rgb_to_hsv_known_values() {
        assert_eq!(rgb_to_hsv(Rgb::new(255, 0, 0)), Hsv::new(0, 100, 100));
        assert_eq!(rgb_to_hsv(Rgb::new(0, 128, 0)), Hsv::new(120, 100, 50));
        assert_eq!(rgb_to_hsv(Rgb::new(0x33, 0x66, 0xCC)), Hsv::new(220, 75, 80));
        assert_eq!(rgb_to_hsv(Rgb::new(128, 128, 128)), Hsv::new(0, 0, 50));
    }

    #[test]
    fn test_display_css_notation() {
        assert_eq!(Hsv::new(0, 100, 100).to_string(), "hsv(0, 100%, 100%)");
    }
}
