//! The full set of codes for one sampled color.

use super::{rgb_to_cmyk, rgb_to_hsl, rgb_to_hsv, Cmyk, Hsl, Hsv, Rgb};

/// Every representation of one sampled color.
///
/// Each field is derived from `rgb` independently, so converting `hsl` back
/// to RGB can land a channel up to five steps away from `rgb`. `hex` is
/// always exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorData {
    pub rgb: Rgb,
    /// Canonical `#RRGGBB` code
    pub hex: String,
    pub hsl: Hsl,
    pub hsv: Hsv,
    pub cmyk: Cmyk,
}

impl ColorData {
    /// Derive all codes for `rgb`.
    ///
    /// # Example
    /// ```
    /// use chroma_core::{Cmyk, ColorData, Hsl, Hsv, Rgb};
    ///
    /// let data = ColorData::from_rgb(Rgb::new(255, 0, 0));
    /// assert_eq!(data.hex, "#FF0000");
    /// assert_eq!(data.hsl, Hsl::new(0, 100, 50));
    /// assert_eq!(data.hsv, Hsv::new(0, 100, 100));
    /// assert_eq!(data.cmyk, Cmyk::new(0, 100, 100, 0));
    /// ```
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            rgb,
            hex: rgb.to_hex(),
            hsl: rgb_to_hsl(rgb),
            hsv: rgb_to_hsv(rgb),
            cmyk: rgb_to_cmyk(rgb),
        }
    }
}

impl From<Rgb> for ColorData {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{hex_to_rgb, hsl_to_rgb};

    #[test]
    fn test_fields_describe_the_same_color() {
        let rgb = Rgb::new(0x33, 0x66, 0xCC);
        let data = ColorData::from_rgb(rgb);

        assert_eq!(hex_to_rgb(&data.hex), Some(rgb));
        assert_eq!(hsl_to_rgb(data.hsl), rgb);
        assert_eq!(data.hsv, Hsv::new(220, 75, 80));
        assert_eq!(data.cmyk, Cmyk::new(75, 50, 0, 20));
    }

    #[test]
    fn test_gray_sample() {
        let data = ColorData::from(Rgb::new(128, 128, 128));
        assert_eq!(data.hex, "#808080");
        assert_eq!(data.hsl, Hsl::new(0, 0, 50));
        assert_eq!(data.hsv, Hsv::new(0, 0, 50));
        assert_eq!(data.cmyk, Cmyk::new(0, 0, 0, 50));
    }
}
