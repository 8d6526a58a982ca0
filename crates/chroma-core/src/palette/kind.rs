use std::fmt;

/// The palette groups generated for every base color, in export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum PaletteKind {
    /// Same hue and saturation, darker lightness steps
    Monochromatic,
    /// Neighbors 30 degrees either side
    Analogous,
    /// The other two corners of the hue triangle
    Triadic,
    /// Opposite hue
    Complementary,
    /// Lightness moved toward white
    Tints,
    /// Lightness moved toward black
    Shades,
}

impl PaletteKind {
    pub const ALL: [PaletteKind; 6] = [
        PaletteKind::Monochromatic,
        PaletteKind::Analogous,
        PaletteKind::Triadic,
        PaletteKind::Complementary,
        PaletteKind::Tints,
        PaletteKind::Shades,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaletteKind::Monochromatic => "monochromatic",
            PaletteKind::Analogous => "analogous",
            PaletteKind::Triadic => "triadic",
            PaletteKind::Complementary => "complementary",
            PaletteKind::Tints => "tints",
            PaletteKind::Shades => "shades",
        }
    }

    /// Human-readable heading, e.g. `Monochromatic`.
    pub fn title(self) -> &'static str {
        match self {
            PaletteKind::Monochromatic => "Monochromatic",
            PaletteKind::Analogous => "Analogous",
            PaletteKind::Triadic => "Triadic",
            PaletteKind::Complementary => "Complementary",
            PaletteKind::Tints => "Tints",
            PaletteKind::Shades => "Shades",
        }
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
