use std::collections::HashSet;

use super::kind::PaletteKind;
use crate::color::{hsl_components_to_rgb, rgb_to_hsl, Hsl, Rgb};

/// Lightness multipliers for the monochromatic group, lightest first.
const MONOCHROMATIC_FACTORS: [f64; 4] = [0.8, 0.6, 0.4, 0.2];
/// Interpolation factors toward white (tints) and black (shades).
const MIX_FACTORS: [f64; 4] = [0.2, 0.4, 0.6, 0.8];

const ANALOGOUS_OFFSETS: [f64; 2] = [-30.0, 30.0];
const TRIADIC_OFFSETS: [f64; 2] = [120.0, 240.0];
const COMPLEMENTARY_OFFSET: f64 = 180.0;

/// All palette groups derived from one base color, as `#RRGGBB` codes.
///
/// Array lengths are fixed by the type: 4 monochromatic, 2 analogous,
/// 2 triadic, 1 complementary, 4 tints and 4 shades. A set is never
/// updated in place; build a new one when the base color changes.
///
/// # Example
///
/// ```
/// use chroma_core::{PaletteSet, Rgb};
///
/// let set = PaletteSet::from_rgb(Rgb::new(255, 0, 0));
/// assert_eq!(set.triadic, ["#00FF00", "#0000FF"]);
/// assert_eq!(set.tints[0], "#FF3333");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaletteSet {
    pub monochromatic: [String; 4],
    pub analogous: [String; 2],
    pub triadic: [String; 2],
    pub complementary: [String; 1],
    pub tints: [String; 4],
    pub shades: [String; 4],
}

impl PaletteSet {
    /// Generate every group from a base HSL code.
    pub fn from_hsl(base: Hsl) -> Self {
        let h = base.h as f64;
        let s = base.s as f64;
        let l = base.l as f64;

        let hex = |h: f64, l: f64| hsl_components_to_rgb(h, s, l).to_hex();

        Self {
            monochromatic: MONOCHROMATIC_FACTORS.map(|f| hex(h, l * f)),
            analogous: ANALOGOUS_OFFSETS.map(|offset| hex(h + offset, l)),
            triadic: TRIADIC_OFFSETS.map(|offset| hex(h + offset, l)),
            complementary: [hex(h + COMPLEMENTARY_OFFSET, l)],
            tints: MIX_FACTORS.map(|f| hex(h, l + (100.0 - l) * f)),
            shades: MIX_FACTORS.map(|f| hex(h, l * (1.0 - f))),
        }
    }

    /// Generate every group for an RGB sample (via its HSL code).
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self::from_hsl(rgb_to_hsl(rgb))
    }

    /// Colors of one group.
    pub fn get(&self, kind: PaletteKind) -> &[String] {
        match kind {
            PaletteKind::Monochromatic => &self.monochromatic,
            PaletteKind::Analogous => &self.analogous,
            PaletteKind::Triadic => &self.triadic,
            PaletteKind::Complementary => &self.complementary,
            PaletteKind::Tints => &self.tints,
            PaletteKind::Shades => &self.shades,
        }
    }

    /// Groups in [`PaletteKind::ALL`] order.
    pub fn groups(&self) -> impl Iterator<Item = (PaletteKind, &[String])> + '_ {
        PaletteKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// Every color of every group, flattened in group order with repeats removed.
    ///
    /// The first occurrence of a code keeps its position.
    pub fn combined(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.groups()
            .flat_map(|(_, colors)| colors.iter())
            .filter(|hex| seen.insert(*hex))
            .cloned()
            .collect()
    }
}
