//! CMYK color type

use std::fmt;

use super::{to_percent, Rgb};

/// Subtractive ink coverage, each channel in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cmyk {
    /// Cyan (0..=100)
    pub c: u8,
    /// Magenta (0..=100)
    pub m: u8,
    /// Yellow (0..=100)
    pub y: u8,
    /// Key / black (0..=100)
    pub k: u8,
}

impl Cmyk {
    #[inline]
    pub const fn new(c: u8, m: u8, y: u8, k: u8) -> Self {
        Self { c, m, y, k }
    }
}

impl From<Rgb> for Cmyk {
    fn from(rgb: Rgb) -> Self {
        rgb_to_cmyk(rgb)
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cmyk({}%, {}%, {}%, {}%)",
            self.c, self.m, self.y, self.k
        )
    }
}

/// Convert RGB to CMYK.
///
/// Black is pulled out first (`k = min(c, m, y)`) and the remaining inks are
/// normalized by `1 - k`. Pure black has nothing left to normalize and
/// reports `c = m = y = 0`.
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let c = 1.0 - rgb.r as f64 / 255.0;
    let m = 1.0 - rgb.g as f64 / 255.0;
    let y = 1.0 - rgb.b as f64 / 255.0;
    let k = c.min(m).min(y);

    if k == 1.0 {
        return Cmyk::new(0, 0, 0, 100);
    }

    let scale = 1.0 - k;
    Cmyk {
        c: to_percent((c - k) / scale),
        m: to_percent((m - k) / scale),
        y: to_percent((y - k) / scale),
        k: to_percent(k),
    }
}
