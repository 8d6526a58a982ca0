//! chroma-core: color codes, accessibility metrics and palettes for sampled colors
//!
//! This library is the numerical engine behind the Chroma Vision color
//! picker. It takes a single 8-bit sRGB sample and derives everything the
//! picker shows about it: HEX/HSL/HSV/CMYK codes, WCAG contrast ratios,
//! color-blindness simulations and a family of generated palettes.
//!
//! Every operation is a pure function over small `Copy` values. Nothing
//! allocates beyond the returned HEX strings and nothing can fail except
//! parsing user-supplied text.
//!
//! # Quick Start
//!
//! ```
//! use chroma_core::{ColorData, PaletteSet, Rgb};
//!
//! let red = Rgb::new(255, 0, 0);
//! let data = ColorData::from_rgb(red);
//!
//! assert_eq!(data.hex, "#FF0000");
//! assert_eq!(data.hsl.to_string(), "hsl(0, 100%, 50%)");
//! assert_eq!(data.cmyk.to_string(), "cmyk(0%, 100%, 100%, 0%)");
//!
//! let palettes = PaletteSet::from_hsl(data.hsl);
//! assert_eq!(palettes.complementary[0], "#00FFFF");
//! ```
//!
//! # Accessibility
//!
//! ```
//! use chroma_core::{contrast_ratio, simulate_blindness, BlindnessType, ContrastReport, Rgb};
//!
//! let black = Rgb::new(0, 0, 0);
//! let white = Rgb::new(255, 255, 255);
//! assert!((contrast_ratio(black, white) - 21.0).abs() < 1e-9);
//!
//! let report = ContrastReport::evaluate(black, white);
//! assert!(report.aaa_normal);
//!
//! let seen = simulate_blindness(Rgb::new(255, 0, 0), BlindnessType::Protanopia);
//! assert_eq!(seen, Rgb::new(145, 142, 0));
//! ```
//!
//! # Color Models
//!
//! | Type | Channels | Range |
//! |------|----------|-------|
//! | [`Rgb`] | r, g, b | 0..=255 |
//! | [`Hsl`] | h, s, l | h in 0..360 degrees, s/l in 0..=100 percent |
//! | [`Hsv`] | h, s, v | h in 0..360 degrees, s/v in 0..=100 percent |
//! | [`Cmyk`] | c, m, y, k | 0..=100 percent |
//!
//! All derived models are integer-valued. Conversions round half away from
//! zero, and whole-percent saturation and lightness lose precision: a trip
//! through HSL and back moves a channel by up to five steps (grays by at most
//! one). HEX round-trips are exact.
//!
//! # Rounding and Degenerate Inputs
//!
//! Grays (r = g = b) have no hue: HSL and HSV report h = 0 and s = 0
//! instead of dividing by a zero chroma. Pure black has no ink ratio: CMYK
//! reports c = m = y = 0 with k = 100.

pub mod blindness;
pub mod color;
pub mod contrast;
pub mod history;
pub mod palette;
pub mod session;


pub use blindness::{simulate_all, simulate_blindness, BlindnessType, ParseBlindnessError};
pub use color::{
    hex_to_rgb, hsl_components_to_rgb, hsl_to_rgb, rgb_to_cmyk, rgb_to_hex, rgb_to_hsl,
    rgb_to_hsv, Cmyk, ColorData, Hsl, Hsv, ParseColorError, Rgb,
};
pub use contrast::{
    contrast_ratio, relative_luminance, ContrastReport, AAA_LARGE_THRESHOLD,
    AAA_NORMAL_THRESHOLD, AA_LARGE_THRESHOLD, AA_NORMAL_THRESHOLD,
};
pub use history::{ColorHistory, HISTORY_LIMIT};
pub use palette::{PaletteKind, PaletteSet};
pub use session::PickerSession;
