//! Palettes derived from a base color
//!
//! This module generates the related-color groups shown next to a sampled
//! color. Every group is derived from the base color's HSL code and
//! rendered back to HEX through [`hsl_components_to_rgb`](crate::hsl_components_to_rgb).

mod kind;
mod set;

pub use kind::PaletteKind;
pub use set::PaletteSet;
