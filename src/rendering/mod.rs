//! Rasterization of generated SVG documents.

mod svg_to_png;

pub use svg_to_png::SvgRenderer;
