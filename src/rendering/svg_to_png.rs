use resvg::usvg::{self, Transform};
use std::collections::BTreeSet;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use tiny_skia::Pixmap;

use crate::error::ExportError;

/// Families tried, in order, for generic `sans-serif` text.
const PREFERRED_SANS: [&str; 7] = [
    "Inter",
    "Roboto",
    "Noto Sans",
    "DejaVu Sans",
    "Liberation Sans",
    "Arial",
    "Helvetica",
];

/// Renders SVG documents to 8-bit RGB PNG.
pub struct SvgRenderer {
    /// Font database for text rendering
    fontdb: Arc<fontdb::Database>,
}

impl SvgRenderer {
    /// Create a renderer with system fonts only
    pub fn new() -> Self {
        Self::with_font_dir(None)
    }

    /// Create a renderer with fonts from `dir` in addition to system fonts
    pub fn with_font_dir(dir: Option<&Path>) -> Self {
        let mut fontdb = fontdb::Database::new();

        if let Some(dir) = dir {
            fontdb.load_fonts_dir(dir);
            tracing::debug!(dir = %dir.display(), fonts = fontdb.len(), "Loaded font directory");
        }
        fontdb.load_system_fonts();

        let families: BTreeSet<String> = fontdb
            .faces()
            .filter_map(|f| f.families.first().map(|(name, _)| name.clone()))
            .collect();

        // fontdb maps sans-serif to Arial, which slim containers rarely ship
        let sans = PREFERRED_SANS
            .iter()
            .find(|name| families.contains(**name))
            .map(|name| name.to_string())
            .or_else(|| families.iter().next().cloned());

        match &sans {
            Some(family) => {
                fontdb.set_sans_serif_family(family.as_str());
                tracing::debug!(font_count = fontdb.len(), sans = %family, "Loaded fonts for palette sheets");
            }
            None => tracing::warn!("No fonts found, palette sheets will have no text"),
        }

        Self {
            fontdb: Arc::new(fontdb),
        }
    }

    /// Whether any font face is available for text
    pub fn has_fonts(&self) -> bool {
        !self.fontdb.is_empty()
    }

    /// Rasterize an SVG document at its own size and encode it as RGB PNG.
    pub fn render_png(&self, svg: &str) -> Result<Vec<u8>, ExportError> {
        let pixmap = self.rasterize_svg(svg)?;

        let rgb: Vec<u8> = pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let color = pixel.demultiply();
                [color.red(), color.green(), color.blue()]
            })
            .collect();

        encode_png(pixmap.width(), pixmap.height(), &rgb)
    }

    /// Parse and rasterize SVG to an RGBA pixmap
    fn rasterize_svg(&self, svg: &str) -> Result<Pixmap, ExportError> {
        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(svg, &options)
            .map_err(|e| ExportError::SvgParse(e.to_string()))?;

        let size = tree.size().to_int_size();
        let mut pixmap =
            Pixmap::new(size.width(), size.height()).ok_or(ExportError::PixmapAllocation)?;
        resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

        Ok(pixmap)
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn encode_png(width: u32, height: u32, pixels: &[u8]) -> Result<Vec<u8>, ExportError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Default);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ExportError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(pixels)
            .map_err(|e| ExportError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(bytes: &[u8]) -> (png::OutputInfo, Vec<u8>) {
        let decoder = png::Decoder::new(Cursor::new(bytes));
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        buf.truncate(info.buffer_size());
        (info, buf)
    }

    #[test]
    fn test_render_solid_rect() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="3">
            <rect width="4" height="3" fill="#336699"/>
        </svg>"##;
        let png_bytes = SvgRenderer::new().render_png(svg).unwrap();
        let (info, buf) = decode(&png_bytes);

        assert_eq!((info.width, info.height), (4, 3));
        assert_eq!(info.color_type, png::ColorType::Rgb);
        assert_eq!(&buf[..3], &[0x33, 0x66, 0x99]);
        assert_eq!(buf.len(), 4 * 3 * 3);
    }

    #[test]
    fn test_invalid_svg() {
        let result = SvgRenderer::new().render_png("<svg");
        assert!(matches!(result, Err(ExportError::SvgParse(_))));
    }
}
