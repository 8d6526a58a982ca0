//! Palette export to JSON, plain text and PNG swatch sheets.

use chrono::{DateTime, Utc};
use chroma_core::{hex_to_rgb, PaletteSet, Rgb};
use serde::Serialize;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{ApiError, ExportError};
use crate::models::{ExportConfig, SwatchConfig};
use crate::rendering::SvgRenderer;

/// Upper bound on the RGBA pixmap of a swatch sheet.
const MAX_SHEET_BYTES: u64 = 64 * 1024 * 1024;

/// Space under each swatch for its HEX label.
const LABEL_HEIGHT: u64 = 16;
/// Space under the grid for the signature.
const FOOTER_HEIGHT: u64 = 28;

const TITLE_COLOR: &str = "#E5E7EB";
const FOOTER_COLOR: &str = "#9CA3AF";
const DARK_TEXT: Rgb = Rgb::new(0x0B, 0x0B, 0x0D);
const LIGHT_TEXT: Rgb = Rgb::new(0xF9, 0xFA, 0xFB);

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Txt,
    Png,
}

impl ExportFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Txt => "text/plain; charset=utf-8",
            ExportFormat::Png => "image/png",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            ExportFormat::Json => "palette.json",
            ExportFormat::Txt => "palette.txt",
            ExportFormat::Png => "palette.png",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "txt" | "text" => Ok(ExportFormat::Txt),
            "png" => Ok(ExportFormat::Png),
            _ => Err(ApiError::UnsupportedFormat(s.to_string())),
        }
    }
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    palettes: &'a PaletteSet,
    combined: Vec<String>,
    meta: ExportMeta<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportMeta<'a> {
    app: &'a str,
    exported_at: String,
    format: &'static str,
    signature: &'a str,
}

/// Renders palette sets into downloadable documents.
#[derive(Clone)]
pub struct PaletteExporter {
    config: ExportConfig,
    renderer: Arc<SvgRenderer>,
}

impl PaletteExporter {
    pub fn new(config: ExportConfig, renderer: Arc<SvgRenderer>) -> Self {
        Self { config, renderer }
    }

    /// Export in `format`, stamping JSON documents with `exported_at`.
    pub fn export(
        &self,
        palettes: &PaletteSet,
        format: ExportFormat,
        exported_at: DateTime<Utc>,
    ) -> Result<Vec<u8>, ExportError> {
        let bytes = match format {
            ExportFormat::Json => self.to_json(palettes, exported_at)?.into_bytes(),
            ExportFormat::Txt => self.to_txt(palettes).into_bytes(),
            ExportFormat::Png => self.to_png(palettes)?,
        };

        tracing::debug!(?format, size = bytes.len(), "Exported palette");
        Ok(bytes)
    }

    /// Pretty-printed JSON with every group, the combined list and metadata.
    pub fn to_json(
        &self,
        palettes: &PaletteSet,
        exported_at: DateTime<Utc>,
    ) -> Result<String, ExportError> {
        let document = ExportDocument {
            palettes,
            combined: palettes.combined(),
            meta: ExportMeta {
                app: &self.config.app_name,
                exported_at: exported_at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
                format: "hex",
                signature: &self.config.signature,
            },
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    /// Combined colors one per line, a blank line, then the signature.
    pub fn to_txt(&self, palettes: &PaletteSet) -> String {
        format!(
            "{}\n\n{}",
            palettes.combined().join("\n"),
            self.config.signature
        )
    }

    /// Labeled swatch grid of the combined colors on a dark canvas.
    pub fn to_png(&self, palettes: &PaletteSet) -> Result<Vec<u8>, ExportError> {
        let svg = self.to_svg(palettes)?;
        self.renderer.render_png(&svg)
    }

    /// The swatch sheet as an SVG document.
    pub fn to_svg(&self, palettes: &PaletteSet) -> Result<String, ExportError> {
        let colors: Vec<Rgb> = palettes
            .combined()
            .iter()
            .filter_map(|hex| hex_to_rgb(hex))
            .collect();
        let sheet = SwatchSheet::layout(&self.config.swatch, colors.len())?;
        let title = format!("{} Palette", self.config.app_name);

        Ok(sheet.to_svg(
            &colors,
            self.config.swatch.background_rgb(),
            &title,
            &self.config.signature,
        ))
    }
}

/// Label color for `swatch`: dark on bright swatches, light otherwise.
fn readable_text_color(swatch: Rgb) -> Rgb {
    // Rec. 709 weights on gamma-encoded channels
    let luma = 0.2126 * swatch.r as f64 + 0.7152 * swatch.g as f64 + 0.0722 * swatch.b as f64;
    if luma > 140.0 {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

/// Geometry of a swatch sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SwatchSheet {
    width: u32,
    height: u32,
    columns: u32,
    tile: u32,
    gap: u32,
    padding: u32,
}

impl SwatchSheet {
    fn layout(config: &SwatchConfig, count: usize) -> Result<Self, ExportError> {
        let count = count.max(1) as u64;
        let columns = count.min(config.columns.max(1) as u64);
        let rows = count.div_ceil(columns);
        let tile = config.tile.max(1) as u64;
        let gap = config.gap as u64;
        let padding = config.padding as u64;

        // n cells of `cell` pixels with gaps between, padded, plus `extra`
        let span = |n: u64, cell: u64, extra: u64| {
            n.checked_mul(cell)?
                .checked_add((n - 1).checked_mul(gap)?)?
                .checked_add(padding.checked_mul(2)?)?
                .checked_add(extra)
        };
        let width = span(columns, tile, 0);
        let height = span(rows, tile + LABEL_HEIGHT, FOOTER_HEIGHT);

        let fits = width
            .zip(height)
            .and_then(|(w, h)| w.checked_mul(h)?.checked_mul(4))
            .is_some_and(|bytes| bytes <= MAX_SHEET_BYTES);
        let (Some(width), Some(height), true) = (width, height, fits) else {
            return Err(ExportError::GridTooLarge {
                width: width.unwrap_or(u64::MAX),
                height: height.unwrap_or(u64::MAX),
            });
        };

        // Bounded by MAX_SHEET_BYTES above, so every value fits in u32
        Ok(Self {
            width: width as u32,
            height: height as u32,
            columns: columns as u32,
            tile: tile as u32,
            gap: gap as u32,
            padding: padding as u32,
        })
    }

    /// Top-left corner of swatch `index`.
    fn origin(&self, index: usize) -> (u32, u32) {
        let index = index as u32;
        let column = index % self.columns;
        let row = index / self.columns;
        (
            self.padding + column * (self.tile + self.gap),
            self.padding + row * (self.tile + LABEL_HEIGHT as u32 + self.gap),
        )
    }

    fn to_svg(&self, colors: &[Rgb], background: Rgb, title: &str, signature: &str) -> String {
        let (width, height) = (self.width, self.height);
        let tile = self.tile;

        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );
        svg.push_str(&format!(
            r#"<rect width="{width}" height="{height}" fill="{}"/>"#,
            background.to_hex()
        ));
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" font-family="sans-serif" font-size="14" font-weight="bold" fill="{TITLE_COLOR}">{}</text>"#,
            self.padding,
            self.padding as i64 - 8,
            escape_xml(title)
        ));

        for (index, &color) in colors.iter().enumerate() {
            let (x, y) = self.origin(index);
            let hex = color.to_hex();

            svg.push_str(&format!(
                r#"<rect x="{x}" y="{y}" width="{tile}" height="{tile}" fill="{hex}"/>"#
            ));
            // 1px outline on the swatch's own edge pixels
            if tile > 2 {
                svg.push_str(&format!(
                    r##"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="#FFFFFF" stroke-opacity="0.15" stroke-width="1"/>"##,
                    x as f64 + 0.5,
                    y as f64 + 0.5,
                    tile - 1,
                    tile - 1
                ));
            }
            svg.push_str(&format!(
                r#"<text x="{}" y="{}" text-anchor="middle" font-family="sans-serif" font-size="12" fill="{}">{hex}</text>"#,
                x as f64 + tile as f64 / 2.0,
                y + tile + 12,
                readable_text_color(color).to_hex()
            ));
        }

        svg.push_str(&format!(
            r#"<text x="{}" y="{}" text-anchor="middle" font-family="sans-serif" font-size="12" fill="{FOOTER_COLOR}">{}</text>"#,
            width as f64 / 2.0,
            height as i64 - self.padding as i64,
            escape_xml(signature)
        ));
        svg.push_str("</svg>");
        svg
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
