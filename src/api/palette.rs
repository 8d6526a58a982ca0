use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Json, Response},
};
use chroma_core::PaletteSet;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

use super::params::parse_color;
use crate::error::ApiError;
use crate::models::PaletteReport;
use crate::services::{ExportFormat, PaletteExporter};

/// Generate palettes
///
/// Monochromatic, analogous, triadic, complementary, tint and shade groups
/// for a base color, plus the de-duplicated union of all of them.
#[utoipa::path(
    get,
    path = "/api/palette/{color}",
    responses(
        (status = 200, description = "Generated palettes", body = PaletteReport),
        (status = 400, description = "Invalid color"),
    ),
    params(
        ("color" = String, Path, description = "RRGGBB, #RRGGBB (percent-encoded) or r,g,b"),
    ),
    tag = "Palette"
)]
pub async fn handle_palette(Path(color): Path<String>) -> Result<Json<PaletteReport>, ApiError> {
    let rgb = parse_color(&color)?;
    Ok(Json(PaletteReport::new(rgb)))
}

/// Query for palette export
#[derive(Debug, Deserialize, IntoParams)]
pub struct ExportQuery {
    /// json (default), txt or png
    pub format: Option<String>,
}

/// Download palettes
///
/// Returns the palettes as a JSON document, a plain-text list or a PNG
/// swatch sheet, with a `Content-Disposition` attachment header.
#[utoipa::path(
    get,
    path = "/api/palette/{color}/export",
    responses(
        (status = 200, description = "Export document (application/json, text/plain or image/png)"),
        (status = 400, description = "Invalid color or unsupported format"),
        (status = 500, description = "Export failed"),
    ),
    params(
        ("color" = String, Path, description = "RRGGBB, #RRGGBB (percent-encoded) or r,g,b"),
        ExportQuery,
    ),
    tag = "Palette"
)]
pub async fn handle_palette_export(
    State(exporter): State<Arc<PaletteExporter>>,
    Path(color): Path<String>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, ApiError> {
    let rgb = parse_color(&color)?;
    let format = match query.format.as_deref() {
        Some(format) => format.parse::<ExportFormat>()?,
        None => ExportFormat::Json,
    };

    let palettes = PaletteSet::from_rgb(rgb);
    let exported_at = chrono::Utc::now();

    // PNG encoding is CPU-bound
    let bytes = tokio::task::spawn_blocking(move || exporter.export(&palettes, format, exported_at))
        .await
        .map_err(|e| ApiError::Internal(format!("Export task failed: {e}")))??;

    tracing::info!(
        color = %rgb.to_hex(),
        ?format,
        size = bytes.len(),
        "Palette exported"
    );

    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", format.file_name()),
            ),
        ],
        bytes,
    )
        .into_response())
}
