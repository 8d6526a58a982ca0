use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use chroma_core::BlindnessType;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

use super::params::parse_color;
use crate::error::ApiError;
use crate::models::{AppConfig, ColorReport, ContrastSummary, SimulationReport};

/// Inspect a color
///
/// Returns every color code, the contrast against the configured background,
/// color-blindness simulations and the generated palettes.
#[utoipa::path(
    get,
    path = "/api/color/{color}",
    responses(
        (status = 200, description = "Color report", body = ColorReport),
        (status = 400, description = "Invalid color"),
    ),
    params(
        ("color" = String, Path, description = "RRGGBB, #RRGGBB (percent-encoded) or r,g,b"),
    ),
    tag = "Color"
)]
pub async fn handle_color(
    State(config): State<Arc<AppConfig>>,
    Path(color): Path<String>,
) -> Result<Json<ColorReport>, ApiError> {
    let rgb = parse_color(&color)?;
    tracing::debug!(color = %rgb.to_hex(), "Color report requested");

    Ok(Json(ColorReport::new(rgb, config.contrast_background())))
}

/// Query for the contrast checker
#[derive(Debug, Deserialize, IntoParams)]
pub struct ContrastQuery {
    /// Foreground color
    pub fg: String,
    /// Background color; the configured background when omitted
    pub bg: Option<String>,
}

/// Check WCAG contrast
#[utoipa::path(
    get,
    path = "/api/contrast",
    responses(
        (status = 200, description = "Contrast ratio and WCAG verdicts", body = ContrastSummary),
        (status = 400, description = "Invalid color"),
    ),
    params(ContrastQuery),
    tag = "Accessibility"
)]
pub async fn handle_contrast(
    State(config): State<Arc<AppConfig>>,
    Query(query): Query<ContrastQuery>,
) -> Result<Json<ContrastSummary>, ApiError> {
    let foreground = parse_color(&query.fg)?;
    let background = match query.bg.as_deref() {
        Some(bg) => parse_color(bg)?,
        None => config.contrast_background(),
    };

    let summary = ContrastSummary::evaluate(foreground, background);
    tracing::debug!(
        fg = %summary.foreground,
        bg = %summary.background,
        ratio = summary.ratio,
        "Contrast checked"
    );
    Ok(Json(summary))
}

/// Query for the blindness simulator
#[derive(Debug, Deserialize, IntoParams)]
pub struct SimulateQuery {
    /// protanopia, deuteranopia or tritanopia; all three when omitted
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Simulate color-blindness
#[utoipa::path(
    get,
    path = "/api/simulate/{color}",
    responses(
        (status = 200, description = "Simulated colors", body = SimulationReport),
        (status = 400, description = "Invalid color or unknown blindness type"),
    ),
    params(
        ("color" = String, Path, description = "RRGGBB, #RRGGBB (percent-encoded) or r,g,b"),
        SimulateQuery,
    ),
    tag = "Accessibility"
)]
pub async fn handle_simulate(
    Path(color): Path<String>,
    Query(query): Query<SimulateQuery>,
) -> Result<Json<SimulationReport>, ApiError> {
    let rgb = parse_color(&color)?;
    let kind = query
        .kind
        .as_deref()
        .map(str::parse::<BlindnessType>)
        .transpose()?;

    Ok(Json(SimulationReport::new(rgb, kind)))
}
