//! Serializable views of engine results.
//!
//! These are the shapes returned by the HTTP API and printed by the CLI's
//! `--json` output.

use chroma_core::{
    simulate_all, BlindnessType, ColorData, ContrastReport, PaletteSet, PickerSession, Rgb,
};
use serde::Serialize;
use utoipa::ToSchema;

use super::SessionId;

/// Display strings for every color model
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ColorCodes {
    /// e.g. `#FF0000`
    pub hex: String,
    /// e.g. `rgb(255, 0, 0)`
    pub rgb: String,
    /// e.g. `hsl(0, 100%, 50%)`
    pub hsl: String,
    /// e.g. `hsv(0, 100%, 100%)`
    pub hsv: String,
    /// e.g. `cmyk(0%, 100%, 100%, 0%)`
    pub cmyk: String,
}

impl From<&ColorData> for ColorCodes {
    fn from(data: &ColorData) -> Self {
        Self {
            hex: data.hex.clone(),
            rgb: data.rgb.to_string(),
            hsl: data.hsl.to_string(),
            hsv: data.hsv.to_string(),
            cmyk: data.cmyk.to_string(),
        }
    }
}

/// WCAG contrast of a foreground over a background
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ContrastSummary {
    pub foreground: String,
    pub background: String,
    pub ratio: f64,
    /// Ratio formatted as `4.48:1`
    pub label: String,
    pub aa_normal: bool,
    pub aa_large: bool,
    pub aaa_normal: bool,
    pub aaa_large: bool,
}

impl ContrastSummary {
    pub fn evaluate(foreground: Rgb, background: Rgb) -> Self {
        ContrastReport::evaluate(foreground, background).into()
    }
}

impl From<ContrastReport> for ContrastSummary {
    fn from(report: ContrastReport) -> Self {
        Self {
            foreground: report.foreground.to_hex(),
            background: report.background.to_hex(),
            ratio: report.ratio,
            label: report.ratio_label(),
            aa_normal: report.aa_normal,
            aa_large: report.aa_large,
            aaa_normal: report.aaa_normal,
            aaa_large: report.aaa_large,
        }
    }
}

/// One simulated color
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SimulationEntry {
    #[serde(rename = "type")]
    #[schema(value_type = String)]
    pub kind: BlindnessType,
    pub hex: String,
    #[schema(value_type = Object)]
    pub rgb: Rgb,
}

impl SimulationEntry {
    pub fn new(kind: BlindnessType, rgb: Rgb) -> Self {
        Self {
            kind,
            hex: rgb.to_hex(),
            rgb,
        }
    }
}

/// Simulations of one color
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SimulationReport {
    pub original: String,
    pub simulations: Vec<SimulationEntry>,
}

impl SimulationReport {
    /// Simulate one deficiency, or all of them when `kind` is `None`.
    pub fn new(rgb: Rgb, kind: Option<BlindnessType>) -> Self {
        let simulations = match kind {
            Some(kind) => vec![SimulationEntry::new(
                kind,
                chroma_core::simulate_blindness(rgb, kind),
            )],
            None => simulate_all(rgb)
                .into_iter()
                .map(|(kind, seen)| SimulationEntry::new(kind, seen))
                .collect(),
        };

        Self {
            original: rgb.to_hex(),
            simulations,
        }
    }
}

/// Generated palettes for a base color
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaletteReport {
    pub base: String,
    #[schema(value_type = Object)]
    pub palettes: PaletteSet,
    /// Every palette color once, in group order
    pub combined: Vec<String>,
}

impl PaletteReport {
    pub fn new(rgb: Rgb) -> Self {
        let palettes = PaletteSet::from_rgb(rgb);
        let combined = palettes.combined();
        Self {
            base: rgb.to_hex(),
            palettes,
            combined,
        }
    }
}

/// Everything known about one sampled color
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ColorReport {
    #[schema(value_type = Object)]
    pub color: ColorData,
    pub codes: ColorCodes,
    pub contrast: ContrastSummary,
    pub simulations: Vec<SimulationEntry>,
    #[schema(value_type = Object)]
    pub palettes: PaletteSet,
}

impl ColorReport {
    pub fn new(rgb: Rgb, background: Rgb) -> Self {
        let color = ColorData::from_rgb(rgb);
        let palettes = PaletteSet::from_hsl(color.hsl);

        Self {
            codes: ColorCodes::from(&color),
            contrast: ContrastSummary::evaluate(rgb, background),
            simulations: SimulationReport::new(rgb, None).simulations,
            palettes,
            color,
        }
    }
}

/// Snapshot of a picker session
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionSnapshot {
    #[schema(value_type = String)]
    pub id: SessionId,
    /// Codes for the selected color, or the hovered one when nothing is selected
    #[schema(value_type = Object)]
    pub active: Option<ColorData>,
    pub hovered: Option<String>,
    pub selected: Option<String>,
    /// Most recent first
    pub history: Vec<String>,
}

impl SessionSnapshot {
    pub fn new(id: SessionId, session: &PickerSession) -> Self {
        Self {
            id,
            active: session.active_data(),
            hovered: session.hovered().map(Rgb::to_hex),
            selected: session.selected().map(Rgb::to_hex),
            history: session.history().iter().map(|rgb| rgb.to_hex()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[test]
    fn test_color_report_for_red() {
        let report = ColorReport::new(RED, WHITE);

        assert_eq!(report.codes.hex, "#FF0000");
        assert_eq!(report.codes.rgb, "rgb(255, 0, 0)");
        assert_eq!(report.codes.hsl, "hsl(0, 100%, 50%)");
        assert_eq!(report.contrast.label, "4.00:1");
        assert!(!report.contrast.aa_normal);
        assert_eq!(report.simulations.len(), 3);
        assert_eq!(report.palettes.complementary, ["#00FFFF"]);
    }

    #[test]
    fn test_color_report_json_shape() {
        let json = serde_json::to_value(ColorReport::new(RED, WHITE)).unwrap();

        assert_eq!(json["color"]["hex"], "#FF0000");
        assert_eq!(json["color"]["hsl"]["h"], 0);
        assert_eq!(json["contrast"]["background"], "#FFFFFF");
        assert_eq!(json["simulations"][0]["type"], "protanopia");
        assert_eq!(json["simulations"][0]["hex"], "#918E00");
        assert_eq!(json["palettes"]["triadic"][1], "#0000FF");
    }

    #[test]
    fn test_simulation_report_single_kind() {
        let report = SimulationReport::new(RED, Some(BlindnessType::Tritanopia));
        assert_eq!(report.original, "#FF0000");
        assert_eq!(report.simulations.len(), 1);
        assert_eq!(report.simulations[0].hex, "#F20000");
    }

    #[test]
    fn test_palette_report_combined_has_no_repeats() {
        let report = PaletteReport::new(RED);
        assert_eq!(report.base, "#FF0000");
        assert_eq!(report.combined.len(), 13);
    }

    #[test]
    fn test_session_snapshot() {
        let mut session = PickerSession::new();
        session.hover(Some(WHITE));
        session.select(RED);

        let snapshot = SessionSnapshot::new(SessionId::new("S1"), &session);
        assert_eq!(snapshot.selected.as_deref(), Some("#FF0000"));
        assert_eq!(snapshot.hovered.as_deref(), Some("#FFFFFF"));
        assert_eq!(snapshot.active.map(|data| data.hex), Some("#FF0000".to_string()));
        assert_eq!(snapshot.history, vec!["#FF0000"]);
    }
}
