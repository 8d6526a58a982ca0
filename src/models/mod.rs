pub mod config;
pub mod report;
pub mod session_id;

pub use config::{AppConfig, ContrastConfig, ExportConfig, SessionConfig, SwatchConfig};
pub use report::{
    ColorCodes, ColorReport, ContrastSummary, PaletteReport, SessionSnapshot, SimulationEntry,
    SimulationReport,
};
pub use session_id::SessionId;
