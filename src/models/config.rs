use chroma_core::Rgb;
use serde::Deserialize;
use std::path::Path;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Contrast checker settings
    pub contrast: ContrastConfig,

    /// Palette export settings
    pub export: ExportConfig,

    /// Picker session limits
    pub sessions: SessionConfig,
}

/// Settings for contrast reports
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ContrastConfig {
    /// Background the sampled color is checked against when none is given
    pub background: String,
}

impl Default for ContrastConfig {
    fn default() -> Self {
        Self {
            background: "#FFFFFF".to_string(),
        }
    }
}

/// Metadata and layout for exported palettes
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    /// Application name written to JSON exports
    pub app_name: String,

    /// Footer line for every export format
    pub signature: String,

    /// PNG swatch grid layout
    pub swatch: SwatchConfig,

    /// Extra fonts for PNG sheet text, loaded before system fonts
    pub font_dir: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            app_name: "Chroma Vision".to_string(),
            signature: "Made with Chroma Vision".to_string(),
            swatch: SwatchConfig::default(),
            font_dir: None,
        }
    }
}

/// PNG swatch grid geometry, in pixels
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SwatchConfig {
    /// Maximum swatches per row
    pub columns: u32,
    /// Edge length of one swatch
    pub tile: u32,
    /// Space between swatches
    pub gap: u32,
    /// Border around the grid
    pub padding: u32,
    /// Canvas color behind the swatches
    pub background: String,
}

impl Default for SwatchConfig {
    fn default() -> Self {
        Self {
            columns: 10,
            tile: 56,
            gap: 12,
            padding: 24,
            background: "#0B0B0D".to_string(),
        }
    }
}

/// Bounds on the in-memory session store
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Sessions kept at once; the least recently used is evicted beyond this
    pub max_sessions: usize,
    /// Seconds without a request before a session is dropped
    pub idle_timeout_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_sessions: 1000,
            idle_timeout_secs: 3600,
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file, or defaults if no path is given.
    ///
    /// Unreadable or invalid files log a warning and fall back to defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::info!("No config file set, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        background = %config.contrast.background,
                        columns = config.export.swatch.columns,
                        max_sessions = config.sessions.max_sessions,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse YAML, filling missing keys with defaults.
    ///
    /// Invalid colors and zero-sized grid settings are replaced by their
    /// defaults so later stages never see them.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        // serde_yaml rejects an empty document instead of using defaults
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: Self = serde_yaml::from_str(yaml)?;
        config.sanitize();
        Ok(config)
    }

    fn sanitize(&mut self) {
        let contrast_default = ContrastConfig::default();
        if self.contrast.background.parse::<Rgb>().is_err() {
            tracing::warn!(
                value = %self.contrast.background,
                "Invalid contrast background, using default"
            );
            self.contrast.background = contrast_default.background;
        }

        let swatch_default = SwatchConfig::default();
        let swatch = &mut self.export.swatch;
        if swatch.background.parse::<Rgb>().is_err() {
            tracing::warn!(value = %swatch.background, "Invalid swatch background, using default");
            swatch.background = swatch_default.background;
        }
        if swatch.columns == 0 {
            swatch.columns = swatch_default.columns;
        }
        if swatch.tile == 0 {
            swatch.tile = swatch_default.tile;
        }

        let sessions_default = SessionConfig::default();
        if self.sessions.max_sessions == 0 {
            self.sessions.max_sessions = sessions_default.max_sessions;
        }
        if self.sessions.idle_timeout_secs == 0 {
            self.sessions.idle_timeout_secs = sessions_default.idle_timeout_secs;
        }
    }

    /// Default background for contrast reports.
    pub fn contrast_background(&self) -> Rgb {
        self.contrast
            .background
            .parse()
            .unwrap_or(Rgb::new(255, 255, 255))
    }
}

impl SwatchConfig {
    /// Canvas color behind the swatches.
    pub fn background_rgb(&self) -> Rgb {
        self.background.parse().unwrap_or(Rgb::new(0x0B, 0x0B, 0x0D))
    }
}
