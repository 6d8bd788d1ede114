use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ============================================================================
// Top-level config
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SolaceConfig {
    pub session: SessionConfig,
    pub chart: ChartConfig,
    pub logging: LoggingConfig,
}

impl SolaceConfig {
    /// Load config from a TOML file, falling back to defaults for missing fields.
    /// After loading, env var overrides are applied.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let mut config: SolaceConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML config")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Try to load from path; if the file is missing or invalid, return defaults
    /// with env overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::info!("Config file not found or invalid ({:#}), using defaults", e);
                Self::from_env()
            }
        }
    }

    /// Defaults with env overrides applied; no file involved.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        cfg.apply_env_overrides();
        cfg
    }

    /// `<config dir>/solace/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("solace").join("config.toml"))
    }

    /// Apply environment variable overrides on top of file-based config.
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("SOLACE_LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Ok(v) = std::env::var("SOLACE_LOG_FILE") {
            self.logging.file = Some(PathBuf::from(v));
        }
        if let Ok(v) = std::env::var("SOLACE_CHART_POINTS") {
            if let Ok(n) = v.parse() {
                self.chart.max_points = n;
            }
        }
        // https://no-color.org: any non-empty value disables color.
        if std::env::var("NO_COLOR").is_ok_and(|v| !v.is_empty()) {
            self.chart.color = false;
        }
    }
}

// ============================================================================
// Sub-configs
// ============================================================================

/// Which optional steps the interactive loop runs after each mood.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub show_prompt: bool,
    pub ask_resources: bool,
    pub show_chart: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_prompt: true,
            ask_resources: true,
            show_chart: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Most recent entries to plot.
    pub max_points: usize,
    pub color: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            max_points: 40,
            color: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. "warn" or "solace_core=debug".
    pub level: String,
    /// Write logs here instead of stderr.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
