//! Board view configuration using figment.
//!
//! Precedence, lowest to highest:
//!
//! 1. Built-in defaults
//! 2. An optional config file (`.toml`, `.yaml`/`.yml` or `.json`)
//! 3. Environment variables prefixed with `PIPELINE_BOARD_`, using `__` to
//!    reach nested keys (`PIPELINE_BOARD_ZOOM__MAX_PERCENT=200`)
//!
//! ```yaml
//! zoom:
//!   min_percent: 50
//!   max_percent: 150
//!   step_percent: 10
//! layout:
//!   base_width: 280
//!   expanded_width: 320
//! activity:
//!   max_entries: 500
//! ```

use crate::error::{BoardError, Result};
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "PIPELINE_BOARD_";

/// Top-level configuration for board rendering
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub zoom: ZoomConfig,
    pub layout: LayoutConfig,
    pub activity: ActivityConfig,
}

/// Zoom limits, in percent of the natural size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub min_percent: u16,
    pub max_percent: u16,
    pub step_percent: u16,
    pub default_percent: u16,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_percent: 50,
            max_percent: 150,
            step_percent: 10,
            default_percent: 100,
        }
    }
}

/// Inputs to the responsive column width formula, in pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub base_width: u32,
    pub expanded_width: u32,
    /// Column count up to which columns keep their full width
    pub comfortable_columns: u32,
    /// Lower bound on the shrink applied to crowded boards
    pub min_shrink: f64,
    pub min_width: u32,
    pub max_width: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_width: 280,
            expanded_width: 320,
            comfortable_columns: 4,
            min_shrink: 0.75,
            min_width: 120,
            max_width: 480,
        }
    }
}

/// Activity log retention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityConfig {
    /// Oldest entries are dropped beyond this many
    pub max_entries: usize,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self { max_entries: 500 }
    }
}

impl BoardConfig {
    /// Load configuration from defaults, an optional file, and the environment.
    ///
    /// A file path that does not exist contributes nothing.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            figment = merge_file(figment, path)?;
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        tracing::debug!(?config, "loaded board configuration");
        Ok(config)
    }

    /// Check that the limits are coherent
    pub fn validate(&self) -> Result<()> {
        let zoom = &self.zoom;
        if zoom.step_percent == 0 {
            return Err(BoardError::invalid_value("zoom.step_percent", "must be positive"));
        }
        if zoom.min_percent == 0 || zoom.min_percent > zoom.max_percent {
            return Err(BoardError::invalid_value(
                "zoom.min_percent",
                format!(
                    "must be positive and at most max_percent ({})",
                    zoom.max_percent
                ),
            ));
        }
        if !(zoom.min_percent..=zoom.max_percent).contains(&zoom.default_percent) {
            return Err(BoardError::invalid_value(
                "zoom.default_percent",
                format!(
                    "{} is outside {}..={}",
                    zoom.default_percent, zoom.min_percent, zoom.max_percent
                ),
            ));
        }

        let layout = &self.layout;
        if layout.min_width > layout.max_width {
            return Err(BoardError::invalid_value(
                "layout.min_width",
                format!("must be at most max_width ({})", layout.max_width),
            ));
        }
        if layout.comfortable_columns == 0 {
            return Err(BoardError::invalid_value(
                "layout.comfortable_columns",
                "must be positive",
            ));
        }
        if !(layout.min_shrink > 0.0 && layout.min_shrink <= 1.0) {
            return Err(BoardError::invalid_value(
                "layout.min_shrink",
                format!("{} is outside (0, 1]", layout.min_shrink),
            ));
        }

        if self.activity.max_entries == 0 {
            return Err(BoardError::invalid_value(
                "activity.max_entries",
                "must be positive",
            ));
        }
        Ok(())
    }
}

fn merge_file(figment: Figment, path: &Path) -> Result<Figment> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("toml") => Ok(figment.merge(Toml::file(path))),
        Some("yaml") | Some("yml") => Ok(figment.merge(Yaml::file(path))),
        Some("json") => Ok(figment.merge(Json::file(path))),
        _ => Err(BoardError::invalid_value(
            "config",
            format!("unsupported config file format: {}", path.display()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn clear_env() {
        for key in [
            "PIPELINE_BOARD_ZOOM__MAX_PERCENT",
            "PIPELINE_BOARD_LAYOUT__BASE_WIDTH",
            "PIPELINE_BOARD_ACTIVITY__MAX_ENTRIES",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = BoardConfig::load(None).unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    #[serial]
    fn test_yaml_file_overrides_defaults() {
        clear_env();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("board.yaml");
        fs::write(&path, "zoom:\n  max_percent: 200\nlayout:\n  base_width: 300\n").unwrap();

        let config = BoardConfig::load(Some(&path)).unwrap();
        assert_eq!(config.zoom.max_percent, 200);
        assert_eq!(config.zoom.min_percent, 50);
        assert_eq!(config.layout.base_width, 300);
    }

    #[test]
    #[serial]
    fn test_toml_file() {
        clear_env();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("board.toml");
        fs::write(&path, "[zoom]\nstep_percent = 25\n").unwrap();

        let config = BoardConfig::load(Some(&path)).unwrap();
        assert_eq!(config.zoom.step_percent, 25);
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clear_env();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("board.json");
        fs::write(&path, r#"{"zoom": {"max_percent": 180}}"#).unwrap();

        std::env::set_var("PIPELINE_BOARD_ZOOM__MAX_PERCENT", "120");
        let config = BoardConfig::load(Some(&path));
        clear_env();

        assert_eq!(config.unwrap().zoom.max_percent, 120);
    }

    #[test]
    #[serial]
    fn test_unsupported_extension() {
        clear_env();
        let result = BoardConfig::load(Some(Path::new("board.ini")));
        assert!(matches!(result, Err(BoardError::InvalidValue { .. })));
    }

    #[test]
    fn test_validate_rejects_inverted_zoom() {
        let mut config = BoardConfig::default();
        config.zoom.min_percent = 200;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_step() {
        let mut config = BoardConfig::default();
        config.zoom.step_percent = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_shrink() {
        let mut config = BoardConfig::default();
        config.layout.min_shrink = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_retention() {
        let mut config = BoardConfig::default();
        config.activity.max_entries = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_env_sets_activity_retention() {
        clear_env();
        std::env::set_var("PIPELINE_BOARD_ACTIVITY__MAX_ENTRIES", "25");
        let config = BoardConfig::load(None);
        clear_env();

        assert_eq!(config.unwrap().activity.max_entries, 25);
    }
}
