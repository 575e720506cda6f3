//! Seek bar appearance settings
//!
//! Loaded from `progress_bar.json` in the platform config directory. A
//! missing or broken file never stops the bar from rendering; defaults are
//! used instead.

use crate::{CueError, CueResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name of the config inside the config directory
pub const CONFIG_FILE_NAME: &str = "progress_bar.json";

/// RGBA color with components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Rgba {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Colors used by the seek bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Unplayed part of the track
    pub track: Rgba,
    /// Played part of the track
    pub progress: Rgba,
    /// Track while the duration is unknown
    pub loading: Rgba,
    pub answered: Rgba,
    pub skipped: Rgba,
    pub pending: Rgba,
    pub tooltip_background: Rgba,
    pub tooltip_text: Rgba,
    /// Secondary tooltip line
    pub tooltip_detail: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            track: Rgba::rgb(0.25, 0.25, 0.27),
            progress: Rgba::rgb(0.23, 0.51, 0.96),
            loading: Rgba::rgba(0.5, 0.5, 0.5, 0.4),
            answered: Rgba::rgb(0.13, 0.77, 0.37),
            skipped: Rgba::rgb(0.96, 0.62, 0.04),
            pending: Rgba::rgb(0.23, 0.51, 0.96),
            tooltip_background: Rgba::rgba(0.0, 0.0, 0.0, 0.8),
            tooltip_text: Rgba::rgb(1.0, 1.0, 1.0),
            tooltip_detail: Rgba::rgb(0.99, 0.83, 0.3),
        }
    }
}

/// Geometry and labels for the seek bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressBarConfig {
    /// Total widget height, tooltip area included
    pub height: f32,
    /// Height of the visible track
    pub track_height: f32,
    /// Horizontal inset of the track inside the widget
    pub track_padding: f32,
    pub marker_radius: f32,
    /// Tooltip text while the duration is unknown
    pub loading_label: String,
    pub palette: Palette,
}

impl Default for ProgressBarConfig {
    fn default() -> Self {
        Self {
            height: 64.0,
            track_height: 6.0,
            track_padding: 12.0,
            marker_radius: 5.0,
            loading_label: "Loading...".to_string(),
            palette: Palette::default(),
        }
    }
}

impl ProgressBarConfig {
    /// Default location of the config file
    pub fn default_path() -> CueResult<PathBuf> {
        let dirs = directories::ProjectDirs::from("app", "cuepoint", "Cuepoint")
            .ok_or(CueError::NoConfigDir)?;
        Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Read a config file
    pub fn load_from_file(path: &Path) -> CueResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Write the config as pretty JSON, creating parent directories
    pub fn save_to_file(&self, path: &Path) -> CueResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load from `path`, falling back to defaults
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            debug!("No seek bar config at {:?}, using defaults", path);
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load seek bar config from {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load from the default location, falling back to defaults
    pub fn load() -> Self {
        match Self::default_path() {
            Ok(path) => Self::load_or_default(&path),
            Err(e) => {
                warn!("{}, using default seek bar config", e);
                Self::default()
            }
        }
    }
}
