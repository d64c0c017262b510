//! Configuration for folio.
//!
//! Every field has a serde default so a missing or partial config file is
//! valid; `.folio/config.json` is only written when the user saves changes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Main configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolioConfig {
    /// Directory holding the `projects/` and `blog/` collections.
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,

    /// Image substituted when an event thumbnail is missing or unreadable.
    #[serde(default = "default_fallback_thumb")]
    pub fallback_thumb: PathBuf,

    /// Side length of the square model space the arc is laid out in.
    #[serde(default = "default_size")]
    pub size: f64,

    /// Arc start angle in degrees (y-down convention).
    #[serde(default = "default_start_angle")]
    pub start_angle: f64,

    /// Arc end angle in degrees; may be less than `start_angle`, in which
    /// case it normalizes forward across the 0° boundary.
    #[serde(default = "default_end_angle")]
    pub end_angle: f64,

    /// Center-line radius of the band.
    #[serde(default = "default_radius")]
    pub radius: f64,

    /// Radial thickness of the band.
    #[serde(default = "default_band_thickness")]
    pub band_thickness: f64,

    /// Angular gap trimmed from both ends of each segment. The reference
    /// design keeps this at zero and draws separators as strokes instead.
    #[serde(default)]
    pub gap_deg: f64,

    /// Extra radial margin for pointer hit-testing beyond the band edges.
    #[serde(default = "default_hit_margin")]
    pub hit_margin: f64,

    /// Radial length of the per-segment indicator wedge.
    #[serde(default = "default_wedge_length")]
    pub wedge_length: f64,

    /// Half the angular spread of the wedge base.
    #[serde(default = "default_wedge_half_spread")]
    pub wedge_half_spread: f64,

    /// Distance from the inner band edge to the year labels.
    #[serde(default = "default_label_inset")]
    pub label_inset: f64,

    /// How long a segment stays active after the pointer leaves it, in
    /// milliseconds. Prevents panel flicker when crossing separators.
    #[serde(default = "default_hover_linger_ms")]
    pub hover_linger_ms: u64,

    /// Color theme name: "mocha", "latte", or "high-contrast".
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Icon glyph mode: "nerd", "unicode", or "ascii".
    #[serde(default = "default_icon_mode")]
    pub icon_mode: String,
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}

fn default_fallback_thumb() -> PathBuf {
    PathBuf::from("assets/fallback.png")
}

fn default_size() -> f64 {
    800.0
}

fn default_start_angle() -> f64 {
    200.0
}

fn default_end_angle() -> f64 {
    -20.0
}

fn default_radius() -> f64 {
    300.0
}

fn default_band_thickness() -> f64 {
    56.0
}

fn default_hit_margin() -> f64 {
    8.0
}

fn default_wedge_length() -> f64 {
    26.0
}

fn default_wedge_half_spread() -> f64 {
    9.0
}

fn default_label_inset() -> f64 {
    14.0
}

fn default_hover_linger_ms() -> u64 {
    80
}

fn default_theme() -> String {
    "mocha".into()
}

fn default_icon_mode() -> String {
    "unicode".into()
}

impl Default for FolioConfig {
    fn default() -> Self {
        // serde's field defaults are the single source of truth
        serde_json::from_str("{}").unwrap_or_else(|_| unreachable!())
    }
}

impl FolioConfig {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Load the config under `repo/.folio/config.json`, falling back to the
    /// defaults when the file does not exist.
    pub fn load_or_default(repo: &Path) -> Self {
        let path = Self::path_in(repo);
        match Self::load(&path) {
            Ok(config) => config,
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                tracing::warn!("ignoring unreadable config {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Save configuration to a file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Canonical config path inside a content repository.
    pub fn path_in(repo: &Path) -> PathBuf {
        repo.join(".folio").join("config.json")
    }

    /// Center of the model space.
    pub fn center(&self) -> crate::geometry::Point {
        crate::geometry::Point::new(self.size / 2.0, self.size / 2.0)
    }

    /// Normalized end angle (forward of `start_angle`).
    pub fn normalized_end(&self) -> f64 {
        crate::geometry::normalize_end_angle(self.start_angle, self.end_angle)
    }

    /// Outer band radius.
    pub fn r_outer(&self) -> f64 {
        self.radius + self.band_thickness / 2.0
    }

    /// Inner band radius.
    pub fn r_inner(&self) -> f64 {
        self.radius - self.band_thickness / 2.0
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(serde_json::Error),

    #[error("Serialize error: {0}")]
    Serialize(serde_json::Error),
}
