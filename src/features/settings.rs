//! Glow settings persistence
//!
//! Handles saving and loading the widget's animation configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ui::animation::{Direction, KeyframeEasing, Phase};
use crate::ui::theme::{ColorPair, Palette, PalettePreset};
use crate::ui::widgets::Surface;

/// Environment variable overriding the settings file location
pub const SETTINGS_ENV: &str = "GLOWBORDER_SETTINGS";

/// Shortest accepted timer period
const MIN_PERIOD: Duration = Duration::from_millis(16);

/// Longest accepted timer period or glow delay
const MAX_PERIOD: Duration = Duration::from_secs(3600);

/// Direction period used when the configured one is not a number
const DEFAULT_DIRECTION_PERIOD: Duration = Duration::from_millis(750);

/// Animation and appearance settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowSettings {
    /// Direction rotation period in seconds
    pub duration_secs: f32,
    /// Color cycling period in milliseconds
    pub color_interval_ms: u64,
    /// Walk TOP -> LEFT -> BOTTOM -> RIGHT (counter-clockwise otherwise)
    pub clockwise: bool,
    /// Phase entered on mount
    pub initial_phase: Phase,
    /// Anchor the highlight starts from
    pub initial_direction: Direction,
    /// Delay before the initial glow hands over to the steady phase (0 = immediate)
    pub glow_delay_ms: u64,
    /// Number of keyframes in the initial glow
    pub glow_keyframes: u32,
    /// Angle of the first glow lobe in degrees
    pub glow_start_angle: f32,
    pub glow_easing: KeyframeEasing,
    /// Color ticks in the steady phase before the glow replays (None = never)
    pub breathing_threshold: Option<u32>,
    pub palette: PalettePreset,
    /// Hex color pairs replacing the preset when non-empty
    pub custom_palette: Vec<(String, String)>,
    /// Element wrapped by the border
    pub surface: Surface,
    /// Visible border thickness in logical pixels
    pub border_width: f32,
    pub corner_radius: f32,
    pub dark_mode: bool,
}

impl Default for GlowSettings {
    fn default() -> Self {
        Self {
            duration_secs: 0.75,
            color_interval_ms: 300,
            clockwise: true,
            initial_phase: Phase::InitialGlow,
            initial_direction: Direction::Top,
            glow_delay_ms: 1600,
            glow_keyframes: 24,
            glow_start_angle: 0.0,
            glow_easing: KeyframeEasing::EaseInOut,
            breathing_threshold: None,
            palette: PalettePreset::Aurora,
            custom_palette: Vec::new(),
            surface: Surface::Button,
            border_width: 1.0,
            corner_radius: 999.0,
            dark_mode: true,
        }
    }
}

impl GlowSettings {
    /// Direction rotation period, clamped between 16 ms and one hour
    pub fn direction_period(&self) -> Duration {
        let period = if self.duration_secs.is_finite() {
            Duration::try_from_secs_f32(self.duration_secs.max(0.0)).unwrap_or(MAX_PERIOD)
        } else {
            DEFAULT_DIRECTION_PERIOD
        };
        period.clamp(MIN_PERIOD, MAX_PERIOD)
    }

    /// Color cycling period, clamped between 16 ms and one hour
    pub fn color_period(&self) -> Duration {
        Duration::from_millis(self.color_interval_ms).clamp(MIN_PERIOD, MAX_PERIOD)
    }

    /// Initial glow delay, capped at one hour
    pub fn glow_delay(&self) -> Duration {
        Duration::from_millis(self.glow_delay_ms).min(MAX_PERIOD)
    }

    /// Custom palette when every pair parses, the preset otherwise
    pub fn resolve_palette(&self) -> Palette {
        if self.custom_palette.is_empty() {
            return self.palette.palette();
        }

        let pairs: Option<Vec<ColorPair>> = self
            .custom_palette
            .iter()
            .map(|(main, light)| ColorPair::parse(main, light))
            .collect();

        match pairs {
            Some(pairs) => Palette::new(pairs),
            None => {
                tracing::warn!("Invalid custom palette, using {:?}", self.palette);
                self.palette.palette()
            }
        }
    }

    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(SETTINGS_ENV) {
            return Some(PathBuf::from(path));
        }
        directories::ProjectDirs::from("com", "glowborder", "Glowborder")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        match Self::file_path() {
            Some(path) => Self::load_or_default(&path),
            None => Self::default(),
        }
    }

    /// Load settings from `path`; missing or corrupt files give defaults
    pub fn load_or_default(path: &Path) -> Self {
        tracing::info!("Loading glow settings from {}", path.display());

        match Self::load_from_file(path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(_)) => Self::default(),
            Err(e) => {
                tracing::warn!("Ignoring settings file: {}", e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}
