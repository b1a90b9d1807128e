//! Game configuration
//!
//! Uses RON (Rusty Object Notation) for a human-readable tuning file.
//! Every field has a default, so a partial file only overrides what it names.
//! A missing file is not an error: the built-in defaults are used.

use std::fs;
use std::path::Path;
use serde::{Serialize, Deserialize};

/// Default config file looked up in the working directory
pub const CONFIG_FILE: &str = "runner.ron";

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Where the active config came from (for the startup log line)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Defaults,
    File(String),
}

// =============================================================================
// Sections
// =============================================================================

/// Window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub title: String,
    /// Frames per second, 0 = unlocked
    pub target_fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 420,
            title: "Endless Scroller with Obstacles and Collectibles".to_string(),
            target_fps: 60,
        }
    }
}

impl WindowConfig {
    /// Target frame time in seconds (None = unlocked)
    pub fn frame_time(&self) -> Option<f64> {
        if self.target_fps == 0 {
            None
        } else {
            Some(1.0 / self.target_fps as f64)
        }
    }
}

/// Player movement and arena bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Position the player is placed at on session start
    pub start: [f32; 3],
    pub initial_speed: f32,
    /// Speed gained per second of gameplay
    pub speed_ramp: f32,
    /// Optional ceiling for the speed ramp (None = grows forever)
    pub max_speed: Option<f32>,
    /// Half the edge length of the player cube
    pub half_extent: f32,
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
    /// Upper end of the debug panel speed slider
    pub slider_max_speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start: [0.0, 0.0, 0.5],
            initial_speed: 5.0,
            speed_ramp: 0.01,
            max_speed: None,
            half_extent: 0.5,
            min_x: -4.0,
            max_x: 4.0,
            min_z: -1.0,
            max_z: 2.0,
            slider_max_speed: 10.0,
        }
    }
}

/// Scrolling world layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub obstacle_count: usize,
    pub collectible_count: usize,
    /// Entities past this depth have gone behind the camera
    pub recycle_threshold: f32,
    /// Far depth that recycled entities jump back to
    pub recycle_depth: f32,
    /// Depth offset applied to every entity when a session restarts
    pub session_shift: f32,
    pub collectible_reward: i32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            obstacle_count: 5,
            collectible_count: 5,
            recycle_threshold: 5.0,
            recycle_depth: -20.0,
            session_shift: -20.0,
            collectible_reward: 100,
        }
    }
}

/// Lightning strike timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightningConfig {
    pub flash_duration: f32,
    /// Wait before the very first strike
    pub initial_cooldown: f32,
    /// Lower bound (inclusive, not negative) of the re-rolled cooldown, whole seconds
    pub cooldown_min: i32,
    /// Upper bound (exclusive) of the re-rolled cooldown, whole seconds
    pub cooldown_max: i32,
}

impl Default for LightningConfig {
    fn default() -> Self {
        Self {
            flash_duration: 0.2,
            initial_cooldown: 3.0,
            cooldown_min: 2,
            cooldown_max: 7,
        }
    }
}

/// Screen fade settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Alpha change per frame (not per second)
    pub alpha_step: f32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self { alpha_step: 0.02 }
    }
}

/// All tunables of the game
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub player: PlayerConfig,
    pub world: WorldConfig,
    pub lightning: LightningConfig,
    pub transition: TransitionConfig,
}

impl GameConfig {
    /// Parse and validate a config from RON text
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file path
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        if !path.exists() {
            return Ok((Self::default(), ConfigSource::Defaults));
        }
        let config = Self::load(path)?;
        Ok((config, ConfigSource::File(path.display().to_string())))
    }

    /// Check every cross-field rule; the simulation relies on these holding
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fail = |msg: String| Err(ConfigError::ValidationError(msg));

        let w = &self.window;
        if w.width <= 0 || w.height <= 0 {
            return fail(format!("window size must be positive ({}x{})", w.width, w.height));
        }

        let p = &self.player;
        if !p.start.iter().all(|v| v.is_finite()) {
            return fail(format!("player start must be finite ({:?})", p.start));
        }
        if !(p.initial_speed >= 0.0) {
            return fail(format!("initial_speed must be >= 0 ({})", p.initial_speed));
        }
        if !(p.speed_ramp >= 0.0) {
            return fail(format!("speed_ramp must be >= 0 ({})", p.speed_ramp));
        }
        if let Some(max) = p.max_speed {
            if !(max >= p.initial_speed) {
                return fail(format!("max_speed ({}) must be >= initial_speed ({})", max, p.initial_speed));
            }
        }
        if !(p.half_extent > 0.0) {
            return fail(format!("half_extent must be positive ({})", p.half_extent));
        }
        if !(p.min_x <= p.max_x) || !(p.min_z <= p.max_z) {
            return fail(format!(
                "arena bounds inverted (x {}..{}, z {}..{})",
                p.min_x, p.max_x, p.min_z, p.max_z
            ));
        }
        if !(p.slider_max_speed > 0.0) {
            return fail(format!("slider_max_speed must be positive ({})", p.slider_max_speed));
        }

        let wd = &self.world;
        if !(wd.recycle_depth < wd.recycle_threshold) {
            return fail(format!(
                "recycle_depth ({}) must be below recycle_threshold ({})",
                wd.recycle_depth, wd.recycle_threshold
            ));
        }
        if !wd.session_shift.is_finite() {
            return fail(format!("session_shift must be finite ({})", wd.session_shift));
        }

        let l = &self.lightning;
        if !(l.flash_duration > 0.0) {
            return fail(format!("flash_duration must be positive ({})", l.flash_duration));
        }
        if !(l.initial_cooldown >= 0.0) {
            return fail(format!("initial_cooldown must be >= 0 ({})", l.initial_cooldown));
        }
        if l.cooldown_min < 0 {
            return fail(format!("cooldown_min must be >= 0 ({})", l.cooldown_min));
        }
        if l.cooldown_min >= l.cooldown_max {
            return fail(format!(
                "cooldown range is empty ({}..{})",
                l.cooldown_min, l.cooldown_max
            ));
        }

        let step = self.transition.alpha_step;
        if !(step > 0.0 && step <= 1.0) {
            return fail(format!("transition alpha_step must be in (0, 1] ({})", step));
        }

        Ok(())
    }
}
