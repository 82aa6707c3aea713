//! Application configuration loaded from a TOML file.
//!
//! Every field has a default, so an empty file (or no file) is valid.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use snowman_core::constants::{SCREEN_HEIGHT, SCREEN_WIDTH, SPAWN_INTERVAL_FLOOR, TICK_RATE};
use snowman_core::mesh_bounds::{self, MeshBoundsError};
use snowman_sim::engine::SimConfig;
use snowman_sim::world_setup::MeshExtents;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config value: {0}")]
    Invalid(String),
    #[error(transparent)]
    Mesh(#[from] MeshBoundsError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// RNG seed. Same seed and inputs give the same game.
    pub seed: u64,
    /// Simulation ticks per second.
    pub tick_rate: u32,
    /// Sleep between ticks to match wall-clock time.
    pub realtime: bool,
    /// Stop after this many simulated seconds. Zero runs until game over.
    pub max_run_secs: f64,
    /// Keep ticking this long after game over before exiting.
    pub game_over_linger_secs: f64,
    /// Lower bound for the decaying enemy spawn interval.
    pub spawn_interval_floor: f64,
    pub window: WindowConfig,
    pub autopilot: AutopilotConfig,
    pub assets: AssetConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AutopilotConfig {
    pub enabled: bool,
    /// Minimum seconds between shots.
    pub fire_interval_secs: f64,
    /// Largest cursor step per tick, in pixels.
    pub max_turn_px: f64,
    /// Fire only when the aim error is below this (degrees).
    pub fire_tolerance_deg: f32,
}

/// Optional OBJ files to take collision extents from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetConfig {
    pub snowman_obj: Option<PathBuf>,
    pub bullet_obj: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_rate: TICK_RATE,
            realtime: true,
            max_run_secs: 0.0,
            game_over_linger_secs: 2.0,
            spawn_interval_floor: SPAWN_INTERVAL_FLOOR,
            window: WindowConfig::default(),
            autopilot: AutopilotConfig::default(),
            assets: AssetConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

impl Default for AutopilotConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            fire_interval_secs: 0.25,
            max_turn_px: 300.0,
            fire_tolerance_deg: 0.3,
        }
    }
}

impl AppConfig {
    /// Read and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 {
            return Err(ConfigError::Invalid("tick_rate must be at least 1".into()));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size {}x{} has a zero dimension",
                self.window.width, self.window.height
            )));
        }
        if !non_negative(self.spawn_interval_floor) {
            return Err(ConfigError::Invalid(
                "spawn_interval_floor must be zero or positive".into(),
            ));
        }
        if !non_negative(self.max_run_secs) || !non_negative(self.game_over_linger_secs) {
            return Err(ConfigError::Invalid(
                "run durations must be zero or positive".into(),
            ));
        }
        let autopilot = &self.autopilot;
        if !non_negative(autopilot.fire_interval_secs) || !positive(autopilot.max_turn_px) {
            return Err(ConfigError::Invalid(
                "autopilot fire interval must be >= 0 and turn step > 0".into(),
            ));
        }
        Ok(())
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.window.width as f32 / self.window.height as f32
    }

    /// Collision extents: defaults, overridden by any configured OBJ file.
    pub fn mesh_extents(&self) -> Result<MeshExtents, ConfigError> {
        let mut extents = MeshExtents::default();
        if let Some(path) = &self.assets.snowman_obj {
            extents.snowman = mesh_bounds::load_obj_bounds(path)?;
            log::info!("snowman bounds from {}: {:?}", path.display(), extents.snowman);
        }
        if let Some(path) = &self.assets.bullet_obj {
            extents.bullet = mesh_bounds::load_obj_bounds(path)?;
            log::info!("bullet bounds from {}: {:?}", path.display(), extents.bullet);
        }
        Ok(extents)
    }

    /// Engine configuration derived from this config.
    pub fn sim_config(&self) -> Result<SimConfig, ConfigError> {
        Ok(SimConfig {
            seed: self.seed,
            tick_rate: self.tick_rate,
            spawn_interval_floor: self.spawn_interval_floor,
            aspect_ratio: self.aspect_ratio(),
            extents: self.mesh_extents()?,
        })
    }
}

/// False for negatives and NaN.
fn non_negative(value: f64) -> bool {
    value >= 0.0
}

fn positive(value: f64) -> bool {
    value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.tick_rate, 60);
        assert!((config.aspect_ratio() - 1000.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_toml_str(
            r#"
seed = 7
realtime = false

[window]
width = 1920
height = 1080

[autopilot]
enabled = false
"#,
        )
        .unwrap();
        assert_eq!(config.seed, 7);
        assert!(!config.realtime);
        assert_eq!(config.window.width, 1920);
        assert!(!config.autopilot.enabled);
        assert_eq!(config.autopilot.fire_interval_secs, 0.25);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = AppConfig::from_toml_str("sede = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let err = AppConfig::from_toml_str("tick_rate = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_negative_floor_rejected() {
        let err = AppConfig::from_toml_str("spawn_interval_floor = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::load("/no/such/snowman.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_missing_obj_surfaces_mesh_error() {
        let config = AppConfig {
            assets: AssetConfig {
                snowman_obj: Some(PathBuf::from("/no/such/snowman.obj")),
                bullet_obj: None,
            },
            ..Default::default()
        };
        assert!(matches!(config.sim_config(), Err(ConfigError::Mesh(_))));
    }

    #[test]
    fn test_sim_config_carries_settings() {
        let config = AppConfig {
            seed: 9,
            tick_rate: 30,
            ..Default::default()
        };
        let sim = config.sim_config().unwrap();
        assert_eq!(sim.seed, 9);
        assert_eq!(sim.tick_rate, 30);
        assert_eq!(sim.extents, MeshExtents::default());
    }
}
