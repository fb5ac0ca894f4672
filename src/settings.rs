//! Game tuning and preferences
//!
//! Loaded from a JSON file on native builds. Every field has a default, so a
//! partial file only overrides what it names.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{SettingsError, SettingsResult};

/// Game settings/tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed for reproducible runs
    pub seed: u64,

    // === Spawning ===
    /// Ticks between enemy spawns
    pub enemy_spawn_rate: u32,

    // === Actors ===
    pub ship_size: Vec2,
    /// Ship speed while a direction key is held (pixels per tick)
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub enemy_speed: f32,

    // === Explosions ===
    /// Max per-axis particle speed (pixels per tick)
    pub particle_speed: f32,
    /// Particle lifetime range in ticks, `[min, max)`
    pub particle_life: (f32, f32),

    // === Backdrop ===
    pub backdrop_speed: f32,
    pub backdrop_width: f32,

    /// Emit sound cues (the host decides what to do with them)
    pub sound: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5eed,

            enemy_spawn_rate: ENEMY_SPAWN_RATE,

            ship_size: Vec2::new(SHIP_WIDTH, SHIP_HEIGHT),
            ship_speed: SHIP_SPEED,
            bullet_speed: BULLET_SPEED,
            enemy_speed: ENEMY_SPEED,

            particle_speed: PARTICLE_SPEED,
            particle_life: (PARTICLE_MIN_LIFE, PARTICLE_MAX_LIFE),

            backdrop_speed: BACKDROP_SPEED,
            backdrop_width: BACKDROP_WIDTH,

            sound: true,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string and validate them
    pub fn from_json(json: &str) -> SettingsResult<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{}: {e}; using default settings", path.display());
                Self::default()
            }
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> SettingsResult<()> {
        if self.enemy_spawn_rate == 0 {
            return Err(SettingsError::Invalid(
                "enemy_spawn_rate must be at least 1 tick".into(),
            ));
        }
        let (min, max) = self.particle_life;
        if !(min > 0.0 && min < max) {
            return Err(SettingsError::Invalid(format!(
                "particle_life must be a non-empty positive range, got [{min}, {max})"
            )));
        }
        if !(self.particle_speed.is_finite() && self.particle_speed > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "particle_speed must be positive, got {}",
                self.particle_speed
            )));
        }
        for (name, speed) in [
            ("ship_speed", self.ship_speed),
            ("bullet_speed", self.bullet_speed),
            ("enemy_speed", self.enemy_speed),
            ("backdrop_speed", self.backdrop_speed),
        ] {
            if !speed.is_finite() {
                return Err(SettingsError::Invalid(format!(
                    "{name} must be finite, got {speed}"
                )));
            }
        }
        if self.backdrop_width <= 0.0 {
            return Err(SettingsError::Invalid(
                "backdrop_width must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7, "enemy_spawn_rate": 30 }"#).unwrap();
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.enemy_spawn_rate, 30);
        assert_eq!(settings.ship_speed, SHIP_SPEED);
        assert_eq!(settings.particle_life, (PARTICLE_MIN_LIFE, PARTICLE_MAX_LIFE));
    }

    #[test]
    fn test_zero_spawn_rate_rejected() {
        let err = Settings::from_json(r#"{ "enemy_spawn_rate": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_empty_life_range_rejected() {
        let err = Settings::from_json(r#"{ "particle_life": [80.0, 50.0] }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_zero_particle_speed_rejected() {
        let err = Settings::from_json(r#"{ "particle_speed": 0.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
        let err = Settings::from_json(r#"{ "particle_speed": -1.5 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_non_finite_speed_rejected() {
        let settings = Settings {
            bullet_speed: f32::INFINITY,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(SettingsError::Invalid(_))));

        let settings = Settings {
            backdrop_speed: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{ seed: ").unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load("/nonexistent/scroller-settings.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_or_default("/nonexistent/scroller-settings.json");
        assert_eq!(settings, Settings::default());
    }
}
