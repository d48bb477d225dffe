// src/config.rs
use serde::{Deserialize, Serialize};

use crate::errors::RegnumError;

/// Display title for the scaffold build.
pub const DEFAULT_TITLE: &str = "Regnum Platformer";

/// Logical rendering resolution the engine scales up to the window size.
pub const DEFAULT_VIRTUAL_WIDTH: u32 = 320;
pub const DEFAULT_VIRTUAL_HEIGHT: u32 = 240;

/// Downward acceleration, in engine units per second squared.
pub const DEFAULT_GRAVITY: f32 = 980.0;

/// Target peak jump displacement, in engine units.
pub const DEFAULT_JUMP_HEIGHT: f32 = 64.0;

/// Construction parameters handed to the engine at startup.
///
/// Built once by the entry point, never mutated afterwards, and consumed
/// exactly once when the template is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub title: String,
    pub virtual_width: u32,
    pub virtual_height: u32,
    pub gravity: f32,
    pub jump_height: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            virtual_width: DEFAULT_VIRTUAL_WIDTH,
            virtual_height: DEFAULT_VIRTUAL_HEIGHT,
            gravity: DEFAULT_GRAVITY,
            jump_height: DEFAULT_JUMP_HEIGHT,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), RegnumError> {
        if self.title.is_empty() {
            return Err(RegnumError::ConfigError(
                "title must not be empty".to_string(),
            ));
        }
        if self.virtual_width == 0 || self.virtual_height == 0 {
            return Err(RegnumError::ConfigError(format!(
                "virtual resolution must be positive, got {}x{}",
                self.virtual_width, self.virtual_height
            )));
        }
        if !self.gravity.is_finite() {
            return Err(RegnumError::ConfigError(format!(
                "gravity must be finite, got {}",
                self.gravity
            )));
        }
        if !self.jump_height.is_finite() {
            return Err(RegnumError::ConfigError(format!(
                "jump height must be finite, got {}",
                self.jump_height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_literals() {
        // Regression pin: a build that changes these should be caught.
        let config = GameConfig::default();
        assert!(!config.title.is_empty());
        assert_eq!(config.virtual_width, 320);
        assert_eq!(config.virtual_height, 240);
        assert_eq!(config.gravity, 980.0);
        assert_eq!(config.jump_height, 64.0);
        config.validate().unwrap();
    }

    #[test]
    fn test_empty_title_rejected() {
        let config = GameConfig {
            title: String::new(),
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_resolution_rejected() {
        let config = GameConfig {
            virtual_width: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            virtual_height: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_physics_rejected() {
        let config = GameConfig {
            gravity: f32::NAN,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            jump_height: f32::INFINITY,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
